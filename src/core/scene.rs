// Copyright @yucwang 2026

use log::info;

use crate::core::emitter::Emitter;
use crate::core::integrator::Integrator;
use crate::core::medium::Medium;
use crate::core::sensor::Sensor;
use crate::core::settings::{AtmosphericModel, CameraKind, IntegratorKind, RenderSettings};
use crate::emitters::directional::DirectionalEmitter;
use crate::emitters::distant_disk::DistantDiskEmitter;
use crate::emitters::solar::sun_direction;
use crate::integrators::path::PathIntegrator;
use crate::integrators::transmittance::TransmittanceIntegrator;
use crate::math::constants::{Float, SUN_ANGULAR_DIAMETER};
use crate::media::atmosphere::CompositeAtmosphere;
use crate::sensors::equirectangular::EquirectangularCamera;
use crate::sensors::fisheye::FisheyeCamera;

/// Everything one render reads. Never mutated once rendering starts.
pub struct Scene {
    pub atmosphere: Box<dyn Medium>,
    pub camera: Box<dyn Sensor>,
    pub integrator: Box<dyn Integrator>,
    pub emitter: Box<dyn Emitter>,
    pub ground_albedo: Float,
}

impl Scene {
    pub fn new(atmosphere: Box<dyn Medium>,
               camera: Box<dyn Sensor>,
               integrator: Box<dyn Integrator>,
               emitter: Box<dyn Emitter>,
               ground_albedo: Float) -> Self {
        Self {
            atmosphere,
            camera,
            integrator,
            emitter,
            ground_albedo: ground_albedo.clamp(0.0, 1.0),
        }
    }

    pub fn from_settings(settings: &RenderSettings) -> Self {
        let atmosphere: Box<dyn Medium> = match settings.atmospheric_model {
            AtmosphericModel::Composite => Box::new(CompositeAtmosphere::new(
                settings.month, settings.turbidity, &settings.aerosol_type)),
        };

        let camera: Box<dyn Sensor> = match settings.camera {
            CameraKind::Equirectangular => Box::new(
                EquirectangularCamera::new(settings.eye_altitude, settings.width, settings.height)
                    .with_upper_hemisphere(settings.upper_hemisphere)
                    .with_horizon_detail(settings.horizon_detail)),
            CameraKind::Fisheye => Box::new(
                FisheyeCamera::new(settings.eye_altitude, settings.width, settings.height)),
        };

        let integrator: Box<dyn Integrator> = match settings.integrator {
            IntegratorKind::PathTracing => Box::new(
                PathIntegrator::new(settings.max_order, settings.only_ms)),
            IntegratorKind::Transmittance => Box::new(TransmittanceIntegrator::new()),
        };

        let direction = sun_direction(settings.sun_elevation, settings.sun_azimuth);
        let emitter: Box<dyn Emitter> = if settings.sun_disk {
            Box::new(DistantDiskEmitter::new(direction, SUN_ANGULAR_DIAMETER))
        } else {
            Box::new(DirectionalEmitter::new(direction))
        };

        let scene = Self::new(atmosphere, camera, integrator, emitter, settings.albedo);
        info!("{}", scene.describe());
        scene
    }

    pub fn describe(&self) -> String {
        format!("Scene\n{}\n{}\n{}\n{}\n  ground_albedo: {}",
                self.atmosphere.describe(),
                self.camera.describe(),
                self.integrator.describe(),
                self.emitter.describe(),
                self.ground_albedo)
    }
}

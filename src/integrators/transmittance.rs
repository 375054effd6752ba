// Copyright @yucwang 2026

use crate::core::geometry::scene_intersect;
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::tracking::ratio_tracking_transmittance;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Transmittance of the atmosphere along the primary ray up to the ground
/// or to space. Ignores lighting entirely.
pub struct TransmittanceIntegrator;

impl TransmittanceIntegrator {
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for TransmittanceIntegrator {
    fn li(&self, scene: &Scene, sampler: &mut Sampler, ray: &Ray3f, wl: Float) -> Float {
        let bound = match scene_intersect(ray) {
            Some(bound) => bound,
            None => return 0.0,
        };
        let majorant = scene.atmosphere.max_extinction(wl);
        ratio_tracking_transmittance(scene.atmosphere.as_ref(), sampler, ray,
                                     bound.t_min, bound.t_max, majorant, wl)
    }

    fn describe(&self) -> String {
        String::from("TransmittanceIntegrator")
    }
}

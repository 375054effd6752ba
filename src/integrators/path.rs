// Copyright @yucwang 2026

use crate::core::geometry::{ray_sphere_intersection, scene_intersect};
use crate::core::integrator::Integrator;
use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::core::tracking::{ratio_tracking_transmittance, sample_interaction};
use crate::math::constants::{ATMOSPHERE_RADIUS, EARTH_RADIUS, Float, INV_PI, Vector3f, earth_center};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::warp::{sample_cosine_hemisphere, sample_uniform_sphere};

// Lift of the ground shading point along the normal, in meters.
const GROUND_OFFSET: Float = 1.0;
const RR_START_ORDER: u32 = 5;
const RR_MIN_PROBABILITY: Float = 0.05;

/// Light arriving at a point straight from the sun.
pub struct SunSample {
    pub direction: Vector3f,
    pub transmittance: Float,
    pub radiance: Float,
}

/// Next event estimation towards the sun from `p`. The ground blocks the
/// shadow ray completely; otherwise the atmosphere attenuates it up to the
/// top of the shell.
pub fn sample_sun(scene: &Scene, sampler: &mut Sampler, p: &Vector3f,
                  majorant: Float, wl: Float) -> SunSample {
    let light = scene.emitter.sample(&sampler.next_2d(), wl);
    let shadow_ray = Ray3f::new(*p, light.direction);
    let transmittance = if ray_sphere_intersection(&shadow_ray, EARTH_RADIUS).is_some() {
        0.0
    } else {
        let t_max = ray_sphere_intersection(&shadow_ray, ATMOSPHERE_RADIUS).unwrap_or(0.0);
        ratio_tracking_transmittance(scene.atmosphere.as_ref(), sampler, &shadow_ray,
                                     0.0, t_max, majorant, wl)
    };
    SunSample {
        direction: shadow_ray.dir(),
        transmittance,
        radiance: light.radiance,
    }
}

/// Volumetric path tracer with sun next event estimation at every vertex.
/// The ground is a Lambertian sphere; space is black.
pub struct PathIntegrator {
    max_order: u32,
    only_ms: bool,
}

impl PathIntegrator {
    /// `max_order` bounds the number of scattering events along a path.
    /// With `only_ms` the first order is traced but never contributes.
    pub fn new(max_order: u32, only_ms: bool) -> Self {
        Self { max_order, only_ms }
    }

    fn contributes(&self, order: u32) -> bool {
        !self.only_ms || order > 1
    }
}

impl Integrator for PathIntegrator {
    fn li(&self, scene: &Scene, sampler: &mut Sampler, ray: &Ray3f, wl: Float) -> Float {
        let atmosphere = scene.atmosphere.as_ref();
        let majorant = atmosphere.max_extinction(wl);

        let mut ray = *ray;
        let mut radiance = 0.0;
        let mut throughput = 1.0;

        for order in 1..=self.max_order {
            let bound = match scene_intersect(&ray) {
                Some(bound) => bound,
                None => break,
            };

            match sample_interaction(atmosphere, sampler, &ray, bound.t_min, bound.t_max, majorant, wl) {
                None if !bound.hit_ground => break,
                None => {
                    let bsdf = scene.ground_albedo * INV_PI;
                    let hit = ray.at(bound.t_max);
                    let n = (hit - earth_center()).normalize();
                    let shading_point = hit + n * GROUND_OFFSET;

                    let sun = sample_sun(scene, sampler, &shading_point, majorant, wl);
                    let n_dot_l = n.dot(&sun.direction).max(0.0);
                    if self.contributes(order) {
                        radiance += throughput * sun.radiance * bsdf * sun.transmittance * n_dot_l;
                    }

                    throughput *= bsdf;

                    let local = sample_cosine_hemisphere(&sampler.next_2d());
                    let wi = Frame::from_normal(&n).from_local(&local);
                    ray = Ray3f::new(shading_point, wi);
                }
                Some(interaction) => {
                    let albedo = atmosphere.scattering_albedo_at(&interaction.p, wl);
                    if sampler.next_1d() >= albedo {
                        // Absorbed
                        break;
                    }

                    let sun = sample_sun(scene, sampler, &interaction.p, majorant, wl);
                    let phase = atmosphere.phase_eval(&interaction.p, sampler.next_1d(),
                                                      &-ray.dir(), &sun.direction, wl);
                    if self.contributes(order) {
                        radiance += throughput * sun.radiance * phase * sun.transmittance * albedo;
                    }

                    let wi = sample_uniform_sphere(&sampler.next_2d());
                    ray = Ray3f::new(interaction.p, wi);
                }
            }

            if order > RR_START_ORDER {
                let q = (1.0 - throughput).max(RR_MIN_PROBABILITY);
                if sampler.next_1d() < q {
                    break;
                }
                throughput /= 1.0 - q;
            }

            if throughput <= 0.0 {
                break;
            }
        }

        radiance
    }

    fn describe(&self) -> String {
        format!("PathIntegrator\n  max_order: {}\n  only_ms: {}", self.max_order, self.only_ms)
    }
}

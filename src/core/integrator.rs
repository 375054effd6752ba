// Copyright @yucwang 2026

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

pub trait Integrator: Sync {
    /// Radiance arriving at the ray origin from direction -ray.dir() at
    /// wavelength `wl` in nm.
    fn li(&self, scene: &Scene, sampler: &mut Sampler, ray: &Ray3f, wl: Float) -> Float;
    fn describe(&self) -> String {
        String::from("Integrator")
    }
}

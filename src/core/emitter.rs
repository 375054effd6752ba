// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f};

/// Direction towards the light and the radiance arriving from it, already
/// divided by the sampling density.
#[derive(Debug, Copy, Clone)]
pub struct EmitterSample {
    pub direction: Vector3f,
    pub radiance: Float,
}

/// A light at infinity, seen under a fixed direction from every point of
/// the scene.
pub trait Emitter: Send + Sync {
    fn sample(&self, u: &Vector2f, wl: Float) -> EmitterSample;

    fn describe(&self) -> String {
        String::from("Emitter")
    }
}

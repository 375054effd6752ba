// Copyright @yucwang 2026

use crate::math::constants::Vector2f;
use crate::math::ray::Ray3f;

pub trait Sensor: Sync {
    /// Maps a film position in [0,1)^2 to a primary ray. `None` marks film
    /// positions the camera does not see.
    fn sample_ray(&self, uv: &Vector2f) -> Option<Ray3f>;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn describe(&self) -> String {
        String::from("Sensor")
    }
}

// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, HALF_PI, PI, TWO_PI, Vector2f, Vector3f,
                             spherical_to_cartesian};
use crate::math::ray::Ray3f;

/// Latitude/longitude panorama around an observer on the zenith axis.
/// u maps to the azimuth and v to the polar angle, zenith first.
pub struct EquirectangularCamera {
    origin: Vector3f,
    width: usize,
    height: usize,
    upper_hemisphere: bool,
    horizon_detail: bool,
}

impl EquirectangularCamera {
    pub fn new(eye_altitude: Float, width: usize, height: usize) -> Self {
        Self {
            origin: Vector3f::new(0.0, 0.0, eye_altitude),
            width,
            height,
            upper_hemisphere: false,
            horizon_detail: false,
        }
    }

    /// Only map the film to the sky above the horizon.
    pub fn with_upper_hemisphere(mut self, enabled: bool) -> Self {
        self.upper_hemisphere = enabled;
        self
    }

    /// Spend more rows near the horizon with a quadratic warp of the polar
    /// angle.
    pub fn with_horizon_detail(mut self, enabled: bool) -> Self {
        self.horizon_detail = enabled;
        self
    }

    fn polar_angle(&self, v: Float) -> Float {
        if self.horizon_detail {
            let l = if self.upper_hemisphere { v - 1.0 } else { 2.0 * v - 1.0 };
            l * l * l.signum() * HALF_PI + HALF_PI
        } else if self.upper_hemisphere {
            HALF_PI * v
        } else {
            PI * v
        }
    }
}

impl Sensor for EquirectangularCamera {
    fn sample_ray(&self, uv: &Vector2f) -> Option<Ray3f> {
        let phi = TWO_PI * uv.x;
        let theta = self.polar_angle(uv.y);
        Some(Ray3f::new(self.origin, spherical_to_cartesian(theta, phi)))
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("EquirectangularCamera\n  eye_altitude: {}\n  upper_hemisphere: {}\n  horizon_detail: {}",
                self.origin.z, self.upper_hemisphere, self.horizon_detail)
    }
}

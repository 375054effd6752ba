// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, PI, Vector2f, Vector3f, spherical_to_cartesian};
use crate::math::ray::Ray3f;

const FISHEYE_RADIUS_TOLERANCE: Float = 1e-3;

/// Equidistant fisheye looking at the zenith. The inscribed circle of the
/// film covers the upper hemisphere; the corners see nothing.
pub struct FisheyeCamera {
    origin: Vector3f,
    aspect: Float,
    width: usize,
    height: usize,
}

impl FisheyeCamera {
    pub fn new(eye_altitude: Float, width: usize, height: usize) -> Self {
        let aspect = if height > 0 { width as Float / height as Float } else { 1.0 };
        Self {
            origin: Vector3f::new(0.0, 0.0, eye_altitude),
            aspect,
            width,
            height,
        }
    }
}

impl Sensor for FisheyeCamera {
    fn sample_ray(&self, uv: &Vector2f) -> Option<Ray3f> {
        let mut p = uv - Vector2f::new(0.5, 0.5);
        if self.aspect < 1.0 {
            p.y /= self.aspect;
        } else {
            p.x *= self.aspect;
        }

        let l = p.norm();
        if l > 0.5 + FISHEYE_RADIUS_TOLERANCE {
            return None;
        }
        let phi = p.y.atan2(p.x);
        let theta = PI * l;
        Some(Ray3f::new(self.origin, spherical_to_cartesian(theta, phi)))
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn describe(&self) -> String {
        format!("FisheyeCamera\n  eye_altitude: {}\n  aspect: {}", self.origin.z, self.aspect)
    }
}

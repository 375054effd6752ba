// Copyright @yucwang 2026

use crate::core::emitter::{Emitter, EmitterSample};
use crate::emitters::solar::solar_irradiance;
use crate::math::constants::{Float, TWO_PI, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::warp::{sample_uniform_cone, sample_uniform_cone_pdf};

/// Sun as a disk of finite angular size. The solar irradiance is spread
/// uniformly over the solid angle of the disk.
pub struct DistantDiskEmitter {
    frame: Frame,
    cos_theta_max: Float,
    solid_angle: Float,
}

impl DistantDiskEmitter {
    pub fn new(direction: Vector3f, angular_diameter: Float) -> Self {
        let direction = direction.normalize();
        let cos_theta_max = (0.5 * angular_diameter).cos();
        Self {
            frame: Frame::from_normal(&direction),
            cos_theta_max,
            solid_angle: TWO_PI * (1.0 - cos_theta_max),
        }
    }
}

impl Emitter for DistantDiskEmitter {
    fn sample(&self, u: &Vector2f, wl: Float) -> EmitterSample {
        let local = sample_uniform_cone(u, self.cos_theta_max);
        let pdf = sample_uniform_cone_pdf(self.cos_theta_max);
        EmitterSample {
            direction: self.frame.from_local(&local),
            radiance: solar_irradiance(wl) / self.solid_angle / pdf,
        }
    }

    fn describe(&self) -> String {
        let d = self.frame.z;
        format!("DistantDiskEmitter\n  direction: [{:.4}, {:.4}, {:.4}]\n  solid_angle: {:e}",
                d.x, d.y, d.z, self.solid_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::solar::sun_direction;
    use crate::math::constants::SUN_ANGULAR_DIAMETER;

    #[test]
    fn test_disk_samples_stay_inside_cone() {
        let sun = sun_direction(25.0, 140.0);
        let emitter = DistantDiskEmitter::new(sun, SUN_ANGULAR_DIAMETER);
        let cos_max = (0.5 * SUN_ANGULAR_DIAMETER).cos();
        for i in 0..16 {
            for j in 0..16 {
                let u = Vector2f::new((i as Float + 0.5) / 16.0, (j as Float + 0.5) / 16.0);
                let sample = emitter.sample(&u, 500.0);
                assert!((sample.direction.norm() - 1.0).abs() < 1e-9);
                assert!(sample.direction.dot(&sun) >= cos_max - 1e-12);
                assert!((sample.radiance - solar_irradiance(500.0)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_disk_solid_angle() {
        let emitter = DistantDiskEmitter::new(Vector3f::new(0.0, 0.0, 1.0), SUN_ANGULAR_DIAMETER);
        let radius = 0.5 * SUN_ANGULAR_DIAMETER;
        // Small cone: solid angle close to pi r^2.
        let expected = std::f64::consts::PI * radius * radius;
        assert!((emitter.solid_angle - expected).abs() / expected < 1e-4);
    }
}

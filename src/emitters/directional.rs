// Copyright @yucwang 2026

use crate::core::emitter::{Emitter, EmitterSample};
use crate::emitters::solar::solar_irradiance;
use crate::math::constants::{Float, Vector2f, Vector3f};

/// Sun as an infinitely distant point: every point of the scene receives
/// the full solar irradiance from one direction.
pub struct DirectionalEmitter {
    direction: Vector3f,
}

impl DirectionalEmitter {
    pub fn new(direction: Vector3f) -> Self {
        let len = direction.norm();
        let direction = if len > 0.0 {
            direction / len
        } else {
            Vector3f::new(0.0, 0.0, 1.0)
        };
        Self { direction }
    }
}

impl Emitter for DirectionalEmitter {
    fn sample(&self, _u: &Vector2f, wl: Float) -> EmitterSample {
        EmitterSample {
            direction: self.direction,
            radiance: solar_irradiance(wl),
        }
    }

    fn describe(&self) -> String {
        format!("DirectionalEmitter\n  direction: [{:.4}, {:.4}, {:.4}]",
                self.direction.x, self.direction.y, self.direction.z)
    }
}

// Copyright @yucwang 2023

use crate::math::constants::Vector3f;

/// Orthonormal basis. `z` is the reference axis (surface normal or
/// light direction).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn new(new_x: Vector3f, new_y: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_y,
            z: new_z
        }
    }

    /// Build a frame around the unit vector `n`. The tangent is taken in
    /// the plane of the larger of n.x / n.y so the cross product never
    /// degenerates.
    pub fn from_normal(n: &Vector3f) -> Frame {
        let t = if n.x.abs() > n.y.abs() {
            let inv_len = 1.0 / (n.x * n.x + n.z * n.z).sqrt();
            Vector3f::new(n.z * inv_len, 0.0, -n.x * inv_len)
        } else {
            let inv_len = 1.0 / (n.y * n.y + n.z * n.z).sqrt();
            Vector3f::new(0.0, n.z * inv_len, -n.y * inv_len)
        };
        let s = t.cross(n);
        Frame::new(s, t, *n)
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}

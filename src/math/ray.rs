// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// A ray in the planet frame. Rays are never updated in place; every
/// bounce spawns a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        Self { origin: o, dir: d.normalize() }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::Vector3f;
    use super::Ray3f;

    #[test]
    fn test_ray3f() {
        let o = Vector3f::new(0.0, 0.0, 0.0);
        let d = Vector3f::new(1.0, 0.0, 1.0);
        let ray = Ray3f::new(o, d);
        assert_eq!(o, ray.origin());
        assert!((ray.dir().norm() - 1.0).abs() < 1e-12);

        let v1 = ray.at(2.0);
        assert!((v1[0] - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((v1[1] - 0.0).abs() < 1e-12);
        assert!((v1[2] - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}

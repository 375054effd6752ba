/* Copyright 2020 @Yuchen Wong */

use nalgebra::{Vector2, Vector3};

pub type Float = f64;

pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;

pub const PI: Float = std::f64::consts::PI;
pub const TWO_PI: Float = 2.0 * std::f64::consts::PI;
pub const HALF_PI: Float = std::f64::consts::FRAC_PI_2;
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;
pub const INV_4PI: Float = 0.25 * std::f64::consts::FRAC_1_PI;

// Planet model, in meters. The observer sits at the origin of the world
// frame and +z points to the local zenith.
pub const EARTH_RADIUS: Float = 6371e3;
pub const ATMOSPHERE_THICKNESS: Float = 1e5;
pub const ATMOSPHERE_RADIUS: Float = EARTH_RADIUS + ATMOSPHERE_THICKNESS;

pub fn earth_center() -> Vector3f {
    Vector3f::new(0.0, 0.0, -EARTH_RADIUS)
}

pub fn world_up() -> Vector3f {
    Vector3f::new(0.0, 0.0, 1.0)
}

// 0.545 degrees
pub const SUN_ANGULAR_DIAMETER: Float = 0.00951204442;

/// Altitude above the surface of a world space point.
pub fn height_at_point(p: &Vector3f) -> Float {
    (p - earth_center()).norm() - EARTH_RADIUS
}

/// Unit vector from polar angle `theta` (measured from +z) and azimuth
/// `phi`, both in radians.
pub fn spherical_to_cartesian(theta: Float, phi: Float) -> Vector3f {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector3f::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

// Copyright @yucwang 2023

use super::constants::{ PI, TWO_PI, Float, Vector2f, Vector3f };

pub fn sample_uniform_sphere(u: &Vector2f) -> Vector3f {
    let phi: Float = TWO_PI * u.x;
    let cos_theta: Float = 2.0 * u.y - 1.0;
    let sin_theta: Float = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    Vector3f::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta)
}

pub fn sample_uniform_disk_concentric(u: &Vector2f) -> Vector2f {
    let r1: Float = 2.0 * u.x - 1.0;
    let r2: Float = 2.0 * u.y - 1.0;

    let phi: Float;
    let r:   Float;

    if r1 == 0. && r2 == 0. {
        r = 0.0;
        phi = 0.0;
    } else if r1 * r1 > r2 * r2 {
        r = r1;
        phi = (PI / 4.0) * (r2 / r1);
    } else {
        r = r2;
        phi = (PI / 2.0) - (r1 / r2) * (PI / 4.0);
    }

    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector2f::new(r * cos_phi, r * sin_phi)
}

/// Cosine weighted direction around +z.
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let p = sample_uniform_disk_concentric(u);
    let z = (1. - p.x * p.x - p.y * p.y).max(0.0).sqrt();

    Vector3f::new(p.x, p.y, z)
}

/// Uniform direction inside the cone of half-angle acos(cos_theta_max)
/// around +z.
pub fn sample_uniform_cone(u: &Vector2f, cos_theta_max: Float) -> Vector3f {
    let cos_theta = 1.0 - u.x * (1.0 - cos_theta_max);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = TWO_PI * u.y;

    Vector3f::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta)
}

pub fn sample_uniform_cone_pdf(cos_theta_max: Float) -> Float {
    1.0 / (TWO_PI * (1.0 - cos_theta_max))
}

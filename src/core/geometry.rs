// Copyright @yucwang 2026

use crate::math::constants::{ATMOSPHERE_RADIUS, ATMOSPHERE_THICKNESS, EARTH_RADIUS,
                             Float, earth_center, height_at_point};
use crate::math::ray::Ray3f;

/// Both roots of the ray/sphere quadratic, nearest first, for a sphere
/// centred on the planet. `None` when the line misses the sphere.
fn sphere_roots(ray: &Ray3f, radius: Float) -> Option<(Float, Float, Float)> {
    let oc = ray.origin() - earth_center();
    let b = oc.dot(&ray.dir());
    let c = oc.dot(&oc) - radius * radius;
    let d = b * b - c;
    if d < 0.0 {
        return None;
    }
    let sqrt_d = d.sqrt();
    Some((-b - sqrt_d, -b + sqrt_d, c))
}

/// Distance along `ray` to a sphere of the given radius centred on the
/// planet. Rays starting on or outside the sphere and pointing away never
/// hit. From inside, the exit distance is returned.
pub fn ray_sphere_intersection(ray: &Ray3f, radius: Float) -> Option<Float> {
    let (near, far, c) = sphere_roots(ray, radius)?;
    if near >= 0.0 {
        Some(near)
    } else if c < 0.0 {
        Some(far)
    } else {
        None
    }
}

/// The part of a ray that lies inside the atmosphere shell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneBound {
    /// Entry distance; zero when the ray starts inside the shell.
    pub t_min: Float,
    pub t_max: Float,
    /// The segment ends on the ground rather than at the top of the
    /// atmosphere.
    pub hit_ground: bool,
}

/// Bound a ray against the two planet spheres. `None` means the ray
/// escapes to space without crossing the atmosphere.
pub fn scene_intersect(ray: &Ray3f) -> Option<SceneBound> {
    if height_at_point(&ray.origin()) >= ATMOSPHERE_THICKNESS {
        // Both distances come from the original origin; re-intersecting
        // from the entry point loses the exit root to rounding.
        let (t_entry, t_exit, c) = sphere_roots(ray, ATMOSPHERE_RADIUS)?;
        if t_exit <= 0.0 || (c >= 0.0 && t_entry < 0.0) {
            return None;
        }
        let t_entry = t_entry.max(0.0);
        match ray_sphere_intersection(ray, EARTH_RADIUS) {
            Some(t_ground) => Some(SceneBound { t_min: t_entry, t_max: t_ground, hit_ground: true }),
            None => Some(SceneBound { t_min: t_entry, t_max: t_exit, hit_ground: false }),
        }
    } else {
        match ray_sphere_intersection(ray, EARTH_RADIUS) {
            Some(t_ground) => Some(SceneBound { t_min: 0.0, t_max: t_ground, hit_ground: true }),
            None => {
                let t_exit = ray_sphere_intersection(ray, ATMOSPHERE_RADIUS)?;
                Some(SceneBound { t_min: 0.0, t_max: t_exit, hit_ground: false })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::{Vector3f, world_up};

    #[test]
    fn test_ray_sphere_from_outside_towards_center() {
        let distance = 2.0 * EARTH_RADIUS;
        let origin = earth_center() + Vector3f::new(distance, 0.0, 0.0);
        let ray = Ray3f::new(origin, Vector3f::new(-1.0, 0.0, 0.0));
        let t = ray_sphere_intersection(&ray, EARTH_RADIUS).unwrap();
        assert!((t - (distance - EARTH_RADIUS)).abs() < 1e-6);
    }

    #[test]
    fn test_ray_sphere_pointing_away_misses() {
        let origin = earth_center() + Vector3f::new(2.0 * EARTH_RADIUS, 0.0, 0.0);
        let ray = Ray3f::new(origin, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(ray_sphere_intersection(&ray, EARTH_RADIUS), None);

        let tangent_miss = Ray3f::new(origin, Vector3f::new(0.0, 1.0, 0.0));
        assert_eq!(ray_sphere_intersection(&tangent_miss, EARTH_RADIUS), None);
    }

    #[test]
    fn test_ray_sphere_from_inside_exits() {
        let ray = Ray3f::new(Vector3f::zeros(), world_up());
        let t = ray_sphere_intersection(&ray, ATMOSPHERE_RADIUS).unwrap();
        assert!((t - ATMOSPHERE_THICKNESS).abs() < 1e-6);
    }

    #[test]
    fn test_ray_sphere_zero_distance_hit_is_a_hit() {
        // Standing on the ground looking down.
        let ray = Ray3f::new(Vector3f::zeros(), -world_up());
        let t = ray_sphere_intersection(&ray, EARTH_RADIUS).unwrap();
        assert!(t.abs() < 1e-6);
    }

    #[test]
    fn test_scene_intersect_inside() {
        let up = scene_intersect(&Ray3f::new(Vector3f::new(0.0, 0.0, 10.0), world_up())).unwrap();
        assert!(!up.hit_ground);
        assert_eq!(up.t_min, 0.0);
        assert!((up.t_max - (ATMOSPHERE_THICKNESS - 10.0)).abs() < 1e-6);

        let down = scene_intersect(&Ray3f::new(Vector3f::new(0.0, 0.0, 10.0), -world_up())).unwrap();
        assert!(down.hit_ground);
        assert!((down.t_max - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_scene_intersect_from_space() {
        let origin = Vector3f::new(0.0, 0.0, 2.0 * ATMOSPHERE_THICKNESS);
        assert_eq!(scene_intersect(&Ray3f::new(origin, world_up())), None);

        let down = scene_intersect(&Ray3f::new(origin, -world_up())).unwrap();
        assert!(down.hit_ground);
        assert!((down.t_min - ATMOSPHERE_THICKNESS).abs() < 1e-6);
        assert!((down.t_max - 2.0 * ATMOSPHERE_THICKNESS).abs() < 1e-6);

        // Grazing ray through the upper atmosphere only.
        let graze = Ray3f::new(Vector3f::new(-3000e3, 0.0, 50e3), Vector3f::new(1.0, 0.0, 0.0));
        let bound = scene_intersect(&graze).unwrap();
        let closest = EARTH_RADIUS + 50e3;
        let half_chord = (ATMOSPHERE_RADIUS * ATMOSPHERE_RADIUS - closest * closest).sqrt();
        assert!(!bound.hit_ground);
        assert!((bound.t_min - (3000e3 - half_chord)).abs() < 1e-3);
        assert!((bound.t_max - (3000e3 + half_chord)).abs() < 1e-3);
    }

    #[test]
    fn test_origin_on_shell() {
        let on_top = Vector3f::new(0.0, 0.0, ATMOSPHERE_THICKNESS);
        let up = Ray3f::new(on_top, world_up());
        assert_eq!(ray_sphere_intersection(&up, ATMOSPHERE_RADIUS), None);
        assert_eq!(scene_intersect(&up), None);

        let sideways = Ray3f::new(on_top, Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(scene_intersect(&sideways), None);

        let down = scene_intersect(&Ray3f::new(on_top, -world_up())).unwrap();
        assert!(down.hit_ground);
        assert_eq!(down.t_min, 0.0);
        assert!((down.t_max - ATMOSPHERE_THICKNESS).abs() < 1e-6);
    }

    #[test]
    fn test_sea_level_observer_looking_up() {
        let up = Ray3f::new(Vector3f::zeros(), world_up());
        assert_eq!(ray_sphere_intersection(&up, EARTH_RADIUS), None);
        let bound = scene_intersect(&up).unwrap();
        assert!(!bound.hit_ground);
        assert_eq!(bound.t_min, 0.0);
        assert!((bound.t_max - ATMOSPHERE_THICKNESS).abs() < 1e-6);
    }

    #[test]
    fn test_limb_rays_from_orbit_keep_full_chord() {
        let altitude = 200e3;
        let origin = Vector3f::new(0.0, 0.0, altitude);
        let distance = EARTH_RADIUS + altitude;
        for i in 0..1000 {
            let tangent_height = 10e3 + 80e3 * (i as Float) / 999.0;
            let closest = EARTH_RADIUS + tangent_height;
            let sin_alpha = closest / distance;
            let cos_alpha = (1.0 - sin_alpha * sin_alpha).sqrt();
            let dir = Vector3f::new(sin_alpha, 0.0, -cos_alpha);
            let bound = scene_intersect(&Ray3f::new(origin, dir)).unwrap();

            let chord = 2.0 * (ATMOSPHERE_RADIUS * ATMOSPHERE_RADIUS - closest * closest).sqrt();
            assert!(!bound.hit_ground, "tangent height {}", tangent_height);
            assert!(bound.t_min > 0.0);
            assert!(((bound.t_max - bound.t_min) - chord).abs() < 1.0,
                    "tangent height {}: segment {} vs chord {}",
                    tangent_height, bound.t_max - bound.t_min, chord);
        }
    }
}

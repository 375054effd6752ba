// Copyright @yucwang 2026

use crate::core::medium::Medium;
use crate::core::sampler::Sampler;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

/// A real collision found by delta tracking.
#[derive(Debug, Copy, Clone)]
pub struct MediumInteraction {
    pub t: Float,
    pub p: Vector3f,
}

#[inline]
fn sample_step(sampler: &mut Sampler, majorant: Float) -> Float {
    -(1.0 - sampler.next_1d()).ln() / majorant
}

/// Woodcock tracking over [t_min, t_max] of `ray`. `majorant` must bound the
/// extinction of `medium` along the whole segment.
pub fn sample_interaction(medium: &dyn Medium,
                          sampler: &mut Sampler,
                          ray: &Ray3f,
                          t_min: Float,
                          t_max: Float,
                          majorant: Float,
                          wl: Float) -> Option<MediumInteraction> {
    if majorant <= 0.0 {
        return None;
    }

    let mut t = t_min;
    loop {
        t += sample_step(sampler, majorant);
        if t >= t_max {
            return None;
        }

        let p = ray.at(t);
        if sampler.next_1d() < medium.extinction_at(&p, wl) / majorant {
            return Some(MediumInteraction { t, p });
        }
    }
}

/// Ratio tracking estimate of the transmittance over [t_min, t_max].
pub fn ratio_tracking_transmittance(medium: &dyn Medium,
                                    sampler: &mut Sampler,
                                    ray: &Ray3f,
                                    t_min: Float,
                                    t_max: Float,
                                    majorant: Float,
                                    wl: Float) -> Float {
    if majorant <= 0.0 {
        return 1.0;
    }

    let mut transmittance = 1.0;
    let mut t = t_min;
    loop {
        t += sample_step(sampler, majorant);
        if t >= t_max {
            break;
        }

        let p = ray.at(t);
        let ratio = (medium.extinction_at(&p, wl) / majorant).max(0.0);
        transmittance *= 1.0 - ratio;
        if transmittance <= 0.0 {
            return 0.0;
        }
    }

    transmittance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::homogeneous_medium::HomogeneousMedium;

    fn upward_ray() -> Ray3f {
        Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_zero_length_segment_is_transparent() {
        let medium = HomogeneousMedium::new(1e-3, 1e-3);
        let mut sampler = Sampler::new(0, 1);
        for _ in 0..1000 {
            let tr = ratio_tracking_transmittance(&medium, &mut sampler, &upward_ray(),
                                                  250.0, 250.0, 2e-3, 550.0);
            assert_eq!(tr, 1.0);
        }
    }

    #[test]
    fn test_empty_medium_never_interacts() {
        let medium = HomogeneousMedium::new(0.0, 0.0);
        let mut sampler = Sampler::new(2, 3);
        for _ in 0..1000 {
            let hit = sample_interaction(&medium, &mut sampler, &upward_ray(),
                                         0.0, 1e5, 1e-3, 550.0);
            assert!(hit.is_none());
        }
        assert!(sample_interaction(&medium, &mut sampler, &upward_ray(),
                                   0.0, 1e5, 0.0, 550.0).is_none());
    }

    #[test]
    fn test_ratio_tracking_matches_beer_lambert() {
        let sigma_t = 2e-4;
        let medium = HomogeneousMedium::new(0.5e-4, 1.5e-4);
        let mut sampler = Sampler::new(4, 5);
        let n = 20_000;
        let distance = 5e3;
        let mean = (0..n)
            .map(|_| ratio_tracking_transmittance(&medium, &mut sampler, &upward_ray(),
                                                  0.0, distance, 2.0 * sigma_t, 550.0))
            .sum::<Float>() / n as Float;
        let expected = (-sigma_t * distance).exp();
        assert!((mean - expected).abs() < 0.01, "mean {} expected {}", mean, expected);
    }

    #[test]
    fn test_ratio_tracking_decreases_with_distance() {
        let medium = HomogeneousMedium::new(1e-4, 1e-4);
        let mut sampler = Sampler::new(6, 7);
        let n = 20_000;
        let mut previous = 1.0;
        for &distance in [1e3, 4e3, 8e3, 16e3].iter() {
            let mean = (0..n)
                .map(|_| ratio_tracking_transmittance(&medium, &mut sampler, &upward_ray(),
                                                      0.0, distance, 4e-4, 550.0))
                .sum::<Float>() / n as Float;
            assert!(mean < previous, "{} not below {}", mean, previous);
            previous = mean;
        }
    }

    #[test]
    fn test_delta_tracking_free_path_distribution() {
        let sigma_t = 1e-3;
        let medium = HomogeneousMedium::new(0.0, sigma_t);
        let mut sampler = Sampler::new(8, 9);
        let n = 20_000;
        let distance = 1e3;
        let mut escaped = 0;
        for _ in 0..n {
            match sample_interaction(&medium, &mut sampler, &upward_ray(),
                                     0.0, distance, 3.0 * sigma_t, 550.0) {
                Some(hit) => {
                    assert!(hit.t > 0.0 && hit.t < distance);
                    assert!((hit.p.z - hit.t).abs() < 1e-9);
                }
                None => escaped += 1,
            }
        }
        let fraction = escaped as Float / n as Float;
        assert!((fraction - (-1.0 as Float).exp()).abs() < 0.015);
    }
}

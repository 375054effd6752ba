// Copyright @yucwang 2026

use crate::math::constants::{Float, HALF_PI, Vector3f, spherical_to_cartesian};
use crate::math::lut::LookupTable;
use crate::media::tables::SOLAR_IRRADIANCE;

/// Extraterrestrial solar spectral irradiance in W m^-2 nm^-1.
pub fn solar_irradiance(wl: Float) -> Float {
    LookupTable::new(SOLAR_IRRADIANCE).lerp(wl)
}

/// Unit vector towards the sun for an elevation above the horizon and an
/// azimuth measured from +x, both in degrees.
pub fn sun_direction(elevation_deg: Float, azimuth_deg: Float) -> Vector3f {
    spherical_to_cartesian(HALF_PI - elevation_deg.to_radians(), azimuth_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_direction() {
        let zenith = sun_direction(90.0, 123.0);
        assert!((zenith - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-12);

        let east = sun_direction(0.0, 90.0);
        assert!((east - Vector3f::new(0.0, 1.0, 0.0)).norm() < 1e-12);

        let low = sun_direction(30.0, 0.0);
        assert!((low.z - 0.5).abs() < 1e-12);
        assert!(low.y.abs() < 1e-12 && low.x > 0.0);
    }

    #[test]
    fn test_solar_irradiance_is_positive() {
        for i in 0..40 {
            let wl = 250.0 + 50.0 * i as Float;
            assert!(solar_irradiance(wl) > 0.0);
        }
        assert_eq!(solar_irradiance(550.0), 1.87);
    }
}

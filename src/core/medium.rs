// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f, height_at_point};

/// A spherically layered participating medium. Coefficients are in m^-1
/// and depend on the height above the ground and the wavelength in nm.
pub trait Medium: Send + Sync {
    fn absorption(&self, height: Float, wl: Float) -> Float;
    fn scattering(&self, height: Float, wl: Float) -> Float;

    fn extinction(&self, height: Float, wl: Float) -> Float {
        self.absorption(height, wl) + self.scattering(height, wl)
    }

    /// Upper bound of `extinction` over every height, used as the tracking
    /// majorant.
    fn max_extinction(&self, wl: Float) -> Float;

    /// Density of the phase lobe picked by `sample` at `p`.
    fn phase_eval(&self, p: &Vector3f, sample: Float,
                  wo: &Vector3f, wi: &Vector3f, wl: Float) -> Float;

    /// Zero wherever the medium does not interact at all.
    fn scattering_albedo(&self, height: Float, wl: Float) -> Float {
        let scattering = self.scattering(height, wl);
        let extinction = self.absorption(height, wl) + scattering;
        if extinction > 0.0 {
            scattering / extinction
        } else {
            0.0
        }
    }

    fn extinction_at(&self, p: &Vector3f, wl: Float) -> Float {
        self.extinction(height_at_point(p), wl)
    }

    fn scattering_albedo_at(&self, p: &Vector3f, wl: Float) -> Float {
        self.scattering_albedo(height_at_point(p), wl)
    }

    fn describe(&self) -> String {
        String::from("Medium")
    }
}

// Copyright @yucwang 2026

use crate::core::medium::Medium;
use crate::core::phase::PhaseFunction;
use crate::math::constants::{Float, Vector3f};

/// Constant coefficients at every height and wavelength. Mostly useful as
/// an analytic reference for the estimators.
pub struct HomogeneousMedium {
    sigma_a: Float,
    sigma_s: Float,
    phase: PhaseFunction,
}

impl HomogeneousMedium {
    pub fn new(sigma_a: Float, sigma_s: Float) -> Self {
        Self {
            sigma_a: sigma_a.max(0.0),
            sigma_s: sigma_s.max(0.0),
            phase: PhaseFunction::Isotropic,
        }
    }

}

impl Medium for HomogeneousMedium {
    fn absorption(&self, _height: Float, _wl: Float) -> Float {
        self.sigma_a
    }

    fn scattering(&self, _height: Float, _wl: Float) -> Float {
        self.sigma_s
    }

    fn max_extinction(&self, _wl: Float) -> Float {
        self.sigma_a + self.sigma_s
    }

    fn phase_eval(&self, _p: &Vector3f, _sample: Float,
                  wo: &Vector3f, wi: &Vector3f, wl: Float) -> Float {
        self.phase.eval(wo, wi, wl)
    }

    fn describe(&self) -> String {
        format!("HomogeneousMedium\n  sigma_a: {}\n  sigma_s: {}", self.sigma_a, self.sigma_s)
    }
}

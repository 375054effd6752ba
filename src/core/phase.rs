// Copyright @yucwang 2026

use crate::math::constants::{Float, INV_4PI, INV_PI, Vector3f};
use crate::math::lut::LookupTable;
use crate::media::tables::CHANDRASEKHAR_GAMMA;

const RAYLEIGH_PHASE_SCALE: Float = (3.0 / 16.0) * INV_PI;

/// Angular scattering densities. `wo` points back along the incoming ray
/// and `wi` towards the outgoing direction, so forward scattering means
/// dot(wo, wi) = -1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PhaseFunction {
    Isotropic,
    HenyeyGreenstein { g: Float },
    Rayleigh,
    /// Rayleigh with the wavelength dependent depolarization correction.
    Chandrasekhar,
}

impl PhaseFunction {
    pub fn eval(&self, wo: &Vector3f, wi: &Vector3f, wl: Float) -> Float {
        let cos_theta = wo.dot(wi);
        match *self {
            PhaseFunction::Isotropic => INV_4PI,
            PhaseFunction::HenyeyGreenstein { g } => {
                let gg = g * g;
                let denom = 1.0 + gg + 2.0 * g * cos_theta;
                INV_4PI * (1.0 - gg) / (denom * denom.sqrt())
            }
            PhaseFunction::Rayleigh => {
                RAYLEIGH_PHASE_SCALE * (1.0 + cos_theta * cos_theta)
            }
            PhaseFunction::Chandrasekhar => {
                let gamma = LookupTable::new(CHANDRASEKHAR_GAMMA).lerp(wl);
                (RAYLEIGH_PHASE_SCALE / (1.0 + 2.0 * gamma))
                    * (1.0 + 3.0 * gamma + (1.0 - gamma) * cos_theta * cos_theta)
            }
        }
    }
}

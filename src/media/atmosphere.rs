// Copyright @yucwang 2026

use std::sync::RwLock;

use log::warn;

use crate::core::medium::Medium;
use crate::core::phase::PhaseFunction;
use crate::math::constants::{Float, Vector3f, height_at_point};
use crate::media::aerosol::{Aerosol, AerosolType};
use crate::media::molecular::MolecularMedium;
use crate::media::tables::OZONE_MONTHLY_MEAN_DOBSON;

const AEROSOL_ASYMMETRY: Float = 0.8;

/// Molecular atmosphere with an optional aerosol population on top.
pub struct CompositeAtmosphere {
    molecular: MolecularMedium,
    aerosol: Option<Aerosol>,
    aerosol_phase: PhaseFunction,
    // (wavelength, majorant) of the last query
    majorant_cache: RwLock<Option<(Float, Float)>>,
}

impl CompositeAtmosphere {
    /// `aerosol_type` is one of the names of `AerosolType` or "none".
    /// Unknown names fall back to no aerosols and out of range months to
    /// January, both with a warning.
    pub fn new(month: i32, turbidity: Float, aerosol_type: &str) -> Self {
        let month = if month < 0 || month as usize >= OZONE_MONTHLY_MEAN_DOBSON.len() {
            warn!("Invalid month number {}. Using January.", month);
            0
        } else {
            month as usize
        };

        let aerosol = match aerosol_type {
            "none" => None,
            name => match AerosolType::from_name(name) {
                Some(kind) => Some(Aerosol::new(kind, turbidity)),
                None => {
                    warn!("Unknown aerosol type '{}'. Using no aerosols.", name);
                    None
                }
            },
        };

        Self {
            molecular: MolecularMedium::new(month),
            aerosol,
            aerosol_phase: PhaseFunction::HenyeyGreenstein { g: AEROSOL_ASYMMETRY },
            majorant_cache: RwLock::new(None),
        }
    }

    pub fn molecular(&self) -> &MolecularMedium {
        &self.molecular
    }

    pub fn aerosol(&self) -> Option<&Aerosol> {
        self.aerosol.as_ref()
    }

    fn compute_max_extinction(&self, wl: Float) -> Float {
        match &self.aerosol {
            Some(aerosol) => self.molecular.band_majorant(wl, |h| {
                (aerosol.absorption(h, wl), aerosol.scattering(h, wl))
            }),
            None => self.molecular.band_majorant(wl, |_| (0.0, 0.0)),
        }
    }
}

impl Medium for CompositeAtmosphere {
    fn absorption(&self, height: Float, wl: Float) -> Float {
        let absorption = self.molecular.ozone_absorption(height, wl);
        match &self.aerosol {
            Some(aerosol) => absorption + aerosol.absorption(height, wl),
            None => absorption,
        }
    }

    fn scattering(&self, height: Float, wl: Float) -> Float {
        let scattering = self.molecular.molecular_scattering(height, wl);
        match &self.aerosol {
            Some(aerosol) => scattering + aerosol.scattering(height, wl),
            None => scattering,
        }
    }

    fn max_extinction(&self, wl: Float) -> Float {
        if let Ok(cache) = self.majorant_cache.read() {
            if let Some((cached_wl, majorant)) = *cache {
                if cached_wl == wl {
                    return majorant;
                }
            }
        }

        let majorant = self.compute_max_extinction(wl);
        if let Ok(mut cache) = self.majorant_cache.write() {
            *cache = Some((wl, majorant));
        }
        majorant
    }

    fn phase_eval(&self, p: &Vector3f, sample: Float,
                  wo: &Vector3f, wi: &Vector3f, wl: Float) -> Float {
        let aerosol = match &self.aerosol {
            Some(aerosol) => aerosol,
            None => return self.molecular.phase().eval(wo, wi, wl),
        };

        let height = height_at_point(p);
        let molecular_scattering = self.molecular.molecular_scattering(height, wl);
        let total = molecular_scattering + aerosol.scattering(height, wl);
        if total <= 0.0 || sample < molecular_scattering / total {
            self.molecular.phase().eval(wo, wi, wl)
        } else {
            self.aerosol_phase.eval(wo, wi, wl)
        }
    }

    fn describe(&self) -> String {
        let aerosol = self.aerosol
            .as_ref()
            .map_or(String::from("none"), |a| format!("{} (turbidity {})", a.kind().name(), a.turbidity()));
        format!("CompositeAtmosphere\n  month: {}\n  aerosol: {}", self.molecular.month(), aerosol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::INV_4PI;

    const WAVELENGTHS: [Float; 7] = [250.0, 290.0, 320.0, 400.0, 550.0, 600.0, 780.0];

    #[test]
    fn test_extinction_is_sum_of_parts() {
        for &name in ["none", "urban", "polar-antarctic", "background"].iter() {
            let atmosphere = CompositeAtmosphere::new(4, 2.0, name);
            for &wl in WAVELENGTHS.iter() {
                for i in 0..=100 {
                    let h = i as Float * 1e3;
                    assert_eq!(atmosphere.extinction(h, wl),
                               atmosphere.absorption(h, wl) + atmosphere.scattering(h, wl));
                }
            }
        }
    }

    #[test]
    fn test_majorant_bounds_extinction() {
        for name in ["none", "urban", "desert-dust", "maritime-clean", "background"].iter() {
            let atmosphere = CompositeAtmosphere::new(3, 1.5, name);
            for &wl in WAVELENGTHS.iter() {
                let majorant = atmosphere.max_extinction(wl);
                for i in 0..=20_000 {
                    let h = i as Float * 5.0;
                    let extinction = atmosphere.extinction(h, wl);
                    assert!(extinction <= majorant, "{} wl {} h {}: {} > {}",
                            name, wl, h, extinction, majorant);
                }
            }
        }
    }

    #[test]
    fn test_majorant_cache_follows_wavelength() {
        let atmosphere = CompositeAtmosphere::new(0, 1.0, "rural");
        let blue = atmosphere.max_extinction(450.0);
        let red = atmosphere.max_extinction(700.0);
        assert!(blue > red);
        assert_eq!(atmosphere.max_extinction(450.0), blue);
        assert_eq!(atmosphere.max_extinction(700.0), red);
    }

    #[test]
    fn test_no_aerosol_is_molecular_only() {
        let atmosphere = CompositeAtmosphere::new(6, 1.0, "none");
        let molecular = MolecularMedium::new(6);
        assert!(atmosphere.aerosol().is_none());
        for &wl in WAVELENGTHS.iter() {
            for i in 0..=50 {
                let h = i as Float * 2e3;
                assert_eq!(atmosphere.extinction(h, wl), molecular.extinction(h, wl));
                assert_eq!(atmosphere.scattering_albedo(h, wl), molecular.scattering_albedo(h, wl));
            }
        }
    }

    #[test]
    fn test_unknown_aerosol_and_month_fall_back() {
        let atmosphere = CompositeAtmosphere::new(14, 1.0, "volcanic-ash");
        assert!(atmosphere.aerosol().is_none());
        assert_eq!(atmosphere.molecular().month(), 0);
        let negative = CompositeAtmosphere::new(-1, 1.0, "polar-artic");
        assert_eq!(negative.molecular().month(), 0);
        assert_eq!(negative.aerosol().map(|a| a.kind()), Some(AerosolType::PolarArctic));
    }

    #[test]
    fn test_phase_mixture_selects_lobe() {
        let atmosphere = CompositeAtmosphere::new(0, 1.0, "urban");
        let p = Vector3f::new(0.0, 0.0, 100.0);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let wi = -wo;
        let molecular = PhaseFunction::Chandrasekhar.eval(&wo, &wi, 550.0);
        let aerosol = PhaseFunction::HenyeyGreenstein { g: 0.8 }.eval(&wo, &wi, 550.0);
        assert_eq!(atmosphere.phase_eval(&p, 0.0, &wo, &wi, 550.0), molecular);
        assert_eq!(atmosphere.phase_eval(&p, 0.999_999, &wo, &wi, 550.0), aerosol);

        let clear = CompositeAtmosphere::new(0, 1.0, "none");
        assert_eq!(clear.phase_eval(&p, 0.999_999, &wo, &wi, 550.0), molecular);
        assert!(molecular > INV_4PI * 0.5);
    }

    #[test]
    fn test_single_scattering_albedo_in_unit_range() {
        let atmosphere = CompositeAtmosphere::new(0, 1.0, "desert-dust");
        for &wl in WAVELENGTHS.iter() {
            for i in 0..=100 {
                let a = atmosphere.scattering_albedo(i as Float * 1e3, wl);
                assert!(a > 0.0 && a <= 1.0);
            }
        }
    }
}

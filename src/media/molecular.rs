// Copyright @yucwang 2026

use crate::core::medium::Medium;
use crate::core::phase::PhaseFunction;
use crate::math::constants::{Float, Vector3f};
use crate::math::lut::LookupTable;
use crate::media::tables::{OZONE_CROSS_SECTION, OZONE_MONTHLY_MEAN_DOBSON,
                           RAYLEIGH_VOLUME_SCATTERING, STANDARD_PRESSURE,
                           STANDARD_TEMPERATURE};

// Standard air
const STANDARD_AIR_TEMPERATURE: Float = 288.15; // K
const STANDARD_AIR_PRESSURE: Float = 101325.0;  // Pa

// molecules / m^2 in one Dobson unit
const DOBSON_UNIT: Float = 2.6867e20;
const OZONE_BAND_THICKNESS: Float = 9e3;

/// Vertical ozone profile: (upper edge in m, share of the total column).
/// A height belongs to the first band whose upper edge is not below it.
pub const OZONE_BANDS: [(Float, Float); 6] = [
    (9e3, 9.0 / 210.0),
    (18e3, 14.0 / 210.0),
    (27e3, 111.0 / 210.0),
    (36e3, 64.0 / 210.0),
    (45e3, 6.0 / 210.0),
    (54e3, 6.0 / 210.0),
];

/// Rayleigh scattering by air molecules plus ozone absorption.
#[derive(Debug, Clone)]
pub struct MolecularMedium {
    month: usize,
    phase: PhaseFunction,
}

impl MolecularMedium {
    /// `month` indexes the monthly ozone column, 0 is January.
    pub fn new(month: usize) -> Self {
        Self {
            month: month.min(OZONE_MONTHLY_MEAN_DOBSON.len() - 1),
            phase: PhaseFunction::Chandrasekhar,
        }
    }

    pub fn month(&self) -> usize {
        self.month
    }

    pub fn phase(&self) -> &PhaseFunction {
        &self.phase
    }

    pub fn molecular_scattering(&self, height: Float, wl: Float) -> Float {
        let height_km = height * 1e-3;
        let beta_s = LookupTable::new(RAYLEIGH_VOLUME_SCATTERING).lerp(wl); // km^-1
        let temperature = LookupTable::new(STANDARD_TEMPERATURE).lerp(height_km);
        let pressure = LookupTable::new(STANDARD_PRESSURE).lerp(height_km);
        let beta = beta_s * (pressure / STANDARD_AIR_PRESSURE)
            * (STANDARD_AIR_TEMPERATURE / temperature);
        beta * 1e-3
    }

    pub fn ozone_absorption(&self, height: Float, wl: Float) -> Float {
        self.ozone_band_absorption(ozone_fraction(height), wl)
    }

    /// Ozone absorption of a layer holding `fraction` of the total column.
    pub fn ozone_band_absorption(&self, fraction: Float, wl: Float) -> Float {
        // cm^2 to m^2
        let sigma_a = LookupTable::new(OZONE_CROSS_SECTION).lerp(wl) * 1e-4;
        let column = OZONE_MONTHLY_MEAN_DOBSON[self.month] * DOBSON_UNIT;
        sigma_a * fraction * column / OZONE_BAND_THICKNESS
    }

    /// Upper bound of the extinction of this medium plus `extra`, which
    /// gives an additional (absorption, scattering) pair per height. The
    /// Rayleigh term and `extra` must not grow with height, so their values
    /// at the bottom of each ozone band bound them across the band.
    pub fn band_majorant<F>(&self, wl: Float, extra: F) -> Float
        where F: Fn(Float) -> (Float, Float) {
        let bound = |lower: Float, fraction: Float| {
            let (extra_absorption, extra_scattering) = extra(lower);
            (self.ozone_band_absorption(fraction, wl) + extra_absorption)
                + (self.molecular_scattering(lower, wl) + extra_scattering)
        };

        let mut lower = 0.0;
        let mut majorant: Float = 0.0;
        for &(upper, fraction) in OZONE_BANDS.iter() {
            majorant = majorant.max(bound(lower, fraction));
            lower = upper;
        }
        majorant.max(bound(lower, 0.0))
    }
}

pub fn ozone_fraction(height: Float) -> Float {
    OZONE_BANDS
        .iter()
        .find(|&&(upper, _)| height <= upper)
        .map_or(0.0, |&(_, fraction)| fraction)
}

impl Medium for MolecularMedium {
    fn absorption(&self, height: Float, wl: Float) -> Float {
        self.ozone_absorption(height, wl)
    }

    fn scattering(&self, height: Float, wl: Float) -> Float {
        self.molecular_scattering(height, wl)
    }

    fn max_extinction(&self, wl: Float) -> Float {
        self.band_majorant(wl, |_| (0.0, 0.0))
    }

    fn phase_eval(&self, _p: &Vector3f, _sample: Float,
                  wo: &Vector3f, wi: &Vector3f, wl: Float) -> Float {
        self.phase.eval(wo, wi, wl)
    }

    fn describe(&self) -> String {
        format!("MolecularMedium\n  month: {}", self.month)
    }
}

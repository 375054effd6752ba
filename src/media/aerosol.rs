// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::lut::LookupTable;
use crate::media::tables::*;

const BACKGROUND_DENSITY: Float = 2e6;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AerosolType {
    Background,
    DesertDust,
    MaritimeClean,
    MaritimeMineral,
    PolarAntarctic,
    PolarArctic,
    RemoteContinental,
    Rural,
    Urban,
}

impl AerosolType {
    pub const ALL: [AerosolType; 9] = [
        AerosolType::Background,
        AerosolType::DesertDust,
        AerosolType::MaritimeClean,
        AerosolType::MaritimeMineral,
        AerosolType::PolarAntarctic,
        AerosolType::PolarArctic,
        AerosolType::RemoteContinental,
        AerosolType::Rural,
        AerosolType::Urban,
    ];

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "background" => Some(Self::Background),
            "desert-dust" => Some(Self::DesertDust),
            "maritime-clean" => Some(Self::MaritimeClean),
            "maritime-mineral" => Some(Self::MaritimeMineral),
            "polar-antarctic" => Some(Self::PolarAntarctic),
            "polar-arctic" | "polar-artic" => Some(Self::PolarArctic),
            "remote-continental" => Some(Self::RemoteContinental),
            "rural" => Some(Self::Rural),
            "urban" => Some(Self::Urban),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::DesertDust => "desert-dust",
            Self::MaritimeClean => "maritime-clean",
            Self::MaritimeMineral => "maritime-mineral",
            Self::PolarAntarctic => "polar-antarctic",
            Self::PolarArctic => "polar-arctic",
            Self::RemoteContinental => "remote-continental",
            Self::Rural => "rural",
            Self::Urban => "urban",
        }
    }

    /// Particle density at the ground (m^-3) and scale height (km).
    fn density_profile(self) -> (Float, Float) {
        match self {
            Self::Background => (2.584e17, 0.0),
            Self::DesertDust => (1.8662e18, 2.0),
            Self::MaritimeClean => (2.0266e17, 0.9),
            Self::MaritimeMineral => (2.0266e17, 2.0),
            Self::PolarAntarctic => (2.3864e16, 30.0),
            Self::PolarArctic => (2.3864e16, 30.0),
            Self::RemoteContinental => (6.103e18, 0.73),
            Self::Rural => (8.544e18, 0.73),
            Self::Urban => (1.3681e20, 0.73),
        }
    }

    fn cross_sections(self) -> (&'static [(Float, Float)], &'static [(Float, Float)]) {
        match self {
            Self::Background => (BACKGROUND_ABSORPTION, BACKGROUND_SCATTERING),
            Self::DesertDust => (DESERT_DUST_ABSORPTION, DESERT_DUST_SCATTERING),
            Self::MaritimeClean => (MARITIME_CLEAN_ABSORPTION, MARITIME_CLEAN_SCATTERING),
            Self::MaritimeMineral => (MARITIME_MINERAL_ABSORPTION, MARITIME_MINERAL_SCATTERING),
            Self::PolarAntarctic => (POLAR_ANTARCTIC_ABSORPTION, POLAR_ANTARCTIC_SCATTERING),
            Self::PolarArctic => (POLAR_ARCTIC_ABSORPTION, POLAR_ARCTIC_SCATTERING),
            Self::RemoteContinental => (REMOTE_CONTINENTAL_ABSORPTION, REMOTE_CONTINENTAL_SCATTERING),
            Self::Rural => (RURAL_ABSORPTION, RURAL_SCATTERING),
            Self::Urban => (URBAN_ABSORPTION, URBAN_SCATTERING),
        }
    }
}

/// One aerosol population: tabulated cross-sections times an exponential
/// particle density, scaled by the turbidity.
#[derive(Debug, Clone)]
pub struct Aerosol {
    kind: AerosolType,
    turbidity: Float,
    base_density: Float,
    background_over_base: Float,
    scale_height: Float,
    absorption_cross_section: LookupTable<'static>,
    scattering_cross_section: LookupTable<'static>,
}

impl Aerosol {
    pub fn new(kind: AerosolType, turbidity: Float) -> Self {
        let (base_density, scale_height) = kind.density_profile();
        let (absorption, scattering) = kind.cross_sections();
        Self {
            kind,
            turbidity,
            base_density,
            background_over_base: BACKGROUND_DENSITY / base_density,
            scale_height,
            absorption_cross_section: LookupTable::new(absorption),
            scattering_cross_section: LookupTable::new(scattering),
        }
    }

    pub fn kind(&self) -> AerosolType {
        self.kind
    }

    pub fn turbidity(&self) -> Float {
        self.turbidity
    }

    /// Particles per m^3. Never increases with height.
    pub fn density(&self, height: Float) -> Float {
        if self.scale_height <= 0.0 {
            // Well mixed
            return self.base_density;
        }
        let height_km = height.max(0.0) * 1e-3;
        self.base_density * ((-height_km / self.scale_height).exp() + self.background_over_base)
    }

    pub fn absorption(&self, height: Float, wl: Float) -> Float {
        self.absorption_cross_section.lerp(wl) * self.density(height) * self.turbidity * 1e-3
    }

    pub fn scattering(&self, height: Float, wl: Float) -> Float {
        self.scattering_cross_section.lerp(wl) * self.density(height) * self.turbidity * 1e-3
    }

    pub fn extinction(&self, height: Float, wl: Float) -> Float {
        self.absorption(height, wl) + self.scattering(height, wl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aerosol_names() {
        for kind in AerosolType::ALL.iter() {
            assert_eq!(AerosolType::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(AerosolType::from_name("polar-artic"), Some(AerosolType::PolarArctic));
        assert_eq!(AerosolType::from_name("none"), None);
        assert_eq!(AerosolType::from_name("volcanic"), None);
    }

    #[test]
    fn test_density_profile() {
        let urban = Aerosol::new(AerosolType::Urban, 1.0);
        let ground = urban.density(0.0);
        assert!((ground - (1.3681e20 + 2e6)).abs() / ground < 1e-12);
        let one_scale_height = urban.density(730.0);
        assert!((one_scale_height / ground - (-1.0 as Float).exp()).abs() < 1e-9);

        let background = Aerosol::new(AerosolType::Background, 1.0);
        assert_eq!(background.density(0.0), background.density(50e3));
    }

    #[test]
    fn test_turbidity_scales_linearly() {
        for kind in AerosolType::ALL.iter() {
            let clear = Aerosol::new(*kind, 1.0);
            let hazy = Aerosol::new(*kind, 3.0);
            for &(h, wl) in [(0.0, 400.0), (2e3, 550.0), (15e3, 700.0)].iter() {
                let ratio = hazy.scattering(h, wl) / clear.scattering(h, wl);
                assert!((ratio - 3.0).abs() < 1e-9);
                assert!(clear.absorption(h, wl) >= 0.0);
                assert_eq!(clear.extinction(h, wl), clear.absorption(h, wl) + clear.scattering(h, wl));
            }
        }
    }

    #[test]
    fn test_extinction_does_not_grow_with_height() {
        for kind in AerosolType::ALL.iter() {
            let aerosol = Aerosol::new(*kind, 1.0);
            let mut previous = aerosol.extinction(0.0, 550.0);
            for i in 1..=100 {
                let current = aerosol.extinction(i as Float * 1e3, 550.0);
                assert!(current <= previous);
                previous = current;
            }
        }
    }
}

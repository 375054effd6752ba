// Copyright @yucwang 2026

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::math::constants::Float;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownAtmosphericModel(String),
    UnknownCamera(String),
    UnknownIntegrator(String),
    InvalidValue { name: String, value: String },
    MissingArgument(String),
    UnknownOption(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownAtmosphericModel(s) => write!(f, "unknown atmospheric model '{}'", s),
            ConfigError::UnknownCamera(s) => write!(f, "unknown camera '{}'", s),
            ConfigError::UnknownIntegrator(s) => write!(f, "unknown integrator '{}'", s),
            ConfigError::InvalidValue { name, value } => write!(f, "invalid value '{}' for {}", value, name),
            ConfigError::MissingArgument(s) => write!(f, "{} needs an argument", s),
            ConfigError::UnknownOption(s) => {
                write!(f, "unknown option '{}'. Use --help to see all available options", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntegratorKind {
    PathTracing,
    Transmittance,
}

impl FromStr for IntegratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "path" => Ok(IntegratorKind::PathTracing),
            "1" | "transmittance" => Ok(IntegratorKind::Transmittance),
            _ => Err(ConfigError::UnknownIntegrator(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CameraKind {
    Equirectangular,
    Fisheye,
}

impl FromStr for CameraKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "equirectangular" => Ok(CameraKind::Equirectangular),
            "1" | "fisheye" => Ok(CameraKind::Fisheye),
            _ => Err(ConfigError::UnknownCamera(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AtmosphericModel {
    /// Molecular Rayleigh + ozone with an optional aerosol population.
    Composite,
}

impl FromStr for AtmosphericModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "composite" => Ok(AtmosphericModel::Composite),
            _ => Err(ConfigError::UnknownAtmosphericModel(s.to_string())),
        }
    }
}

/// Everything a render needs besides the scene data tables.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub output: String,
    pub width: usize,
    pub height: usize,
    pub tile_width: usize,
    pub tile_height: usize,
    /// nm
    pub wavelength: Float,
    pub integrator: IntegratorKind,
    pub samples: u32,
    pub camera: CameraKind,
    pub atmospheric_model: AtmosphericModel,
    pub aerosol_type: String,
    pub turbidity: Float,
    pub month: i32,
    pub max_order: u32,
    pub only_ms: bool,
    pub albedo: Float,
    /// Degrees above the horizon.
    pub sun_elevation: Float,
    /// Degrees.
    pub sun_azimuth: Float,
    /// Meters above sea level.
    pub eye_altitude: Float,
    pub threads: usize,
    pub sun_disk: bool,
    pub exposure: Float,
    pub upper_hemisphere: bool,
    pub horizon_detail: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output: String::from("out.exr"),
            width: 256,
            height: 256,
            tile_width: 32,
            tile_height: 32,
            wavelength: 550.0,
            integrator: IntegratorKind::PathTracing,
            samples: 512,
            camera: CameraKind::Fisheye,
            atmospheric_model: AtmosphericModel::Composite,
            aerosol_type: String::from("urban"),
            turbidity: 1.0,
            month: 0,
            max_order: 10000,
            only_ms: false,
            albedo: 0.3,
            sun_elevation: 0.0,
            sun_azimuth: 0.0,
            eye_altitude: 0.0,
            threads: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            sun_disk: false,
            exposure: 10.0,
            upper_hemisphere: false,
            horizon_detail: false,
        }
    }
}

fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { name: name.to_string(), value: value.to_string() }),
    }
}

impl RenderSettings {
    /// Assign one setting from its textual form. Names use the snake case
    /// field names, with `elevation` and `azimuth` for the sun angles.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            "output" | "filename" => self.output = value.to_string(),
            "width" => self.width = parse_value(name, value)?,
            "height" => self.height = parse_value(name, value)?,
            "tile_width" => self.tile_width = parse_value(name, value)?,
            "tile_height" => self.tile_height = parse_value(name, value)?,
            "wavelength" => self.wavelength = parse_value(name, value)?,
            "integrator" => self.integrator = value.trim().parse()?,
            "samples" => self.samples = parse_value(name, value)?,
            "camera" => self.camera = value.trim().parse()?,
            "atmospheric_model" => self.atmospheric_model = value.trim().parse()?,
            "aerosol_type" => self.aerosol_type = value.trim().to_string(),
            "turbidity" => self.turbidity = parse_value(name, value)?,
            "month" => self.month = parse_value(name, value)?,
            "max_order" => self.max_order = parse_value(name, value)?,
            "only_ms" => self.only_ms = parse_bool(name, value)?,
            "albedo" => self.albedo = parse_value(name, value)?,
            "elevation" => self.sun_elevation = parse_value(name, value)?,
            "azimuth" => self.sun_azimuth = parse_value(name, value)?,
            "eye_altitude" => self.eye_altitude = parse_value(name, value)?,
            "threads" => self.threads = parse_value(name, value)?,
            "sun_disk" => self.sun_disk = parse_bool(name, value)?,
            "exposure" => self.exposure = parse_value(name, value)?,
            "upper_hemisphere" => self.upper_hemisphere = parse_bool(name, value)?,
            "horizon_detail" => self.horizon_detail = parse_bool(name, value)?,
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Reject settings no render can run with and clamp the recoverable
    /// ones.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let invalid = |name: &str, value: String| ConfigError::InvalidValue { name: name.to_string(), value };

        if self.width == 0 {
            return Err(invalid("width", self.width.to_string()));
        }
        if self.height == 0 {
            return Err(invalid("height", self.height.to_string()));
        }
        if self.tile_width == 0 {
            return Err(invalid("tile_width", self.tile_width.to_string()));
        }
        if self.tile_height == 0 {
            return Err(invalid("tile_height", self.tile_height.to_string()));
        }
        if self.samples == 0 {
            return Err(invalid("samples", self.samples.to_string()));
        }
        if self.max_order == 0 {
            return Err(invalid("max_order", self.max_order.to_string()));
        }
        if !(self.wavelength > 0.0) {
            return Err(invalid("wavelength", self.wavelength.to_string()));
        }
        if !(self.turbidity >= 0.0) {
            return Err(invalid("turbidity", self.turbidity.to_string()));
        }
        if self.threads == 0 {
            warn!("Thread count of 0 requested. Using 1.");
            self.threads = 1;
        }
        if !(0.0..=1.0).contains(&self.albedo) {
            let clamped = if self.albedo > 1.0 { 1.0 } else { 0.0 };
            warn!("Ground albedo {} outside [0, 1]. Using {}.", self.albedo, clamped);
            self.albedo = clamped;
        }
        Ok(())
    }

    /// Apply `--flag value` pairs on top of the current values. Returns the
    /// positional arguments left over.
    pub fn apply_args(&mut self, args: &[String]) -> Result<Vec<String>, ConfigError> {
        let mut positional = Vec::new();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if !arg.starts_with('-') {
                positional.push(arg.to_string());
                i += 1;
                continue;
            }
            match cli_option(arg) {
                Some((name, true)) => {
                    i += 1;
                    let value = args.get(i).ok_or_else(|| ConfigError::MissingArgument(arg.to_string()))?;
                    self.set(name, value)?;
                }
                Some((name, false)) => self.set(name, "true")?,
                None => return Err(ConfigError::UnknownOption(arg.to_string())),
            }
            i += 1;
        }
        Ok(positional)
    }
}

/// Setting name behind a command-line flag, and whether the flag takes a
/// value.
pub fn cli_option(flag: &str) -> Option<(&'static str, bool)> {
    let option = match flag {
        "--width" | "-w" => ("width", true),
        "--height" | "-h" => ("height", true),
        "--tile-width" | "-tw" => ("tile_width", true),
        "--tile-height" | "-th" => ("tile_height", true),
        "--wavelength" | "-l" => ("wavelength", true),
        "--integrator" | "-i" => ("integrator", true),
        "--samples" | "-s" => ("samples", true),
        "--camera" | "-c" => ("camera", true),
        "--atmospheric-model" => ("atmospheric_model", true),
        "--aerosol-type" => ("aerosol_type", true),
        "--turbidity" => ("turbidity", true),
        "--month" => ("month", true),
        "--max-order" | "-o" => ("max_order", true),
        "--only-ms" => ("only_ms", false),
        "--albedo" => ("albedo", true),
        "--elevation" => ("elevation", true),
        "--azimuth" => ("azimuth", true),
        "--eye-altitude" | "-a" => ("eye_altitude", true),
        "--threads" => ("threads", true),
        "--sun-disk" => ("sun_disk", false),
        "--exposure" => ("exposure", true),
        "--upper-hemisphere" => ("upper_hemisphere", false),
        "--horizon-detail" => ("horizon_detail", false),
        _ => return None,
    };
    Some(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.output, "out.exr");
        assert_eq!((settings.width, settings.height), (256, 256));
        assert_eq!((settings.tile_width, settings.tile_height), (32, 32));
        assert_eq!(settings.samples, 512);
        assert_eq!(settings.camera, CameraKind::Fisheye);
        assert_eq!(settings.integrator, IntegratorKind::PathTracing);
        assert_eq!(settings.aerosol_type, "urban");
        assert_eq!(settings.max_order, 10000);
        assert!(settings.threads >= 1);
    }

    #[test]
    fn test_selectors_accept_codes_and_names() {
        assert_eq!("1".parse::<IntegratorKind>(), Ok(IntegratorKind::Transmittance));
        assert_eq!("path".parse::<IntegratorKind>(), Ok(IntegratorKind::PathTracing));
        assert_eq!("0".parse::<CameraKind>(), Ok(CameraKind::Equirectangular));
        assert_eq!("fisheye".parse::<CameraKind>(), Ok(CameraKind::Fisheye));
        assert_eq!("0".parse::<AtmosphericModel>(), Ok(AtmosphericModel::Composite));
        assert_eq!("7".parse::<AtmosphericModel>(),
                   Err(ConfigError::UnknownAtmosphericModel(String::from("7"))));
        assert_eq!("pinhole".parse::<CameraKind>(),
                   Err(ConfigError::UnknownCamera(String::from("pinhole"))));
    }

    #[test]
    fn test_set_by_name() {
        let mut settings = RenderSettings::default();
        settings.set("width", "64").unwrap();
        settings.set("wavelength", "440.5").unwrap();
        settings.set("only_ms", "true").unwrap();
        settings.set("elevation", "12").unwrap();
        settings.set("camera", "equirectangular").unwrap();
        assert_eq!(settings.width, 64);
        assert_eq!(settings.wavelength, 440.5);
        assert!(settings.only_ms);
        assert_eq!(settings.sun_elevation, 12.0);
        assert_eq!(settings.camera, CameraKind::Equirectangular);

        assert!(matches!(settings.set("width", "wide"), Err(ConfigError::InvalidValue { .. })));
        assert_eq!(settings.set("fov", "45"), Err(ConfigError::UnknownOption(String::from("fov"))));
    }

    #[test]
    fn test_validate() {
        let mut settings = RenderSettings::default();
        settings.albedo = 1.7;
        settings.validate().unwrap();
        assert_eq!(settings.albedo, 1.0);

        settings.albedo = -0.2;
        settings.validate().unwrap();
        assert_eq!(settings.albedo, 0.0);

        settings.samples = 0;
        assert!(settings.validate().is_err());

        let mut tiles = RenderSettings::default();
        tiles.tile_height = 0;
        assert!(tiles.validate().is_err());
    }

    #[test]
    fn test_apply_args() {
        let args: Vec<String> = ["-w", "64", "--only-ms", "sky.exr", "--aerosol-type", "desert", "-i", "1"]
            .iter().map(|s| s.to_string()).collect();
        let mut settings = RenderSettings::default();
        let positional = settings.apply_args(&args).unwrap();
        assert_eq!(positional, vec![String::from("sky.exr")]);
        assert_eq!(settings.width, 64);
        assert!(settings.only_ms);
        assert_eq!(settings.aerosol_type, "desert");
        assert_eq!(settings.integrator, IntegratorKind::Transmittance);

        let missing = vec![String::from("--samples")];
        assert_eq!(settings.apply_args(&missing), Err(ConfigError::MissingArgument(String::from("--samples"))));
        let unknown = vec![String::from("--fov")];
        assert_eq!(settings.apply_args(&unknown), Err(ConfigError::UnknownOption(String::from("--fov"))));
    }
}

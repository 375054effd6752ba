// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::settings::{ConfigError, RenderSettings};
use crate::math::constants::Float;

#[derive(Debug)]
pub enum SettingsLoadError {
    Io(std::io::Error),
    Parse(String),
    Config(ConfigError),
}

impl From<std::io::Error> for SettingsLoadError {
    fn from(err: std::io::Error) -> Self {
        SettingsLoadError::Io(err)
    }
}

impl From<ConfigError> for SettingsLoadError {
    fn from(err: ConfigError) -> Self {
        SettingsLoadError::Config(err)
    }
}

impl fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsLoadError::Io(err) => write!(f, "{}", err),
            SettingsLoadError::Parse(msg) => write!(f, "{}", msg),
            SettingsLoadError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SettingsLoadError {}

/// Apply the settings stored in an XML file on top of `settings`.
pub fn load_settings<P: AsRef<Path>>(path: P, settings: &mut RenderSettings) -> Result<(), SettingsLoadError> {
    let xml = fs::read_to_string(path.as_ref())?;
    parse_settings(&xml, settings)
}

pub fn parse_settings(xml: &str, settings: &mut RenderSettings) -> Result<(), SettingsLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut defaults: HashMap<String, String> = HashMap::new();
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let tag = e.name().as_ref().to_vec();
                if !seen_root {
                    if tag.as_slice() != b"settings" {
                        return Err(SettingsLoadError::Parse(format!(
                            "expected <settings> root, found <{}>", String::from_utf8_lossy(&tag))));
                    }
                    seen_root = true;
                } else {
                    let (name, value) = read_name_value(&e)?;
                    apply_element(&tag, &name, &value, &mut defaults, settings)?;
                }
            }
            Err(e) => {
                return Err(SettingsLoadError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    if !seen_root {
        return Err(SettingsLoadError::Parse(String::from("empty settings file")));
    }
    Ok(())
}

fn apply_element(tag: &[u8],
                 name: &str,
                 value: &str,
                 defaults: &mut HashMap<String, String>,
                 settings: &mut RenderSettings) -> Result<(), SettingsLoadError> {
    if tag == b"default" {
        defaults.insert(name.to_string(), value.to_string());
        return Ok(());
    }

    let value = resolve_value(value, defaults);
    match tag {
        b"integer" => {
            parse_integer(&value)?;
        }
        b"float" => {
            parse_float(&value)?;
        }
        b"boolean" => {
            parse_boolean(&value)?;
        }
        b"string" => {}
        other => {
            return Err(SettingsLoadError::Parse(format!(
                "unsupported element <{}>", String::from_utf8_lossy(other))));
        }
    }
    settings.set(name, &value)?;
    Ok(())
}

fn read_name_value(e: &BytesStart) -> Result<(String, String), SettingsLoadError> {
    let mut name: Option<String> = None;
    let mut value: Option<String> = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value().unwrap_or_default().to_string()),
            b"value" => value = Some(attr.unescape_value().unwrap_or_default().to_string()),
            _ => {}
        }
    }
    match (name, value) {
        (Some(name), Some(value)) => Ok((name, value)),
        _ => Err(SettingsLoadError::Parse(format!(
            "<{}> needs a name and a value", String::from_utf8_lossy(e.name().as_ref())))),
    }
}

fn resolve_value(raw: &str, defaults: &HashMap<String, String>) -> String {
    // Longest names first so `$wl` is not eaten by `$w`.
    let mut keys: Vec<&String> = defaults.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let mut out = raw.to_string();
    for k in keys {
        out = out.replace(&format!("${}", k), &defaults[k]);
    }
    out
}

fn parse_float(value: &str) -> Result<Float, SettingsLoadError> {
    value.trim().parse::<Float>().map_err(|_| SettingsLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_integer(value: &str) -> Result<i64, SettingsLoadError> {
    value.trim().parse::<i64>().map_err(|_| SettingsLoadError::Parse(format!("invalid integer: {}", value)))
}

fn parse_boolean(value: &str) -> Result<bool, SettingsLoadError> {
    value.trim().parse::<bool>().map_err(|_| SettingsLoadError::Parse(format!("invalid boolean: {}", value)))
}

//! Configuration models and loaders for radiation pressure scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Emitting body parsed from scenario manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct EmitterConfig {
    pub name: String,
    /// Position in the scenario's inertial frame (m).
    pub position_m: [f64; 3],
    /// Radiation pressure at the reference distance (N/m²).
    pub reference_pressure_n_m2: f64,
    /// Reference distance the pressure was calibrated at (m).
    pub reference_distance_m: f64,
}

/// Receiving body placed in a scenario.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioBodyConfig {
    pub name: String,
    /// Position in the scenario's inertial frame (m).
    pub position_m: [f64; 3],
    pub area_m2: f64,
    pub mass_kg: f64,
    pub emissivity: f64,
    /// Illumination factor: 1 fully lit, 0 eclipsed. Not clamped anywhere.
    #[serde(default = "default_shadow_factor")]
    pub shadow_factor: f64,
}

/// A full scenario: one emitter and the bodies it irradiates.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub emitter: EmitterConfig,
    pub bodies: Vec<ScenarioBodyConfig>,
}

/// Catalog entry describing a body's physical properties without a placement.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub area_m2: f64,
    pub mass_kg: f64,
    pub emissivity: f64,
}

fn default_shadow_factor() -> f64 {
    1.0
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a scenario manifest from a YAML or TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load body catalog entries from a YAML file or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

//! Configuration models and loaders for the naval power calculator.
//!
//! Records here are deliberately loose (string identifiers, raw numbers). The
//! propulsion and calibration crates convert them into their validated runtime
//! types.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Propulsion configuration entry of a registry file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationRecord {
    pub id: String,
    /// Horsepower per cubic metre of machinery space.
    pub power_density: f64,
    pub weight_multiplier: f64,
    pub cost_multiplier: f64,
    pub reliability_factor: f64,
    pub fuel_efficiency_factor: f64,
    pub complexity_factor: f64,
    pub engine_count: u32,
    #[serde(default)]
    pub engine_types: Vec<String>,
    pub gearbox: String,
    pub year_introduced: u16,
    pub tech_tier: u8,
}

/// Hull category envelope entry of a registry file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct HullTypeRecord {
    pub hull_type: String,
    pub min_displacement: f64,
    pub max_displacement: f64,
    pub admiralty_coefficient: f64,
}

/// Contents of a registry override file. Either table may be omitted.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub configurations: Vec<ConfigurationRecord>,
    #[serde(default)]
    pub hull_types: Vec<HullTypeRecord>,
}

impl RegistryConfig {
    fn extend(&mut self, other: RegistryConfig) {
        self.configurations.extend(other.configurations);
        self.hull_types.extend(other.hull_types);
    }
}

/// Shapes accepted for one registry file or directory fragment: the two-table
/// layout, a list of configurations, or a single configuration or hull-type row.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryFragment {
    Tables(RegistryConfig),
    Configurations(Vec<ConfigurationRecord>),
    Configuration(ConfigurationRecord),
    HullType(HullTypeRecord),
}

impl From<RegistryFragment> for RegistryConfig {
    fn from(fragment: RegistryFragment) -> Self {
        match fragment {
            RegistryFragment::Tables(config) => config,
            RegistryFragment::Configurations(configurations) => RegistryConfig {
                configurations,
                hull_types: Vec::new(),
            },
            RegistryFragment::Configuration(record) => RegistryConfig {
                configurations: vec![record],
                hull_types: Vec::new(),
            },
            RegistryFragment::HullType(record) => RegistryConfig {
                configurations: Vec::new(),
                hull_types: vec![record],
            },
        }
    }
}

/// One historical vessel row of the calibration dataset (CSV).
#[derive(Debug, Deserialize, Clone)]
pub struct VesselRecord {
    pub name: String,
    pub class: String,
    pub nation: String,
    pub design_year: u16,
    pub displacement_standard: f64,
    pub displacement_full: f64,
    pub length_m: f64,
    pub beam_m: f64,
    pub draught_m: f64,
    pub max_speed_knots: f64,
    pub cruise_speed_knots: f64,
    pub power_hp: f64,
    #[serde(default)]
    pub power_alternate_hp: Option<f64>,
    pub shafts: u8,
    pub propulsion: String,
    pub hull_form: String,
    pub vessel_type: String,
}

/// A design request as written in a batch file.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct EngineDesignRecord {
    #[serde(default)]
    pub label: Option<String>,
    pub configuration: String,
    pub top_speed_knots: f64,
    #[serde(default)]
    pub cruising_speed_knots: Option<f64>,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub displacement_tonnes: f64,
    pub drag_coefficient: f64,
    pub hull_type: String,
}

fn default_priority() -> String {
    "balanced".to_string()
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load a registry override from a YAML file, a TOML file, or a directory of TOML fragments.
///
/// Each file may hold the `configurations`/`hull_types` tables, a list of
/// configuration rows (YAML), or a single configuration or hull-type row.
pub fn load_registry_config<P: AsRef<Path>>(path: P) -> Result<RegistryConfig, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        let mut merged = RegistryConfig::default();
        for fragment in read_dir_records::<RegistryFragment>(path)? {
            merged.extend(fragment.into());
        }
        Ok(merged)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let fragment: RegistryFragment = toml::from_str(&contents)?;
        Ok(fragment.into())
    } else {
        let reader = File::open(path)?;
        let fragment: RegistryFragment = serde_yaml::from_reader(reader)?;
        Ok(fragment.into())
    }
}

/// Load batch design requests from YAML (a list) or TOML (`[[designs]]` tables).
pub fn load_design_requests<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<EngineDesignRecord>, ConfigError> {
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct DesignFile {
        designs: Vec<EngineDesignRecord>,
    }

    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let file: DesignFile = toml::from_str(&contents)?;
        Ok(file.designs)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load vessel records from a CSV file.
pub fn load_vessel_records<P: AsRef<Path>>(path: P) -> Result<Vec<VesselRecord>, ConfigError> {
    let file = File::open(path)?;
    parse_vessel_records(file)
}

/// Parse vessel records from any CSV reader (file or embedded buffer).
pub fn parse_vessel_records<R: Read>(reader: R) -> Result<Vec<VesselRecord>, ConfigError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
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

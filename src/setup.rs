//! Registry and dataset resolution shared by the command-line tools.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use naval_calibration::{CalibrationError, VesselSpecification, load_dataset, standard_dataset};
use naval_config::{ConfigError, load_registry_config};
use naval_propulsion::{Registry, RegistryError};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to load registry overrides: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid registry overrides: {0}")]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Dataset(#[from] CalibrationError),
}

/// Standard registry, with the rows of an override file applied when one is given.
pub fn registry(overrides: Option<&Path>) -> Result<Registry, SetupError> {
    let standard = Registry::standard();
    match overrides {
        Some(path) => {
            let config = load_registry_config(path)?;
            info!(
                path = %path.display(),
                configurations = config.configurations.len(),
                hull_types = config.hull_types.len(),
                "applying registry overrides"
            );
            Ok(standard.with_overrides(&config)?)
        }
        None => Ok(standard),
    }
}

/// Bundled vessel dataset, or a CSV file with the same columns.
pub fn dataset(path: Option<&Path>) -> Result<Vec<VesselSpecification>, SetupError> {
    let vessels = match path {
        Some(path) => load_dataset(path)?,
        None => standard_dataset()?,
    };
    info!(vessels = vessels.len(), "vessel dataset loaded");
    Ok(vessels)
}

//! Evaluate one design request against every configuration in a registry.

use serde::Serialize;

use naval_propulsion::{ConfigurationId, Registry};

use crate::calculator::calculate_engine_system;
use crate::input::EngineDesignInput;
use crate::output::EngineSystemOutput;
use crate::EngineError;

/// One row of the configuration comparison table.
#[derive(Debug, Clone)]
pub struct ConfigurationComparison {
    pub configuration: ConfigurationId,
    pub result: Result<EngineSystemOutput, EngineError>,
}

impl ConfigurationComparison {
    pub fn output(&self) -> Option<&EngineSystemOutput> {
        self.result.as_ref().ok()
    }
}

/// Serializable view of a comparison row for report sidecars.
#[derive(Debug, Serialize)]
pub struct ComparisonRow<'a> {
    pub configuration: ConfigurationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a EngineSystemOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a ConfigurationComparison> for ComparisonRow<'a> {
    fn from(row: &'a ConfigurationComparison) -> Self {
        Self {
            configuration: row.configuration,
            output: row.output(),
            error: row.result.as_ref().err().map(|err| err.to_string()),
        }
    }
}

/// Rows follow registry order; the `configuration` field of the input is ignored.
pub fn compare_configurations(
    registry: &Registry,
    input: &EngineDesignInput,
) -> Vec<ConfigurationComparison> {
    registry
        .configurations()
        .map(|cfg| ConfigurationComparison {
            configuration: cfg.id,
            result: calculate_engine_system(registry, &input.for_configuration(cfg.id)),
        })
        .collect()
}

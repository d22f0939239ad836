//! Engine system calculator: turns a design request into a full set of derived
//! performance metrics.

pub mod calculator;
pub mod compare;
pub mod heat;
pub mod input;
pub mod output;

pub use calculator::{
    CruiseOperatingPoint, calculate_engine_system, fuel_consumption, resolve_cruising_speed,
};
pub use compare::{ComparisonRow, ConfigurationComparison, compare_configurations};
pub use input::{EngineDesignInput, EnginePriority};
pub use output::EngineSystemOutput;

use naval_power::PowerError;
use naval_propulsion::RegistryError;

/// Errors surfaced by the engine calculator.
///
/// Registry and power-model failures pass through unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Power(#[from] PowerError),
    #[error("unknown engine priority '{0}'")]
    UnknownPriority(String),
    #[error("invalid design input: {0}")]
    InvalidInput(String),
}

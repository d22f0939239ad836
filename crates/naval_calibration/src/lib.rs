//! Offline calibration harness: scores candidate power formulas against a fixed
//! historical dataset and analyses the observed Admiralty coefficients.

pub mod coefficients;
pub mod comparison;
pub mod dataset;
pub mod factors;
pub mod formulas;

pub use coefficients::{ClassCoefficient, CoefficientAnalysis, analyze_class_coefficients};
pub use comparison::{FormulaScore, RankingReport, VesselPrediction, run_formula_comparison};
pub use dataset::{
    FleetSummary, HydrodynamicProfile, VesselSpecification, fleet_summary, load_dataset,
    standard_dataset,
};
pub use factors::{DisplacementFactor, displacement_factors};
pub use formulas::{PowerFormula, standard_formulas};

use naval_config::ConfigError;
use naval_power::PowerError;
use naval_propulsion::RegistryError;

/// Errors raised by the harness. All of them indicate a dataset or registry that
/// must be fixed at authoring time.
#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    #[error("failed to load dataset: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Power(#[from] PowerError),
    #[error("vessel '{name}' is malformed: {reason}")]
    InvalidVessel { name: String, reason: String },
    #[error("dataset contains no vessels")]
    EmptyDataset,
}

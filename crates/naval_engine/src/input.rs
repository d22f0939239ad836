//! Design request value objects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use naval_config::EngineDesignRecord;
use naval_propulsion::{ConfigurationId, HullType};

use crate::EngineError;

/// Design philosophy nudging the provisioned power margin and the derived trade-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnginePriority {
    Efficiency,
    Power,
    Reliability,
    #[default]
    Balanced,
}

impl EnginePriority {
    pub const ALL: [EnginePriority; 4] = [
        EnginePriority::Efficiency,
        EnginePriority::Power,
        EnginePriority::Reliability,
        EnginePriority::Balanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnginePriority::Efficiency => "efficiency",
            EnginePriority::Power => "power",
            EnginePriority::Reliability => "reliability",
            EnginePriority::Balanced => "balanced",
        }
    }

    /// Multiplier applied to the required power to obtain the provisioned power.
    pub fn power_bias(self) -> f64 {
        match self {
            EnginePriority::Power => 1.05,
            EnginePriority::Efficiency => 0.98,
            EnginePriority::Reliability | EnginePriority::Balanced => 1.0,
        }
    }

    /// Fractional adjustment of the engine weight.
    pub fn weight_adjustment(self) -> f64 {
        match self {
            EnginePriority::Efficiency => 0.05,
            EnginePriority::Power => -0.10,
            EnginePriority::Reliability => 0.08,
            EnginePriority::Balanced => 0.0,
        }
    }

    /// Fractional procurement surcharge.
    pub fn cost_surcharge(self) -> f64 {
        match self {
            EnginePriority::Power => 0.08,
            EnginePriority::Efficiency => 0.05,
            EnginePriority::Reliability => 0.10,
            EnginePriority::Balanced => 0.0,
        }
    }

    pub fn mtbf_multiplier(self) -> f64 {
        match self {
            EnginePriority::Reliability => 1.25,
            EnginePriority::Power => 0.85,
            EnginePriority::Efficiency | EnginePriority::Balanced => 1.0,
        }
    }

    pub fn fuel_multiplier(self) -> f64 {
        match self {
            EnginePriority::Efficiency => 0.85,
            EnginePriority::Power => 1.1,
            EnginePriority::Reliability | EnginePriority::Balanced => 1.0,
        }
    }
}

impl fmt::Display for EnginePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnginePriority {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        EnginePriority::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| EngineError::UnknownPriority(s.to_string()))
    }
}

/// One design request. Constructed per calculation and never mutated by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineDesignInput {
    /// Configuration identifier as selected by the caller; resolved against the registry.
    pub configuration: String,
    pub top_speed_knots: f64,
    /// Requested cruising speed; `None` or zero selects the default heuristic.
    pub cruising_speed_knots: Option<f64>,
    pub priority: EnginePriority,
    pub displacement_tonnes: f64,
    /// Dimensionless hull drag coefficient, typically 0.05–0.3.
    pub drag_coefficient: f64,
    pub hull_type: HullType,
}

impl EngineDesignInput {
    /// Balanced-priority request with the default cruising speed.
    pub fn new(
        configuration: impl Into<String>,
        hull_type: HullType,
        displacement_tonnes: f64,
        drag_coefficient: f64,
        top_speed_knots: f64,
    ) -> Self {
        Self {
            configuration: configuration.into(),
            top_speed_knots,
            cruising_speed_knots: None,
            priority: EnginePriority::Balanced,
            displacement_tonnes,
            drag_coefficient,
            hull_type,
        }
    }

    pub fn with_priority(mut self, priority: EnginePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_cruising_speed(mut self, knots: f64) -> Self {
        self.cruising_speed_knots = Some(knots);
        self
    }

    /// Same request against a different configuration.
    pub fn for_configuration(&self, id: ConfigurationId) -> Self {
        Self {
            configuration: id.as_str().to_string(),
            ..self.clone()
        }
    }

    /// Range and ordering checks that do not need the registry.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.top_speed_knots > 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "top speed must be positive (got {} kt)",
                self.top_speed_knots
            )));
        }
        if !(self.displacement_tonnes > 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "displacement must be positive (got {} t)",
                self.displacement_tonnes
            )));
        }
        if !(self.drag_coefficient >= 0.0) {
            return Err(EngineError::InvalidInput(format!(
                "drag coefficient must be non-negative (got {})",
                self.drag_coefficient
            )));
        }
        if let Some(cruise) = self.cruising_speed_knots {
            if !(0.0..self.top_speed_knots).contains(&cruise) {
                return Err(EngineError::InvalidInput(format!(
                    "cruising speed {cruise} kt must lie in [0, {})",
                    self.top_speed_knots
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&EngineDesignRecord> for EngineDesignInput {
    type Error = EngineError;

    fn try_from(record: &EngineDesignRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            configuration: record.configuration.clone(),
            top_speed_knots: record.top_speed_knots,
            cruising_speed_knots: record.cruising_speed_knots,
            priority: record.priority.parse()?,
            displacement_tonnes: record.displacement_tonnes,
            drag_coefficient: record.drag_coefficient,
            hull_type: record.hull_type.parse()?,
        })
    }
}

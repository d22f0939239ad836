//! Derived engine system metrics.

use serde::Serialize;

use naval_propulsion::ConfigurationId;

/// Result of one engine system calculation. Recomputed wholesale for any input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSystemOutput {
    pub configuration: ConfigurationId,
    /// Tonnes.
    pub total_engine_weight: f64,
    /// Currency units.
    pub total_cost: f64,
    /// Cubic metres of machinery space.
    pub engine_volume: f64,
    /// Horsepower-equivalent.
    pub max_power: f64,
    /// Knots.
    pub max_speed: f64,
    /// Knots.
    pub cruising_speed: f64,
    /// Nautical miles.
    pub max_range: f64,
    /// Hours.
    pub mtbf: f64,
    pub reliability_score: f64,
    /// Tonnes per hour.
    pub fuel_consumption_at_full_power: f64,
    /// Tonnes per hour.
    pub fuel_consumption_at_cruise: f64,
    pub operating_cost_per_hour: f64,
    pub acceleration_rating: u8,
    pub heat_signature: u8,
    pub complexity_rating: u8,
}

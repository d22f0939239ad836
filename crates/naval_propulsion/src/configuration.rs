//! Propulsion configuration records and the hand-authored standard table.

use serde::Serialize;

use naval_config::ConfigurationRecord;

use crate::ids::{ConfigurationId, EngineType, GearboxType};
use crate::registry::RegistryError;

/// Fixed performance multipliers of one propulsion arrangement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropulsionConfiguration {
    pub id: ConfigurationId,
    /// Horsepower per cubic metre of machinery space.
    pub power_density: f64,
    pub weight_multiplier: f64,
    pub cost_multiplier: f64,
    pub reliability_factor: f64,
    pub fuel_efficiency_factor: f64,
    pub complexity_factor: f64,
    pub engine_count: u32,
    pub engine_types: Vec<EngineType>,
    pub gearbox: GearboxType,
    pub year_introduced: u16,
    pub tech_tier: u8,
}

impl PropulsionConfiguration {
    /// Convert a loosely typed file record, validating identifiers and multipliers.
    pub fn from_record(record: &ConfigurationRecord) -> Result<Self, RegistryError> {
        let id: ConfigurationId = record.id.parse()?;
        let engine_types = record
            .engine_types
            .iter()
            .map(|raw| raw.parse())
            .collect::<Result<Vec<EngineType>, _>>()?;
        let gearbox: GearboxType = record.gearbox.parse()?;

        let positive = [
            ("power_density", record.power_density),
            ("weight_multiplier", record.weight_multiplier),
            ("cost_multiplier", record.cost_multiplier),
            ("reliability_factor", record.reliability_factor),
            ("fuel_efficiency_factor", record.fuel_efficiency_factor),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(RegistryError::InvalidConfiguration {
                id: record.id.clone(),
                reason: format!("{field} must be positive"),
            });
        }
        if !(0.0..=1.0).contains(&record.complexity_factor) {
            return Err(RegistryError::InvalidConfiguration {
                id: record.id.clone(),
                reason: "complexity_factor must lie in [0, 1]".to_string(),
            });
        }
        if engine_types.is_empty() || record.engine_count == 0 {
            return Err(RegistryError::InvalidConfiguration {
                id: record.id.clone(),
                reason: "at least one engine is required".to_string(),
            });
        }

        Ok(Self {
            id,
            power_density: record.power_density,
            weight_multiplier: record.weight_multiplier,
            cost_multiplier: record.cost_multiplier,
            reliability_factor: record.reliability_factor,
            fuel_efficiency_factor: record.fuel_efficiency_factor,
            complexity_factor: record.complexity_factor,
            engine_count: record.engine_count,
            engine_types,
            gearbox,
            year_introduced: record.year_introduced,
            tech_tier: record.tech_tier,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: ConfigurationId,
    power_density: f64,
    weight_multiplier: f64,
    cost_multiplier: f64,
    reliability_factor: f64,
    fuel_efficiency_factor: f64,
    complexity_factor: f64,
    engine_count: u32,
    engine_types: &[EngineType],
    gearbox: GearboxType,
    year_introduced: u16,
    tech_tier: u8,
) -> PropulsionConfiguration {
    PropulsionConfiguration {
        id,
        power_density,
        weight_multiplier,
        cost_multiplier,
        reliability_factor,
        fuel_efficiency_factor,
        complexity_factor,
        engine_count,
        engine_types: engine_types.to_vec(),
        gearbox,
        year_introduced,
        tech_tier,
    }
}

/// The standard configuration table, in registry order.
#[rustfmt::skip]
pub fn standard_configurations() -> Vec<PropulsionConfiguration> {
    use ConfigurationId as C;
    use EngineType::{Diesel, ElectricMotor, GasTurbine, SteamTurbine};
    use GearboxType as G;

    vec![
        entry(C::Diesel, 60.0, 1.00, 1.00, 1.10, 0.85, 0.30, 2, &[Diesel], G::Reduction, 1920, 1),
        entry(C::GasTurbine, 180.0, 0.60, 1.30, 0.95, 1.30, 0.55, 2, &[GasTurbine], G::Reduction, 1960, 2),
        entry(C::SteamTurbine, 45.0, 1.40, 0.90, 0.90, 1.20, 0.50, 4, &[SteamTurbine], G::DoubleReduction, 1900, 1),
        entry(C::Codad, 65.0, 1.10, 1.15, 1.15, 0.80, 0.40, 4, &[Diesel], G::Combining, 1970, 2),
        entry(C::Codag, 110.0, 0.85, 1.45, 1.00, 0.95, 0.75, 3, &[Diesel, GasTurbine], G::CrossConnect, 1960, 3),
        entry(C::Codog, 105.0, 0.90, 1.35, 1.05, 0.98, 0.65, 4, &[Diesel, GasTurbine], G::Clutched, 1965, 2),
        entry(C::Cogag, 170.0, 0.70, 1.60, 0.98, 1.15, 0.70, 4, &[GasTurbine], G::Combining, 1970, 3),
        entry(C::Cogog, 160.0, 0.72, 1.50, 1.00, 1.10, 0.60, 4, &[GasTurbine], G::Clutched, 1968, 2),
        entry(C::Cosag, 90.0, 1.20, 1.25, 0.92, 1.15, 0.70, 3, &[SteamTurbine, GasTurbine], G::CrossConnect, 1958, 2),
        entry(C::Iep, 55.0, 1.15, 1.70, 1.20, 0.90, 0.85, 4, &[Diesel, GasTurbine, ElectricMotor], G::Electric, 2000, 4),
    ]
}

//! Closed identifier sets for configurations, hull categories, and machinery.
//!
//! Parsing is case-insensitive and ignores `-`, `_` and spaces, so `gas-turbine`,
//! `GAS_TURBINE` and `Gas Turbine` all name the same configuration.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::registry::RegistryError;

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Propulsion configuration identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ConfigurationId {
    Diesel,
    GasTurbine,
    SteamTurbine,
    /// Combined diesel and diesel.
    Codad,
    /// Combined diesel and gas.
    Codag,
    /// Combined diesel or gas.
    Codog,
    /// Combined gas and gas.
    Cogag,
    /// Combined gas or gas.
    Cogog,
    /// Combined steam and gas.
    Cosag,
    /// Integrated electric propulsion.
    Iep,
}

impl ConfigurationId {
    pub const ALL: [ConfigurationId; 10] = [
        ConfigurationId::Diesel,
        ConfigurationId::GasTurbine,
        ConfigurationId::SteamTurbine,
        ConfigurationId::Codad,
        ConfigurationId::Codag,
        ConfigurationId::Codog,
        ConfigurationId::Cogag,
        ConfigurationId::Cogog,
        ConfigurationId::Cosag,
        ConfigurationId::Iep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigurationId::Diesel => "diesel",
            ConfigurationId::GasTurbine => "gas-turbine",
            ConfigurationId::SteamTurbine => "steam-turbine",
            ConfigurationId::Codad => "CODAD",
            ConfigurationId::Codag => "CODAG",
            ConfigurationId::Codog => "CODOG",
            ConfigurationId::Cogag => "COGAG",
            ConfigurationId::Cogog => "COGOG",
            ConfigurationId::Cosag => "COSAG",
            ConfigurationId::Iep => "IEP",
        }
    }
}

impl fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        ConfigurationId::ALL
            .into_iter()
            .find(|id| normalize(id.as_str()) == key)
            .ok_or_else(|| RegistryError::ConfigurationNotFound(s.to_string()))
    }
}

/// Hull category. Each category carries a displacement envelope in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HullType {
    Corvette,
    Frigate,
    Destroyer,
    Cruiser,
    Carrier,
}

impl HullType {
    pub const ALL: [HullType; 5] = [
        HullType::Corvette,
        HullType::Frigate,
        HullType::Destroyer,
        HullType::Cruiser,
        HullType::Carrier,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HullType::Corvette => "corvette",
            HullType::Frigate => "frigate",
            HullType::Destroyer => "destroyer",
            HullType::Cruiser => "cruiser",
            HullType::Carrier => "carrier",
        }
    }
}

impl fmt::Display for HullType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HullType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        HullType::ALL
            .into_iter()
            .find(|hull| normalize(hull.as_str()) == key)
            .ok_or_else(|| RegistryError::HullTypeNotFound(s.to_string()))
    }
}

/// Underwater hull form, used by the calibration formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HullForm {
    Displacement,
    SemiPlaning,
    Planing,
}

impl HullForm {
    pub fn as_str(self) -> &'static str {
        match self {
            HullForm::Displacement => "displacement",
            HullForm::SemiPlaning => "semi-planing",
            HullForm::Planing => "planing",
        }
    }

    /// Nominal hull drag coefficient for the form.
    pub fn nominal_drag_coefficient(self) -> f64 {
        match self {
            HullForm::Displacement => 0.12,
            HullForm::SemiPlaning => 0.18,
            HullForm::Planing => 0.25,
        }
    }
}

impl FromStr for HullForm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "DISPLACEMENT" => Ok(HullForm::Displacement),
            "SEMIPLANING" => Ok(HullForm::SemiPlaning),
            "PLANING" => Ok(HullForm::Planing),
            _ => Err(RegistryError::UnknownHullForm(s.to_string())),
        }
    }
}

/// Prime mover fitted in a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineType {
    Diesel,
    GasTurbine,
    SteamTurbine,
    ElectricMotor,
}

impl FromStr for EngineType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "DIESEL" => Ok(EngineType::Diesel),
            "GASTURBINE" => Ok(EngineType::GasTurbine),
            "STEAMTURBINE" => Ok(EngineType::SteamTurbine),
            "ELECTRICMOTOR" => Ok(EngineType::ElectricMotor),
            _ => Err(RegistryError::UnknownEngineType(s.to_string())),
        }
    }
}

/// Transmission between prime movers and shafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GearboxType {
    Reduction,
    DoubleReduction,
    Combining,
    CrossConnect,
    Clutched,
    /// No mechanical gearbox; shafts are driven by electric motors.
    Electric,
}

impl FromStr for GearboxType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "REDUCTION" => Ok(GearboxType::Reduction),
            "DOUBLEREDUCTION" => Ok(GearboxType::DoubleReduction),
            "COMBINING" => Ok(GearboxType::Combining),
            "CROSSCONNECT" => Ok(GearboxType::CrossConnect),
            "CLUTCHED" => Ok(GearboxType::Clutched),
            "ELECTRIC" => Ok(GearboxType::Electric),
            _ => Err(RegistryError::UnknownGearbox(s.to_string())),
        }
    }
}

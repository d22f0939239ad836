//! Immutable lookup tables for configurations and hull types.
//!
//! A `Registry` is built once (from the standard tables, a registry file, or both)
//! and passed by reference into every calculation. Nothing in the workspace keeps
//! a global copy.

use std::collections::BTreeMap;

use thiserror::Error;

use naval_config::RegistryConfig;

use crate::configuration::{PropulsionConfiguration, standard_configurations};
use crate::hull::{HullTypeProfile, standard_hull_types};
use crate::ids::{ConfigurationId, HullType};

/// Errors raised by registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("propulsion configuration '{0}' not found")]
    ConfigurationNotFound(String),
    #[error("hull type '{0}' not found")]
    HullTypeNotFound(String),
    #[error("unknown engine type '{0}'")]
    UnknownEngineType(String),
    #[error("unknown gearbox type '{0}'")]
    UnknownGearbox(String),
    #[error("unknown hull form '{0}'")]
    UnknownHullForm(String),
    #[error("configuration '{id}' is invalid: {reason}")]
    InvalidConfiguration { id: String, reason: String },
    #[error("hull type {hull_type} has an invalid displacement envelope [{min}, {max}]")]
    InvalidEnvelope { hull_type: HullType, min: f64, max: f64 },
    #[error("hull type {hull_type} has a non-positive Admiralty coefficient {coefficient}")]
    InvalidCoefficient { hull_type: HullType, coefficient: f64 },
}

/// Configuration and hull-type tables keyed by their closed identifiers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    configurations: BTreeMap<ConfigurationId, PropulsionConfiguration>,
    hull_types: BTreeMap<HullType, HullTypeProfile>,
}

impl Registry {
    /// The hand-authored tables covering every configuration and hull type.
    pub fn standard() -> Self {
        Self {
            configurations: standard_configurations()
                .into_iter()
                .map(|cfg| (cfg.id, cfg))
                .collect(),
            hull_types: standard_hull_types()
                .into_iter()
                .map(|profile| (profile.hull_type, profile))
                .collect(),
        }
    }

    /// Build a registry containing only the entries of a registry file.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        registry.apply(config)?;
        Ok(registry)
    }

    /// Return a copy of this registry with the file's entries replacing or adding rows.
    pub fn with_overrides(&self, config: &RegistryConfig) -> Result<Self, RegistryError> {
        let mut registry = self.clone();
        registry.apply(config)?;
        Ok(registry)
    }

    fn apply(&mut self, config: &RegistryConfig) -> Result<(), RegistryError> {
        for record in &config.configurations {
            let cfg = PropulsionConfiguration::from_record(record)?;
            self.configurations.insert(cfg.id, cfg);
        }
        for record in &config.hull_types {
            let profile = HullTypeProfile::from_record(record)?;
            self.hull_types.insert(profile.hull_type, profile);
        }
        Ok(())
    }

    /// Look up a configuration by its closed identifier.
    pub fn get(&self, id: ConfigurationId) -> Result<&PropulsionConfiguration, RegistryError> {
        self.configurations
            .get(&id)
            .ok_or_else(|| RegistryError::ConfigurationNotFound(id.to_string()))
    }

    /// Look up a configuration by a user-supplied identifier string.
    pub fn configuration(&self, id: &str) -> Result<&PropulsionConfiguration, RegistryError> {
        self.get(id.parse()?)
    }

    pub fn hull_profile(&self, hull_type: HullType) -> Result<&HullTypeProfile, RegistryError> {
        self.hull_types
            .get(&hull_type)
            .ok_or_else(|| RegistryError::HullTypeNotFound(hull_type.to_string()))
    }

    /// Configurations in identifier order.
    pub fn configurations(&self) -> impl Iterator<Item = &PropulsionConfiguration> {
        self.configurations.values()
    }

    pub fn hull_profiles(&self) -> impl Iterator<Item = &HullTypeProfile> {
        self.hull_types.values()
    }
}

//! Candidate power-prediction formulas.
//!
//! Every formula predicts installed horsepower at the vessel's maximum speed and
//! full-load displacement.

use std::collections::BTreeMap;

use naval_power::{admiralty_power_hp, empirical_power_hp, required_power};
use naval_propulsion::{HullType, HullTypeProfile, Registry};

use crate::CalibrationError;
use crate::dataset::VesselSpecification;

/// A power estimator scored by the harness.
pub trait PowerFormula: Send + Sync {
    fn name(&self) -> &'static str;

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError>;
}

/// `0.0035 · D^0.67 · V³ · (1 + 8·Cd)` with the drag coefficient taken from the hull form.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalPowerLaw;

impl PowerFormula for EmpiricalPowerLaw {
    fn name(&self) -> &'static str {
        "empirical-power-law"
    }

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        Ok(empirical_power_hp(
            vessel.displacement_full,
            vessel.max_speed_knots,
            vessel.hull_form.nominal_drag_coefficient(),
        ))
    }
}

/// The engine calculator's Admiralty model, including the hull-type envelope check.
#[derive(Debug, Clone)]
pub struct AdmiraltyFormula {
    profiles: BTreeMap<HullType, HullTypeProfile>,
}

impl AdmiraltyFormula {
    pub fn new(registry: &Registry) -> Self {
        Self {
            profiles: registry
                .hull_profiles()
                .map(|profile| (profile.hull_type, *profile))
                .collect(),
        }
    }

    fn admiralty(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        let profile = self.profiles.get(&vessel.vessel_type).ok_or_else(|| {
            naval_propulsion::RegistryError::HullTypeNotFound(vessel.vessel_type.to_string())
        })?;
        Ok(required_power(
            vessel.displacement_full,
            vessel.max_speed_knots,
            profile,
        )?)
    }
}

impl PowerFormula for AdmiraltyFormula {
    fn name(&self) -> &'static str {
        "admiralty"
    }

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        self.admiralty(vessel)
    }
}

/// Admiralty model scaled by the vessel's resistance factor.
#[derive(Debug, Clone)]
pub struct AdmiraltyResistanceFormula {
    base: AdmiraltyFormula,
}

impl AdmiraltyResistanceFormula {
    pub fn new(registry: &Registry) -> Self {
        Self {
            base: AdmiraltyFormula::new(registry),
        }
    }
}

impl PowerFormula for AdmiraltyResistanceFormula {
    fn name(&self) -> &'static str {
        "admiralty-resistance"
    }

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        Ok(self.base.admiralty(vessel)? * vessel.hydrodynamics.resistance_factor)
    }
}

/// Fixed Admiralty coefficient per ship type, tuned independently of the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipTypeBuckets;

impl ShipTypeBuckets {
    pub fn coefficient(hull_type: HullType) -> f64 {
        match hull_type {
            HullType::Corvette => 120.0,
            HullType::Frigate => 150.0,
            HullType::Destroyer => 165.0,
            HullType::Cruiser => 185.0,
            HullType::Carrier => 320.0,
        }
    }
}

impl PowerFormula for ShipTypeBuckets {
    fn name(&self) -> &'static str {
        "ship-type-buckets"
    }

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        Ok(admiralty_power_hp(
            vessel.displacement_full,
            vessel.max_speed_knots,
            Self::coefficient(vessel.vessel_type),
        ))
    }
}

/// Admiralty coefficient growing smoothly with displacement: `C = C_ref · (D / D_ref)^k`.
#[derive(Debug, Clone, Copy)]
pub struct ContinuousScaling {
    pub reference_coefficient: f64,
    pub reference_displacement: f64,
    pub exponent: f64,
}

impl Default for ContinuousScaling {
    fn default() -> Self {
        Self {
            reference_coefficient: 160.0,
            reference_displacement: 5_000.0,
            exponent: 0.15,
        }
    }
}

impl ContinuousScaling {
    pub fn coefficient(&self, displacement: f64) -> f64 {
        self.reference_coefficient
            * (displacement / self.reference_displacement).powf(self.exponent)
    }
}

impl PowerFormula for ContinuousScaling {
    fn name(&self) -> &'static str {
        "continuous-scaling"
    }

    fn predict(&self, vessel: &VesselSpecification) -> Result<f64, CalibrationError> {
        Ok(admiralty_power_hp(
            vessel.displacement_full,
            vessel.max_speed_knots,
            self.coefficient(vessel.displacement_full),
        ))
    }
}

/// The five formulas the harness scores by default.
pub fn standard_formulas(registry: &Registry) -> Vec<Box<dyn PowerFormula>> {
    vec![
        Box::new(EmpiricalPowerLaw),
        Box::new(AdmiraltyFormula::new(registry)),
        Box::new(AdmiraltyResistanceFormula::new(registry)),
        Box::new(ShipTypeBuckets),
        Box::new(ContinuousScaling::default()),
    ]
}

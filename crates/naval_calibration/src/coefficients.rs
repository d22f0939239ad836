//! Observed Admiralty coefficients per hull class, raw and normalised to 27 knots.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use naval_core::constants::REFERENCE_SPEED_KNOTS;
use naval_core::stats::mean;
use naval_core::units::hp_to_kw;
use naval_power::admiralty_coefficient;
use naval_propulsion::HullType;

use crate::CalibrationError;
use crate::dataset::VesselSpecification;

/// Deviation from the fleet average beyond which a class is reported as an outlier.
pub const OUTLIER_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassCoefficient {
    pub hull_type: HullType,
    pub vessel_count: usize,
    /// Mean of `D^(2/3) · V³ / P_kW` at each vessel's own top speed.
    pub raw_coefficient: f64,
    /// Mean of `D^(2/3) · 27³ / P_kW`.
    pub adjusted_coefficient: f64,
    /// `adjusted_coefficient − fleet average`.
    pub deviation: f64,
    pub outlier: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientAnalysis {
    pub fleet_raw_average: f64,
    pub fleet_adjusted_average: f64,
    pub classes: Vec<ClassCoefficient>,
}

impl CoefficientAnalysis {
    pub fn outliers(&self) -> impl Iterator<Item = &ClassCoefficient> {
        self.classes.iter().filter(|c| c.outlier)
    }
}

/// Raw Admiralty coefficient of a vessel at its own top speed.
pub fn raw_coefficient(vessel: &VesselSpecification) -> f64 {
    admiralty_coefficient(
        vessel.displacement_full,
        vessel.max_speed_knots,
        hp_to_kw(vessel.power_hp),
    )
}

/// Coefficient with the speed term fixed at the 27-knot reference.
pub fn adjusted_coefficient(vessel: &VesselSpecification) -> f64 {
    admiralty_coefficient(
        vessel.displacement_full,
        REFERENCE_SPEED_KNOTS,
        hp_to_kw(vessel.power_hp),
    )
}

/// Group vessels by hull type and compare each class with the fleet average.
pub fn analyze_class_coefficients(
    vessels: &[VesselSpecification],
) -> Result<CoefficientAnalysis, CalibrationError> {
    let raw: Vec<f64> = vessels.iter().map(raw_coefficient).collect();
    let adjusted: Vec<f64> = vessels.iter().map(adjusted_coefficient).collect();
    let fleet_raw_average = mean(&raw).ok_or(CalibrationError::EmptyDataset)?;
    let fleet_adjusted_average = mean(&adjusted).ok_or(CalibrationError::EmptyDataset)?;

    let mut groups: BTreeMap<HullType, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for (idx, vessel) in vessels.iter().enumerate() {
        let entry = groups.entry(vessel.vessel_type).or_default();
        entry.0.push(raw[idx]);
        entry.1.push(adjusted[idx]);
    }

    let mut classes = Vec::with_capacity(groups.len());
    for (hull_type, (raw_values, adjusted_values)) in groups {
        let adjusted_coefficient = mean(&adjusted_values).ok_or(CalibrationError::EmptyDataset)?;
        let deviation = adjusted_coefficient - fleet_adjusted_average;
        let outlier = deviation.abs() > OUTLIER_THRESHOLD;
        if outlier {
            warn!(
                hull_type = %hull_type,
                adjusted_coefficient,
                fleet_adjusted_average,
                "class Admiralty coefficient deviates from fleet average"
            );
        }
        classes.push(ClassCoefficient {
            hull_type,
            vessel_count: raw_values.len(),
            raw_coefficient: mean(&raw_values).ok_or(CalibrationError::EmptyDataset)?,
            adjusted_coefficient,
            deviation,
            outlier,
        });
    }

    Ok(CoefficientAnalysis {
        fleet_raw_average,
        fleet_adjusted_average,
        classes,
    })
}

//! Displacement-range buckets with their observed baseline coefficient.
//!
//! Reporting only; the engine calculator never reads these.

use serde::Serialize;

use naval_core::stats::mean;

use crate::CalibrationError;
use crate::coefficients::raw_coefficient;
use crate::dataset::VesselSpecification;

/// Lower bounds (tonnes) of the displacement buckets; each bucket ends at the next bound.
pub const BUCKET_BOUNDS: [f64; 5] = [0.0, 1_500.0, 4_000.0, 8_000.0, 15_000.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplacementFactor {
    pub min_displacement: f64,
    /// `None` for the open-ended top bucket.
    pub max_displacement: Option<f64>,
    pub vessel_count: usize,
    /// Mean raw Admiralty coefficient of the bucket's vessels.
    pub baseline_coefficient: f64,
    /// Baseline relative to the fleet-average coefficient.
    pub normalization_multiplier: f64,
}

impl DisplacementFactor {
    pub fn contains(&self, displacement: f64) -> bool {
        displacement >= self.min_displacement
            && self.max_displacement.is_none_or(|max| displacement < max)
    }
}

/// Populated buckets in ascending displacement order.
pub fn displacement_factors(
    vessels: &[VesselSpecification],
) -> Result<Vec<DisplacementFactor>, CalibrationError> {
    let all: Vec<f64> = vessels.iter().map(raw_coefficient).collect();
    let fleet_average = mean(&all).ok_or(CalibrationError::EmptyDataset)?;

    let mut factors = Vec::new();
    for (idx, &min) in BUCKET_BOUNDS.iter().enumerate() {
        let mut factor = DisplacementFactor {
            min_displacement: min,
            max_displacement: BUCKET_BOUNDS.get(idx + 1).copied(),
            vessel_count: 0,
            baseline_coefficient: 0.0,
            normalization_multiplier: 0.0,
        };
        let members: Vec<f64> = vessels
            .iter()
            .filter(|v| factor.contains(v.displacement_full))
            .map(raw_coefficient)
            .collect();
        let Some(baseline) = mean(&members) else {
            continue;
        };
        factor.vessel_count = members.len();
        factor.baseline_coefficient = baseline;
        factor.normalization_multiplier = baseline / fleet_average;
        factors.push(factor);
    }
    Ok(factors)
}

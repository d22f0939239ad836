//! Hull-type displacement envelopes and baseline Admiralty coefficients.

use serde::Serialize;

use naval_config::HullTypeRecord;

use crate::ids::HullType;
use crate::registry::RegistryError;

/// Valid displacement range (tonnes) and baseline Admiralty coefficient of a hull category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HullTypeProfile {
    pub hull_type: HullType,
    pub min_displacement: f64,
    pub max_displacement: f64,
    pub admiralty_coefficient: f64,
}

impl HullTypeProfile {
    /// Inclusive range check; both boundaries are valid displacements.
    pub fn contains(&self, displacement: f64) -> bool {
        displacement >= self.min_displacement && displacement <= self.max_displacement
    }

    pub fn from_record(record: &HullTypeRecord) -> Result<Self, RegistryError> {
        let hull_type: HullType = record.hull_type.parse()?;
        if !(record.min_displacement > 0.0 && record.min_displacement < record.max_displacement) {
            return Err(RegistryError::InvalidEnvelope {
                hull_type,
                min: record.min_displacement,
                max: record.max_displacement,
            });
        }
        if !(record.admiralty_coefficient > 0.0) {
            return Err(RegistryError::InvalidCoefficient {
                hull_type,
                coefficient: record.admiralty_coefficient,
            });
        }
        Ok(Self {
            hull_type,
            min_displacement: record.min_displacement,
            max_displacement: record.max_displacement,
            admiralty_coefficient: record.admiralty_coefficient,
        })
    }
}

/// The standard hull-type table.
pub fn standard_hull_types() -> Vec<HullTypeProfile> {
    let profile = |hull_type, min_displacement, max_displacement, admiralty_coefficient| {
        HullTypeProfile {
            hull_type,
            min_displacement,
            max_displacement,
            admiralty_coefficient,
        }
    };
    vec![
        profile(HullType::Corvette, 500.0, 2_500.0, 180.0),
        profile(HullType::Frigate, 2_000.0, 6_000.0, 210.0),
        profile(HullType::Destroyer, 4_000.0, 10_000.0, 230.0),
        profile(HullType::Cruiser, 8_000.0, 20_000.0, 250.0),
        profile(HullType::Carrier, 20_000.0, 110_000.0, 290.0),
    ]
}

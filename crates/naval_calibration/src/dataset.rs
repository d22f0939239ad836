//! Historical vessel dataset and derived hydrodynamic values.

use std::path::Path;

use serde::Serialize;

use naval_config::{VesselRecord, load_vessel_records, parse_vessel_records};
use naval_core::constants::G0;
use naval_core::stats::mean;
use naval_core::units::{knots_to_ms, m_to_ft};
use naval_propulsion::{ConfigurationId, HullForm, HullType};

use crate::CalibrationError;

const STANDARD_DATASET: &str = include_str!("../data/vessels.csv");

/// Froude number above which wave-making resistance grows in the resistance factor.
const WAVE_MAKING_ONSET: f64 = 0.40;
/// Reference length/beam ratio of the resistance factor.
const REFERENCE_LENGTH_BEAM: f64 = 8.0;

/// Hydrodynamic ratios derived once from the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrodynamicProfile {
    pub length_beam_ratio: f64,
    /// Displacement (t) over (0.01 · waterline length in feet)³.
    pub displacement_length_ratio: f64,
    pub froude_number: f64,
    /// Horsepower per tonne of full-load displacement.
    pub power_displacement_ratio: f64,
    pub resistance_factor: f64,
}

impl HydrodynamicProfile {
    fn derive(
        displacement: f64,
        length_m: f64,
        beam_m: f64,
        speed_knots: f64,
        power_hp: f64,
    ) -> Self {
        let length_beam_ratio = length_m / beam_m;
        let displacement_length_ratio = displacement / (0.01 * m_to_ft(length_m)).powi(3);
        let froude_number = knots_to_ms(speed_knots) / (G0 * length_m).sqrt();
        let resistance_factor = (1.0 + 1.5 * (froude_number - WAVE_MAKING_ONSET).max(0.0))
            * (REFERENCE_LENGTH_BEAM / length_beam_ratio).sqrt();
        Self {
            length_beam_ratio,
            displacement_length_ratio,
            froude_number,
            power_displacement_ratio: power_hp / displacement,
            resistance_factor,
        }
    }
}

/// Ground-truth record of one historical vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselSpecification {
    pub name: String,
    pub class: String,
    pub nation: String,
    pub design_year: u16,
    pub displacement_standard: f64,
    pub displacement_full: f64,
    pub length_m: f64,
    pub beam_m: f64,
    pub draught_m: f64,
    pub max_speed_knots: f64,
    pub cruise_speed_knots: f64,
    /// Installed power at full speed (hp).
    pub power_hp: f64,
    /// Secondary published figure, where sources disagree.
    pub power_alternate_hp: Option<f64>,
    pub shafts: u8,
    pub propulsion: ConfigurationId,
    pub hull_form: HullForm,
    pub vessel_type: HullType,
    pub hydrodynamics: HydrodynamicProfile,
}

impl VesselSpecification {
    pub fn from_record(record: &VesselRecord) -> Result<Self, CalibrationError> {
        let invalid = |reason: &str| CalibrationError::InvalidVessel {
            name: record.name.clone(),
            reason: reason.to_string(),
        };

        let positive = [
            record.displacement_standard,
            record.displacement_full,
            record.length_m,
            record.beam_m,
            record.draught_m,
            record.max_speed_knots,
            record.power_hp,
        ];
        if positive.iter().any(|v| !(*v > 0.0)) {
            return Err(invalid("dimensions, speed and power must be positive"));
        }
        if record.displacement_standard > record.displacement_full {
            return Err(invalid("standard displacement exceeds full load"));
        }
        if !(0.0..record.max_speed_knots).contains(&record.cruise_speed_knots) {
            return Err(invalid("cruise speed must lie below max speed"));
        }

        Ok(Self {
            name: record.name.clone(),
            class: record.class.clone(),
            nation: record.nation.clone(),
            design_year: record.design_year,
            displacement_standard: record.displacement_standard,
            displacement_full: record.displacement_full,
            length_m: record.length_m,
            beam_m: record.beam_m,
            draught_m: record.draught_m,
            max_speed_knots: record.max_speed_knots,
            cruise_speed_knots: record.cruise_speed_knots,
            power_hp: record.power_hp,
            power_alternate_hp: record.power_alternate_hp,
            shafts: record.shafts,
            propulsion: record.propulsion.parse()?,
            hull_form: record.hull_form.parse()?,
            vessel_type: record.vessel_type.parse()?,
            hydrodynamics: HydrodynamicProfile::derive(
                record.displacement_full,
                record.length_m,
                record.beam_m,
                record.max_speed_knots,
                record.power_hp,
            ),
        })
    }
}

fn from_records(records: &[VesselRecord]) -> Result<Vec<VesselSpecification>, CalibrationError> {
    if records.is_empty() {
        return Err(CalibrationError::EmptyDataset);
    }
    records.iter().map(VesselSpecification::from_record).collect()
}

/// The bundled reference dataset.
pub fn standard_dataset() -> Result<Vec<VesselSpecification>, CalibrationError> {
    let records = parse_vessel_records(STANDARD_DATASET.as_bytes())?;
    from_records(&records)
}

/// Load a dataset from a CSV file with the bundled dataset's columns.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<VesselSpecification>, CalibrationError> {
    let records = load_vessel_records(path)?;
    from_records(&records)
}

/// Fleet-level descriptive figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FleetSummary {
    pub vessel_count: usize,
    pub mean_displacement: f64,
    pub mean_max_speed: f64,
    pub mean_power_displacement_ratio: f64,
}

pub fn fleet_summary(vessels: &[VesselSpecification]) -> Option<FleetSummary> {
    let column = |f: fn(&VesselSpecification) -> f64| vessels.iter().map(f).collect::<Vec<_>>();
    Some(FleetSummary {
        vessel_count: vessels.len(),
        mean_displacement: mean(&column(|v| v.displacement_full))?,
        mean_max_speed: mean(&column(|v| v.max_speed_knots))?,
        mean_power_displacement_ratio: mean(&column(|v| {
            v.hydrodynamics.power_displacement_ratio
        }))?,
    })
}

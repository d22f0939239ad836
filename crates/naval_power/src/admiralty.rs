//! Admiralty-coefficient power model with a small-hull correction.
//!
//! `P_kW = D^(2/3) · V³ / C`, with `D` in tonnes and `V` in knots. The result is
//! reported as a horsepower-equivalent after dividing by the planing factor and the
//! kW→hp constant.

use thiserror::Error;

use naval_core::units::kw_to_hp;
use naval_propulsion::{HullType, HullTypeProfile};

/// Displacement below which the full planing penalty applies (tonnes).
pub const PLANING_LIMIT_TONNES: f64 = 1_500.0;
/// Displacement below which the reduced small-hull penalty applies (tonnes).
pub const SMALL_HULL_LIMIT_TONNES: f64 = 4_000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerError {
    #[error(
        "displacement {displacement} t is outside the {hull_type} range [{min}, {max}]"
    )]
    DisplacementOutOfRange {
        hull_type: HullType,
        displacement: f64,
        min: f64,
        max: f64,
    },
    #[error("speed must be positive (got {0} kt)")]
    NonPositiveSpeed(f64),
}

/// Efficiency factor for hulls that suffer disproportionate drag at small displacements.
pub fn planing_factor(displacement: f64) -> f64 {
    if displacement < PLANING_LIMIT_TONNES {
        0.82
    } else if displacement < SMALL_HULL_LIMIT_TONNES {
        0.91
    } else {
        1.0
    }
}

/// Admiralty power in horsepower-equivalent for an explicit coefficient, without envelope checks.
pub fn admiralty_power_hp(displacement: f64, speed_knots: f64, coefficient: f64) -> f64 {
    let power_kw = displacement.powf(2.0 / 3.0) * speed_knots.powi(3) / coefficient;
    kw_to_hp(power_kw / planing_factor(displacement))
}

/// Required power for a hull category, rejecting displacements outside its envelope.
pub fn required_power(
    displacement: f64,
    speed_knots: f64,
    profile: &HullTypeProfile,
) -> Result<f64, PowerError> {
    if !profile.contains(displacement) {
        return Err(PowerError::DisplacementOutOfRange {
            hull_type: profile.hull_type,
            displacement,
            min: profile.min_displacement,
            max: profile.max_displacement,
        });
    }
    if speed_knots <= 0.0 || speed_knots.is_nan() {
        return Err(PowerError::NonPositiveSpeed(speed_knots));
    }
    Ok(admiralty_power_hp(
        displacement,
        speed_knots,
        profile.admiralty_coefficient,
    ))
}

/// Observed Admiralty coefficient `C = D^(2/3) · V³ / P_kW`.
pub fn admiralty_coefficient(displacement: f64, speed_knots: f64, power_kw: f64) -> f64 {
    displacement.powf(2.0 / 3.0) * speed_knots.powi(3) / power_kw
}

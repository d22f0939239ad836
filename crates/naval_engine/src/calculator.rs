//! Engine system derivation.
//!
//! The steps run in a fixed order because later figures consume earlier ones:
//! provisioned power feeds weight and cost, the resolved cruising speed feeds the
//! cruise operating point, which feeds cruise fuel, which feeds range.

use tracing::debug;

use naval_core::constants::{
    BASE_FUEL_TONNES_PER_KWH, BASE_MTBF_HOURS, COST_PER_HP, FUEL_LOAD_FRACTION,
    FUEL_PRICE_PER_TONNE, POWER_SETTING_EXPONENT,
};
use naval_core::rounding::{ratio_or_zero, round_to};
use naval_core::units::hp_to_kw;
use naval_power::required_power;
use naval_propulsion::{PropulsionConfiguration, Registry};

use crate::heat::heat_signature;
use crate::input::{EngineDesignInput, EnginePriority};
use crate::output::EngineSystemOutput;
use crate::EngineError;

/// Default cruising speed for sleek hulls (knots).
const SLEEK_HULL_CRUISE_KNOTS: f64 = 18.0;
/// Default cruising speed otherwise (knots).
const DEFAULT_CRUISE_KNOTS: f64 = 15.0;
/// Displacement × drag below which a hull counts as sleek.
const SLEEK_HULL_THRESHOLD: f64 = 0.12;
/// Power setting of the default cruise operating point.
const DEFAULT_CRUISE_POWER_SETTING: f64 = 0.65;
const DISPLACEMENT_WEIGHT_FACTOR: f64 = 0.14;
const POWER_WEIGHT_FACTOR: f64 = 0.003;
/// Power-to-weight (hp/t) that scores 100 on the acceleration rating.
const ACCELERATION_REFERENCE: f64 = 50.0;
/// Maintenance surcharge per complexity point (currency per hour).
const MAINTENANCE_PER_COMPLEXITY_POINT: f64 = 12.0;

/// Cruising speed actually used: a positive request verbatim, otherwise the hull heuristic.
pub fn resolve_cruising_speed(
    desired_knots: Option<f64>,
    displacement_tonnes: f64,
    drag_coefficient: f64,
) -> f64 {
    match desired_knots {
        Some(knots) if knots > 0.0 => knots,
        _ if displacement_tonnes * drag_coefficient < SLEEK_HULL_THRESHOLD => {
            SLEEK_HULL_CRUISE_KNOTS
        }
        _ => DEFAULT_CRUISE_KNOTS,
    }
}

/// Power and power setting fed to the fuel model for the cruise condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CruiseOperatingPoint {
    pub power_hp: f64,
    pub power_setting: f64,
}

impl CruiseOperatingPoint {
    /// A requested cruise speed scales power by the cubic law and is then burned at
    /// setting 1.0 so the part-load curve is not applied on top of the scaling. Without
    /// a request the full power is burned at the fixed 65% setting.
    pub fn resolve(max_power_hp: f64, top_speed_knots: f64, desired_knots: Option<f64>) -> Self {
        match desired_knots {
            Some(cruise) if cruise > 0.0 => Self {
                power_hp: max_power_hp * (cruise / top_speed_knots).powi(3),
                power_setting: 1.0,
            },
            _ => Self {
                power_hp: max_power_hp,
                power_setting: DEFAULT_CRUISE_POWER_SETTING,
            },
        }
    }
}

/// Fuel burn (tonnes per hour) at a power setting, rounded to four decimals.
pub fn fuel_consumption(
    power_hp: f64,
    power_setting: f64,
    configuration: &PropulsionConfiguration,
    priority: EnginePriority,
) -> f64 {
    let tonnes_per_hour = hp_to_kw(power_hp)
        * BASE_FUEL_TONNES_PER_KWH
        * configuration.fuel_efficiency_factor
        * power_setting.powf(POWER_SETTING_EXPONENT)
        * priority.fuel_multiplier();
    round_to(tonnes_per_hour, 4)
}

/// Derive every engine system metric for a design request.
pub fn calculate_engine_system(
    registry: &Registry,
    input: &EngineDesignInput,
) -> Result<EngineSystemOutput, EngineError> {
    let configuration = registry.configuration(&input.configuration)?;
    input.validate()?;
    let profile = registry.hull_profile(input.hull_type)?;
    let priority = input.priority;
    let displacement = input.displacement_tonnes;

    let required = required_power(displacement, input.top_speed_knots, profile)?;
    let max_power = required * priority.power_bias();
    debug!(
        configuration = %configuration.id,
        hull_type = %input.hull_type,
        required,
        max_power,
        "resolved provisioned power"
    );

    let engine_weight = (displacement * DISPLACEMENT_WEIGHT_FACTOR
        + max_power * POWER_WEIGHT_FACTOR)
        * configuration.weight_multiplier
        * (1.0 + priority.weight_adjustment());

    let total_cost = (max_power
        * COST_PER_HP
        * configuration.cost_multiplier
        * (1.0 + priority.cost_surcharge()))
    .round();

    let mtbf =
        (BASE_MTBF_HOURS * configuration.reliability_factor * priority.mtbf_multiplier()).round();
    let reliability_score = round_to((mtbf / BASE_MTBF_HOURS * 100.0).clamp(0.0, 100.0), 1);

    let cruising_speed = resolve_cruising_speed(
        input.cruising_speed_knots,
        displacement,
        input.drag_coefficient,
    );
    let cruise = CruiseOperatingPoint::resolve(
        max_power,
        input.top_speed_knots,
        input.cruising_speed_knots,
    );

    let fuel_consumption_at_full_power = fuel_consumption(max_power, 1.0, configuration, priority);
    let fuel_consumption_at_cruise =
        fuel_consumption(cruise.power_hp, cruise.power_setting, configuration, priority);
    debug!(
        cruising_speed,
        cruise_power = cruise.power_hp,
        fuel_full = fuel_consumption_at_full_power,
        fuel_cruise = fuel_consumption_at_cruise,
        "resolved cruise operating point"
    );

    let max_range = if fuel_consumption_at_cruise == 0.0 || cruising_speed == 0.0 {
        0.0
    } else {
        (displacement * FUEL_LOAD_FRACTION / fuel_consumption_at_cruise * cruising_speed).round()
    };

    let power_to_weight = ratio_or_zero(max_power, engine_weight);
    let acceleration_rating = to_rating(power_to_weight / ACCELERATION_REFERENCE * 100.0);
    let heat_signature = to_rating(heat_signature(
        configuration.id,
        fuel_consumption_at_full_power,
    ));
    let complexity_rating = to_rating(configuration.complexity_factor * 100.0);

    let engine_volume = round_to(ratio_or_zero(max_power, configuration.power_density), 1);
    let operating_cost_per_hour = (fuel_consumption_at_cruise * FUEL_PRICE_PER_TONNE
        + f64::from(complexity_rating) * MAINTENANCE_PER_COMPLEXITY_POINT)
        .round();

    Ok(EngineSystemOutput {
        configuration: configuration.id,
        total_engine_weight: round_to(engine_weight, 1),
        total_cost,
        engine_volume,
        max_power,
        max_speed: input.top_speed_knots,
        cruising_speed,
        max_range,
        mtbf,
        reliability_score,
        fuel_consumption_at_full_power,
        fuel_consumption_at_cruise,
        operating_cost_per_hour,
        acceleration_rating,
        heat_signature,
        complexity_rating,
    })
}

fn to_rating(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

//! Core units, constants, and shared primitives for the naval power calculator workspace.

/// Physical and modelling constants. Units are stated per constant.
pub mod constants {
    /// Kilowatts per (mechanical) horsepower.
    pub const KW_PER_HP: f64 = 0.7457;
    /// Standard gravity (m/s²).
    pub const G0: f64 = 9.80665;
    /// Metres per second per knot.
    pub const MS_PER_KNOT: f64 = 0.514_444;
    /// Feet per metre.
    pub const FEET_PER_METRE: f64 = 3.280_84;
    /// Baseline specific fuel consumption (tonnes per kWh).
    pub const BASE_FUEL_TONNES_PER_KWH: f64 = 0.000_64;
    /// Exponent of the part-load fuel penalty curve.
    pub const POWER_SETTING_EXPONENT: f64 = 1.25;
    /// Baseline mean time between failures (hours).
    pub const BASE_MTBF_HOURS: f64 = 8_000.0;
    /// Procurement cost per provisioned horsepower.
    pub const COST_PER_HP: f64 = 1_500.0;
    /// Share of displacement available as fuel load.
    pub const FUEL_LOAD_FRACTION: f64 = 0.35;
    /// Fuel price used for hourly operating cost (currency per tonne).
    pub const FUEL_PRICE_PER_TONNE: f64 = 850.0;
    /// Reference speed for normalised Admiralty coefficients (knots).
    pub const REFERENCE_SPEED_KNOTS: f64 = 27.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{FEET_PER_METRE, KW_PER_HP, MS_PER_KNOT};

    /// Convert horsepower to kilowatts.
    #[inline]
    pub fn hp_to_kw(v: f64) -> f64 {
        v * KW_PER_HP
    }

    /// Convert kilowatts to horsepower.
    #[inline]
    pub fn kw_to_hp(v: f64) -> f64 {
        v / KW_PER_HP
    }

    /// Convert knots to metres per second.
    #[inline]
    pub fn knots_to_ms(v: f64) -> f64 {
        v * MS_PER_KNOT
    }

    /// Convert metres to feet.
    #[inline]
    pub fn m_to_ft(v: f64) -> f64 {
        v * FEET_PER_METRE
    }
}

/// Rounding helpers matching the precision of the reported figures.
pub mod rounding {
    /// Round to a fixed number of decimal places.
    #[inline]
    pub fn round_to(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).round() / factor
    }

    /// Division that reports zero instead of infinity or NaN for a zero divisor.
    #[inline]
    pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }
}

/// Simple descriptive statistics shared by the analysis crates.
pub mod stats {
    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Minimum and maximum of a slice, ignoring NaN entries.
    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

//! Empirical power law: `P = 0.0035 · D^0.67 · V³ · (1 + 8·Cd)`.
//!
//! Not used by the engine calculator; the calibration harness scores it against
//! the Admiralty family.

const SCALE: f64 = 0.0035;
const DISPLACEMENT_EXPONENT: f64 = 0.67;
const DRAG_WEIGHT: f64 = 8.0;

/// Estimated power (horsepower) from displacement (t), speed (kt) and hull drag coefficient.
pub fn empirical_power_hp(displacement: f64, speed_knots: f64, drag_coefficient: f64) -> f64 {
    SCALE
        * displacement.powf(DISPLACEMENT_EXPONENT)
        * speed_knots.powi(3)
        * (1.0 + DRAG_WEIGHT * drag_coefficient)
}

//! Required-power estimators: the Admiralty-coefficient model used by the engine
//! calculator and the simpler empirical power law kept as an alternate.

pub mod admiralty;
pub mod empirical;

pub use admiralty::{
    PowerError, admiralty_coefficient, admiralty_power_hp, planing_factor, required_power,
};
pub use empirical::empirical_power_hp;

//! Warship propulsion-power estimation and engine design trade-offs.
//!
//! The member crates hold the physics and the tables; this crate re-exports them
//! and adds the small amount of glue the command-line tools share.

pub use naval_calibration as calibration;
pub use naval_config as config;
pub use naval_core as core;
pub use naval_engine as engine;
pub use naval_export as export;
pub use naval_power as power;
pub use naval_propulsion as propulsion;

pub mod logging;
pub mod setup;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

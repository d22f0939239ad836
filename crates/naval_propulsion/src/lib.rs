//! Propulsion configuration descriptors, hull-type envelopes, and the registry that holds them.

pub mod configuration;
pub mod hull;
pub mod ids;
pub mod registry;

pub use configuration::PropulsionConfiguration;
pub use hull::HullTypeProfile;
pub use ids::{ConfigurationId, EngineType, GearboxType, HullForm, HullType};
pub use registry::{Registry, RegistryError};

//! Infrared signature baseline per configuration (hand-tuned, 30–90).

use naval_propulsion::ConfigurationId;

pub fn heat_signature_base(id: ConfigurationId) -> f64 {
    match id {
        ConfigurationId::Diesel => 45.0,
        ConfigurationId::GasTurbine => 85.0,
        ConfigurationId::SteamTurbine => 70.0,
        ConfigurationId::Codad => 50.0,
        ConfigurationId::Codag => 75.0,
        ConfigurationId::Codog => 72.0,
        ConfigurationId::Cogag => 90.0,
        ConfigurationId::Cogog => 82.0,
        ConfigurationId::Cosag => 78.0,
        ConfigurationId::Iep => 30.0,
    }
}

/// Base signature plus exhaust contribution (capped at 20), capped at 100.
pub fn heat_signature(id: ConfigurationId, fuel_consumption_full: f64) -> f64 {
    (heat_signature_base(id) + (fuel_consumption_full * 10.0).min(20.0)).min(100.0)
}

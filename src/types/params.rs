//! Parameter set edited by the shell

use serde::{Deserialize, Serialize};
use crate::core::config::VariantConfig;
use crate::types::{Intensity, Material, Protocol, Variant};

/// Mutable input state for one screen
///
/// Numeric fields are bounded by their widgets (see `constrained`);
/// `factor_a`/`factor_b` are free text and only checked by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Core temperature (cryo) or core luminescence / core value
    pub primary_value: f64,
    /// Injection rate / duskwave frequency / infusion rate
    pub secondary_rate: f64,
    /// First free-text factor, semantically [1, 100]
    pub factor_a: String,
    /// Second free-text factor, semantically [0.1, 10]
    pub factor_b: String,
    /// Stepper, [1, 10]
    pub iterations: u32,
    pub protocol: Protocol,
    pub material: Material,
    pub intensity: Intensity,
    /// [1, 5] kHz
    pub resonance_frequency: f64,
}

impl ParameterSet {
    /// Default parameters for a variant (what reset restores)
    pub fn defaults_for(variant: Variant) -> Self {
        let config = variant.config();
        Self {
            primary_value: config.primary.default,
            secondary_rate: config.secondary.default,
            factor_a: String::new(),
            factor_b: String::new(),
            iterations: config.iterations.default,
            protocol: Protocol::default(),
            material: Material::default(),
            intensity: Intensity::default(),
            resonance_frequency: config.resonance.default,
        }
    }

    /// Apply the widget constraints of `config` (clamp, then snap to step)
    pub fn constrained(mut self, config: &VariantConfig) -> Self {
        self.primary_value = config.primary.constrain(self.primary_value);
        self.secondary_rate = config.secondary.constrain(self.secondary_rate);
        self.iterations = config.iterations.constrain(self.iterations);
        self.resonance_frequency = config.resonance.constrain(self.resonance_frequency);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cryo_defaults() {
        let params = ParameterSet::defaults_for(Variant::Cryo);
        assert_eq!(params.primary_value, -50.0);
        assert_eq!(params.secondary_rate, 2.5);
        assert!(params.factor_a.is_empty());
        assert!(params.factor_b.is_empty());
        assert_eq!(params.iterations, 1);
        assert_eq!(params.intensity, Intensity::Mid);
        assert_eq!(params.resonance_frequency, 3.0);
    }

    #[test]
    fn test_constrained_clamps_per_variant() {
        let mut params = ParameterSet::defaults_for(Variant::Nocturne);
        params.primary_value = 250.0;
        params.secondary_rate = 9.0;
        params.iterations = 0;
        params.resonance_frequency = 7.3;

        let params = params.constrained(Variant::Nocturne.config());
        assert_eq!(params.primary_value, 100.0);
        assert_eq!(params.secondary_rate, 5.0);
        assert_eq!(params.iterations, 1);
        assert_eq!(params.resonance_frequency, 5.0);
    }

    #[test]
    fn test_constrained_snaps_to_step() {
        let mut params = ParameterSet::defaults_for(Variant::Cryo);
        params.primary_value = -120.6;
        params.secondary_rate = 3.14;

        let params = params.constrained(Variant::Cryo.config());
        assert_eq!(params.primary_value, -121.0);
        assert_eq!(params.secondary_rate, 3.1);
    }

    #[test]
    fn test_constrained_leaves_text_alone() {
        let mut params = ParameterSet::defaults_for(Variant::Quantum);
        params.factor_a = "not a number".to_string();
        let params = params.constrained(Variant::Quantum.config());
        assert_eq!(params.factor_a, "not a number");
    }
}

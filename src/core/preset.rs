//! TOML presets that seed a parameter set
//!
//! ```toml
//! variant = "cryo"
//!
//! [parameters]
//! primary_value = -120
//! factor_a = "40"
//! intensity = "high"
//! ```

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::types::{Intensity, Material, ParameterSet, Protocol, Variant};

/// Failure while loading a preset
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("cannot read preset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid preset: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Any subset of parameter fields; missing ones keep the variant defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterOverrides {
    pub primary_value: Option<f64>,
    pub secondary_rate: Option<f64>,
    pub factor_a: Option<String>,
    pub factor_b: Option<String>,
    pub iterations: Option<u32>,
    pub protocol: Option<Protocol>,
    pub material: Option<Material>,
    pub intensity: Option<Intensity>,
    pub resonance_frequency: Option<f64>,
}

impl ParameterOverrides {
    /// Layer these overrides on top of `base`
    pub fn apply_to(&self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            primary_value: self.primary_value.unwrap_or(base.primary_value),
            secondary_rate: self.secondary_rate.unwrap_or(base.secondary_rate),
            factor_a: self.factor_a.clone().unwrap_or(base.factor_a),
            factor_b: self.factor_b.clone().unwrap_or(base.factor_b),
            iterations: self.iterations.unwrap_or(base.iterations),
            protocol: self.protocol.unwrap_or(base.protocol),
            material: self.material.unwrap_or(base.material),
            intensity: self.intensity.unwrap_or(base.intensity),
            resonance_frequency: self.resonance_frequency.unwrap_or(base.resonance_frequency),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A saved screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub variant: Variant,
    #[serde(default)]
    pub parameters: ParameterOverrides,
}

impl Preset {
    pub fn from_toml_str(text: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let preset = Self::from_toml_str(&text)?;
        log::debug!("preset loaded: {} ({})", path.display(), preset.variant);
        Ok(preset)
    }

    /// Variant defaults + overrides, constrained to the widgets' bounds
    pub fn parameter_set(&self) -> ParameterSet {
        self.parameters
            .apply_to(ParameterSet::defaults_for(self.variant))
            .constrained(self.variant.config())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_only() {
        let preset = Preset::from_toml_str("variant = \"nocturne\"").unwrap();
        assert_eq!(preset.variant, Variant::Nocturne);
        assert!(preset.parameters.is_empty());
        assert_eq!(preset.parameter_set(), ParameterSet::defaults_for(Variant::Nocturne));
    }

    #[test]
    fn test_overrides_and_constraints() {
        let preset = Preset::from_toml_str(
            r#"
            variant = "cryo"

            [parameters]
            primary_value = -400
            factor_a = "40"
            iterations = 3
            protocol = "singularity"
            intensity = "high"
            "#,
        )
        .unwrap();

        let params = preset.parameter_set();
        assert_eq!(params.primary_value, -273.0);
        assert_eq!(params.factor_a, "40");
        assert_eq!(params.factor_b, "");
        assert_eq!(params.iterations, 3);
        assert_eq!(params.protocol, Protocol::Singularity);
        assert_eq!(params.intensity, Intensity::High);
        assert_eq!(params.secondary_rate, 2.5);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Preset::from_toml_str(
            r#"
            variant = "quantum"
            [parameters]
            warp_factor = 9
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PresetError::Parse(_)));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        assert!(Preset::from_toml_str("variant = \"sylverwane\"").is_err());
    }
}

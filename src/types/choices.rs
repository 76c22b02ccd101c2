//! Closed picker choices
//!
//! The enums are variant-neutral; each VariantConfig maps them to its own labels.

use serde::{Deserialize, Serialize};

/// Infusion protocol picker (4 options per variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    #[default]
    Basic,
    Enhanced,
    Quantum,
    Singularity,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [
        Protocol::Basic,
        Protocol::Enhanced,
        Protocol::Quantum,
        Protocol::Singularity,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Basic => "basic",
            Protocol::Enhanced => "enhanced",
            Protocol::Quantum => "quantum",
            Protocol::Singularity => "singularity",
        }
    }
}

/// Material / matrix picker (3 options per variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Alpha,
    Beta,
    Gamma,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Alpha, Material::Beta, Material::Gamma];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Alpha => "alpha",
            Material::Beta => "beta",
            Material::Gamma => "gamma",
        }
    }
}

/// Intensity segment; maps to a per-variant multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Mid,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Mid, Intensity::High];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Mid => "mid",
            Intensity::High => "high",
        }
    }
}

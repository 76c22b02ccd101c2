//! Screen variants

use serde::{Deserialize, Serialize};
use crate::core::config::{VariantConfig, CRYO, NOCTURNE, QUANTUM};

/// The three infusion screens sharing one formula shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Ironhollow Frostshriek: cryogenic infusion
    Cryo,
    /// Nightveil Duskwhisper: nocturne resonance
    Nocturne,
    /// Quantum Infusion Nexus
    Quantum,
}

impl Variant {
    /// All variants in menu order
    pub const ALL: [Variant; 3] = [Variant::Cryo, Variant::Nocturne, Variant::Quantum];

    /// Short machine name
    pub fn code(&self) -> &'static str {
        match self {
            Variant::Cryo => "cryo",
            Variant::Nocturne => "nocturne",
            Variant::Quantum => "quantum",
        }
    }

    /// Static configuration for this variant
    pub fn config(&self) -> &'static VariantConfig {
        match self {
            Variant::Cryo => &CRYO,
            Variant::Nocturne => &NOCTURNE,
            Variant::Quantum => &QUANTUM,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    /// Accepts the short code or the screen's own name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cryo" | "frostshriek" | "ironhollow" => Ok(Variant::Cryo),
            "nocturne" | "duskwhisper" | "nightveil" => Ok(Variant::Nocturne),
            "quantum" | "nexus" => Ok(Variant::Quantum),
            other => Err(format!("unknown variant '{}' (expected cryo, nocturne or quantum)", other)),
        }
    }
}

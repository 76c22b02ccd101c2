//! Validation errors for the free-text factors

use serde::Serialize;
use thiserror::Error;

/// Which free-text factor a check refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSlot {
    A,
    B,
}

/// User-input validation failure; blocks computation, never fatal
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Field left empty
    #[error("{label} required")]
    MissingField {
        slot: FactorSlot,
        label: &'static str,
    },
    /// Non-empty text that is not a decimal number
    #[error("{label} must be a number")]
    NotANumber {
        slot: FactorSlot,
        label: &'static str,
        input: String,
    },
    /// Parsed value outside the variant's bound
    #[error("{label} must be {min}-{max}")]
    OutOfRange {
        slot: FactorSlot,
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// Stable code string (for logging and JSON consumers)
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "V001_MISSING_FIELD",
            Self::NotANumber { .. } => "V002_NOT_A_NUMBER",
            Self::OutOfRange { .. } => "V003_OUT_OF_RANGE",
        }
    }

    /// The factor that failed
    pub fn slot(&self) -> FactorSlot {
        match self {
            Self::MissingField { slot, .. }
            | Self::NotANumber { slot, .. }
            | Self::OutOfRange { slot, .. } => *slot,
        }
    }
}

/// Factors parsed by a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedFactors {
    pub factor_a: f64,
    pub factor_b: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let missing = ValidationError::MissingField { slot: FactorSlot::A, label: "Frostbite Factor" };
        assert_eq!(missing.to_string(), "Frostbite Factor required");

        let nan = ValidationError::NotANumber {
            slot: FactorSlot::B,
            label: "Twilight Constant",
            input: "abc".to_string(),
        };
        assert_eq!(nan.to_string(), "Twilight Constant must be a number");

        let range = ValidationError::OutOfRange {
            slot: FactorSlot::B,
            label: "Stabilizer Constant",
            value: 12.0,
            min: 0.1,
            max: 10.0,
        };
        assert_eq!(range.to_string(), "Stabilizer Constant must be 0.1-10");
    }

    #[test]
    fn test_codes_and_slots() {
        let err = ValidationError::OutOfRange {
            slot: FactorSlot::A,
            label: "Plinthride Factor",
            value: 0.5,
            min: 1.0,
            max: 100.0,
        };
        assert_eq!(err.code(), "V003_OUT_OF_RANGE");
        assert_eq!(err.slot(), FactorSlot::A);
    }
}

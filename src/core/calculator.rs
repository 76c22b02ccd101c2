//! Infusion calculator: validation, formulas and text rendering
//!
//! stability_index  = clamp(a * b / 10, 1, 10)
//! duration_seconds = iterations * duration_per_iteration
//! output_magnitude = base(primary) * rate * intensity * (resonance / 3)

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use crate::core::config::{FactorSpec, SnapshotField, VariantConfig};
use crate::types::{
    DisplayZone, FactorSlot, Notice, ParameterSet, ResultRecord, ValidatedFactors,
    ValidationError, Variant,
};
use crate::{
    FALLBACK_FACTOR_A, FALLBACK_FACTOR_B, RECOMMEND_OUTPUT_BELOW, RECOMMEND_STABILITY_BELOW,
    RESONANCE_REFERENCE, STABILITY_DIVISOR, STABILITY_MAX, STABILITY_MIN,
};

lazy_static! {
    // Optional sign, then "12", "12.", "12.5" or ".5". No exponent, no whitespace.
    static ref RE_DECIMAL: Regex = Regex::new(
        r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$"
    ).unwrap();
}

/// Parse a decimal-pad entry
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !RE_DECIMAL.is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// One metric row as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine {
    pub label: &'static str,
    pub value: String,
}

/// Generic calculator bound to one variant's configuration
#[derive(Debug, Clone, Copy)]
pub struct InfusionCalculator {
    config: &'static VariantConfig,
    /// Zone for rendered timestamps; records always store UTC
    zone: DisplayZone,
}

impl InfusionCalculator {
    /// Create calculator for a variant, rendering timestamps in local time
    pub fn new(variant: Variant) -> Self {
        Self {
            config: variant.config(),
            zone: DisplayZone::Local,
        }
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn config(&self) -> &'static VariantConfig {
        self.config
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Check both free-text factors
    ///
    /// Emptiness of both fields is checked before either is parsed.
    pub fn validate(&self, params: &ParameterSet) -> Result<ValidatedFactors, ValidationError> {
        if params.factor_a.is_empty() {
            return Err(ValidationError::MissingField {
                slot: FactorSlot::A,
                label: self.config.factor_a.label,
            });
        }
        if params.factor_b.is_empty() {
            return Err(ValidationError::MissingField {
                slot: FactorSlot::B,
                label: self.config.factor_b.label,
            });
        }

        let factor_a = check_factor(FactorSlot::A, &self.config.factor_a, &params.factor_a)?;
        let factor_b = check_factor(FactorSlot::B, &self.config.factor_b, &params.factor_b)?;

        Ok(ValidatedFactors { factor_a, factor_b })
    }

    /// Alert for a validation failure, worded the way this screen words it
    pub fn notice_for(&self, error: &ValidationError) -> Notice {
        let spec = match error.slot() {
            FactorSlot::A => &self.config.factor_a,
            FactorSlot::B => &self.config.factor_b,
        };
        let message = match error {
            ValidationError::MissingField { .. } => spec.missing_message.to_string(),
            ValidationError::NotANumber { .. } => format!("{} must be a number", spec.label),
            ValidationError::OutOfRange { min, max, .. } => {
                format!("{} must be {}-{}", spec.range_label, min, max)
            }
        };
        Notice::warning(message)
    }

    // =========================================================================
    // COMPUTATION
    // =========================================================================

    /// Compute a result stamped with the current time
    pub fn compute(&self, params: &ParameterSet) -> ResultRecord {
        self.compute_at(params, Utc::now())
    }

    /// Compute a result with an explicit timestamp
    pub fn compute_at(&self, params: &ParameterSet, timestamp: DateTime<Utc>) -> ResultRecord {
        let factor_a = parse_decimal(&params.factor_a).unwrap_or(FALLBACK_FACTOR_A);
        let factor_b = parse_decimal(&params.factor_b).unwrap_or(FALLBACK_FACTOR_B);

        ResultRecord {
            variant: self.config.variant,
            output_magnitude: self.output_magnitude(params),
            stability_index: stability_index(factor_a, factor_b),
            duration_seconds: self.duration_seconds(params.iterations),
            timestamp,
            parameters_snapshot: self.render_snapshot(params),
        }
    }

    /// iterations * duration per iteration
    pub fn duration_seconds(&self, iterations: u32) -> f64 {
        iterations as f64 * self.config.duration_per_iteration
    }

    /// base * rate * intensity multiplier * resonance factor
    pub fn output_magnitude(&self, params: &ParameterSet) -> f64 {
        self.config.base_transform.apply(params.primary_value)
            * params.secondary_rate
            * self.config.intensity_multiplier(params.intensity)
            * (params.resonance_frequency / RESONANCE_REFERENCE)
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Fixed-format rendering of every parameter, no trailing newline
    pub fn render_snapshot(&self, params: &ParameterSet) -> String {
        let mut lines = Vec::with_capacity(self.config.snapshot_lines.len() + 2);

        if let Some((header, dashes)) = self.config.snapshot_header {
            lines.push(header.to_string());
            lines.push("-".repeat(dashes));
        }

        for line in self.config.snapshot_lines {
            let value = match line.field {
                SnapshotField::Primary => whole(params.primary_value),
                SnapshotField::Secondary => format!("{:.1}", params.secondary_rate),
                SnapshotField::FactorA => params.factor_a.clone(),
                SnapshotField::FactorB => params.factor_b.clone(),
                SnapshotField::Iterations => params.iterations.to_string(),
                SnapshotField::Protocol => self.config.protocol_label(params.protocol).to_string(),
                SnapshotField::Material => self.config.material_label(params.material).to_string(),
                SnapshotField::Intensity => self.config.intensity_label(params.intensity).to_string(),
                SnapshotField::Resonance => format!("{:.1}", params.resonance_frequency),
            };
            lines.push(format!("{}: {}{}", line.label, value, line.unit));
        }

        lines.join("\n")
    }

    /// Shareable block: metrics, configuration snapshot, generated-on line
    pub fn render_share_text(&self, result: &ResultRecord) -> String {
        let share = &self.config.share;
        [
            share.title.to_string(),
            "-".repeat(share.separator_len),
            format!("{}: {:.2} MW", share.output_label, result.output_magnitude),
            format!("{}: {:.1}/10", share.stability_label, result.stability_index),
            format!("{}: {:.1} seconds", share.duration_label, result.duration_seconds),
            String::new(),
            share.configuration_heading.to_string(),
            result.parameters_snapshot.clone(),
            String::new(),
            format!("{} {}", share.footer_prefix, result.formatted_timestamp(self.zone)),
        ]
        .join("\n")
    }

    /// On-screen metric rows
    pub fn metric_lines(&self, result: &ResultRecord) -> Vec<MetricLine> {
        let labels = &self.config.metrics;
        vec![
            MetricLine {
                label: labels.output,
                value: format!("{:.2} MW", result.output_magnitude),
            },
            MetricLine {
                label: labels.stability,
                value: format!("{:.1}/10", result.stability_index),
            },
            MetricLine {
                label: labels.duration,
                value: format!("{:.1} sec", result.duration_seconds),
            },
            MetricLine {
                label: labels.timestamp,
                value: result.formatted_timestamp(self.zone),
            },
        ]
    }

    /// Canned advice for a result
    pub fn recommendations(&self, result: &ResultRecord) -> &'static [&'static str] {
        let sets = &self.config.recommendations;
        if result.stability_index < RECOMMEND_STABILITY_BELOW {
            sets.stabilize
        } else if result.output_magnitude < RECOMMEND_OUTPUT_BELOW {
            sets.boost
        } else {
            sets.optimal
        }
    }
}

/// clamp(a * b / 10, 1, 10)
pub fn stability_index(factor_a: f64, factor_b: f64) -> f64 {
    (factor_a * factor_b / STABILITY_DIVISOR).clamp(STABILITY_MIN, STABILITY_MAX)
}

fn check_factor(slot: FactorSlot, spec: &FactorSpec, text: &str) -> Result<f64, ValidationError> {
    let value = parse_decimal(text).ok_or_else(|| ValidationError::NotANumber {
        slot,
        label: spec.label,
        input: text.to_string(),
    })?;

    if let Some((min, max)) = spec.bounds {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                slot,
                label: spec.label,
                value,
                min,
                max,
            });
        }
    }

    Ok(value)
}

/// Integer rendering, truncating toward zero
fn whole(value: f64) -> String {
    (value.trunc() as i64).to_string()
}

// =============================================================================
// TESTS
// =============================================================================

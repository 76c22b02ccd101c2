//! Runedra: parameter-to-result engine behind the Runedra Kraft infusion screens
//!
//! Three variants (cryo, nocturne, quantum) share one formula shape:
//! ParameterSet → validate → compute → ResultRecord → share text

pub mod core;
pub mod types;

// =============================================================================
// STABILITY INDEX
// =============================================================================

/// Lower clamp for the stability index
pub const STABILITY_MIN: f64 = 1.0;

/// Upper clamp for the stability index
pub const STABILITY_MAX: f64 = 10.0;

/// stability_index = factor_a * factor_b / STABILITY_DIVISOR
pub const STABILITY_DIVISOR: f64 = 10.0;

/// Substituted for factor A when it does not parse (validation bypassed)
pub const FALLBACK_FACTOR_A: f64 = 5.0;

/// Substituted for factor B when it does not parse (validation bypassed)
pub const FALLBACK_FACTOR_B: f64 = 1.0;

// =============================================================================
// OUTPUT MAGNITUDE
// =============================================================================

/// Resonance frequency that yields a neutral (1.0) resonance factor
pub const RESONANCE_REFERENCE: f64 = 3.0;

// =============================================================================
// BANDS AND RECOMMENDATIONS
// =============================================================================

/// Stability index above this is shown as stable
pub const BAND_STABLE_ABOVE: f64 = 7.0;

/// Stability index above this (and not stable) is shown as marginal
pub const BAND_MARGINAL_ABOVE: f64 = 4.0;

/// Below this stability index the "stabilize" recommendations apply
pub const RECOMMEND_STABILITY_BELOW: f64 = 5.0;

/// Below this output magnitude the "boost" recommendations apply
pub const RECOMMEND_OUTPUT_BELOW: f64 = 50.0;

// =============================================================================
// FORMATTING
// =============================================================================

/// chrono format for the timestamp in share text and metric rows
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M %p";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

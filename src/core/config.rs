//! Per-variant configuration
//!
//! The three screens differ only in labels, units, bounds and a few constants.
//! Everything variant-specific lives here; the calculator is generic over it.

use std::time::Duration;
use crate::types::{Intensity, Material, Protocol, Severity, Variant};

/// Slider bounds with step and reset value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Bounds {
    /// Snap to the slider step, then clamp; NaN falls back to the default
    pub fn constrain(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let per_unit = (1.0 / self.step).round();
        let snapped = (value * per_unit).round() / per_unit;
        snapped.clamp(self.min, self.max)
    }
}

/// Stepper bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl StepperBounds {
    pub fn constrain(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// How the primary value feeds the output magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseTransform {
    /// abs(primary); cryo temperatures are negative
    Magnitude,
    /// primary as is
    Identity,
}

impl BaseTransform {
    pub fn apply(&self, primary: f64) -> f64 {
        match self {
            BaseTransform::Magnitude => primary.abs(),
            BaseTransform::Identity => primary,
        }
    }
}

/// A free-text factor field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSpec {
    /// Field label
    pub label: &'static str,
    /// Label used in the range message
    pub range_label: &'static str,
    /// Inclusive numeric bound; None means only emptiness and parseability are checked
    pub bounds: Option<(f64, f64)>,
    /// Alert text when the field is empty
    pub missing_message: &'static str,
}

/// Fields that can appear in a parameters snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    Primary,
    Secondary,
    FactorA,
    FactorB,
    Iterations,
    Protocol,
    Material,
    Intensity,
    Resonance,
}

/// One `Label: value<unit>` line of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotLine {
    pub field: SnapshotField,
    pub label: &'static str,
    /// Appended right after the value, including any leading space
    pub unit: &'static str,
}

/// Layout of the shareable results block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareLayout {
    pub title: &'static str,
    pub separator_len: usize,
    pub output_label: &'static str,
    pub stability_label: &'static str,
    pub duration_label: &'static str,
    pub configuration_heading: &'static str,
    pub footer_prefix: &'static str,
}

/// Labels of the on-screen metric rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricLabels {
    pub output: &'static str,
    pub stability: &'static str,
    pub duration: &'static str,
    pub timestamp: &'static str,
}

/// Canned recommendation sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendations {
    pub heading: &'static str,
    /// Stability index below threshold
    pub stabilize: &'static [&'static str],
    /// Output magnitude below threshold
    pub boost: &'static [&'static str],
    pub optimal: &'static [&'static str],
}

/// Alert texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub success: &'static str,
    pub reset: &'static str,
    pub copied: &'static str,
    pub completion: &'static str,
    pub processing: Option<&'static str>,
    pub manual: &'static str,
}

/// Alert titles per severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTitles {
    pub info: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

impl AlertTitles {
    pub fn get(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Success => self.success,
        }
    }
}

/// Cosmetic delays around compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Before the result is computed
    pub processing: Duration,
    /// Before the result is revealed
    pub reveal: Duration,
}

/// Complete description of one screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantConfig {
    pub variant: Variant,
    pub title: &'static str,
    pub subtitle: &'static str,

    pub primary: Bounds,
    pub secondary: Bounds,
    pub resonance: Bounds,
    pub iterations: StepperBounds,
    pub factor_a: FactorSpec,
    pub factor_b: FactorSpec,

    pub duration_per_iteration: f64,
    pub base_transform: BaseTransform,
    /// Indexed by Intensity
    pub intensity_multipliers: [f64; 3],

    /// Indexed by Protocol
    pub protocols: [&'static str; 4],
    /// Indexed by Material
    pub materials: [&'static str; 3],
    /// Indexed by Intensity
    pub intensities: [&'static str; 3],

    /// Optional title line of the snapshot (followed by a dash separator)
    pub snapshot_header: Option<(&'static str, usize)>,
    pub snapshot_lines: &'static [SnapshotLine],
    pub share: ShareLayout,
    pub metrics: MetricLabels,
    pub recommendations: Recommendations,
    pub messages: Messages,
    pub alert_titles: AlertTitles,
    pub pacing: Pacing,
}

impl VariantConfig {
    pub fn intensity_multiplier(&self, intensity: Intensity) -> f64 {
        self.intensity_multipliers[intensity.index()]
    }

    pub fn protocol_label(&self, protocol: Protocol) -> &'static str {
        self.protocols[protocol.index()]
    }

    pub fn material_label(&self, material: Material) -> &'static str {
        self.materials[material.index()]
    }

    pub fn intensity_label(&self, intensity: Intensity) -> &'static str {
        self.intensities[intensity.index()]
    }

    /// Match by generic name ("enhanced") or by this variant's label ("Arctic Protocol")
    pub fn find_protocol(&self, text: &str) -> Option<Protocol> {
        Protocol::ALL
            .into_iter()
            .find(|p| matches_choice(text, p.name(), self.protocol_label(*p)))
    }

    pub fn find_material(&self, text: &str) -> Option<Material> {
        Material::ALL
            .into_iter()
            .find(|m| matches_choice(text, m.name(), self.material_label(*m)))
    }

    pub fn find_intensity(&self, text: &str) -> Option<Intensity> {
        Intensity::ALL
            .into_iter()
            .find(|i| matches_choice(text, i.name(), self.intensity_label(*i)))
    }
}

fn matches_choice(text: &str, name: &str, label: &str) -> bool {
    let text = text.trim();
    text.eq_ignore_ascii_case(name) || text.eq_ignore_ascii_case(label)
}

// =============================================================================
// SHARED BOUNDS
// =============================================================================

const ITERATIONS: StepperBounds = StepperBounds { min: 1, max: 10, default: 1 };

const RESONANCE: Bounds = Bounds { min: 1.0, max: 5.0, step: 0.1, default: 3.0 };

const FACTOR_A_BOUNDS: Option<(f64, f64)> = Some((1.0, 100.0));

const FACTOR_B_BOUNDS: Option<(f64, f64)> = Some((0.1, 10.0));

const REVEAL_DELAY: Duration = Duration::from_millis(1500);

const STANDARD_ALERT_TITLES: AlertTitles = AlertTitles {
    info: "Information",
    warning: "Warning",
    error: "Error",
    success: "Success",
};

// =============================================================================
// IRONHOLLOW FROSTSHRIEK (cryo)
// =============================================================================

pub const CRYO: VariantConfig = VariantConfig {
    variant: Variant::Cryo,
    title: "Ironhollow Frostshriek",
    subtitle: "Cryogenic Quantum Infusion Nexus",

    primary: Bounds { min: -273.0, max: 0.0, step: 1.0, default: -50.0 },
    secondary: Bounds { min: 0.1, max: 10.0, step: 0.1, default: 2.5 },
    resonance: RESONANCE,
    iterations: ITERATIONS,
    factor_a: FactorSpec {
        label: "Frostbite Factor",
        range_label: "Frostbite Factor",
        bounds: FACTOR_A_BOUNDS,
        missing_message: "Frostbite Factor required",
    },
    // No numeric range on the stabilizer for this screen; kept until product decides.
    // range_label only shows once bounds are set.
    factor_b: FactorSpec {
        label: "Stabilizer Constant",
        range_label: "Stabilizer",
        bounds: None,
        missing_message: "Stabilizer Constant required",
    },

    duration_per_iteration: 0.8,
    base_transform: BaseTransform::Magnitude,
    intensity_multipliers: [0.7, 1.0, 1.5],

    protocols: [
        "Glacial Protocol",
        "Arctic Protocol",
        "Polar Protocol",
        "Absolute Zero Protocol",
    ],
    materials: ["Ice Matrix", "Snow Composite", "Hail Alloy"],
    intensities: ["Mild", "Moderate", "Extreme"],

    snapshot_header: Some(("Ironhollow Frostshriek Configuration", 35)),
    snapshot_lines: &[
        SnapshotLine { field: SnapshotField::Primary, label: "Core Temperature", unit: "°K" },
        SnapshotLine { field: SnapshotField::Secondary, label: "Cryo Rate", unit: " mL/s" },
        SnapshotLine { field: SnapshotField::FactorA, label: "Frostbite Factor", unit: "" },
        SnapshotLine { field: SnapshotField::FactorB, label: "Stabilizer Constant", unit: "" },
        SnapshotLine { field: SnapshotField::Iterations, label: "Iterations", unit: "" },
        SnapshotLine { field: SnapshotField::Protocol, label: "Protocol", unit: "" },
        SnapshotLine { field: SnapshotField::Material, label: "Matrix", unit: "" },
        SnapshotLine { field: SnapshotField::Intensity, label: "Intensity", unit: "" },
        SnapshotLine { field: SnapshotField::Resonance, label: "Resonance", unit: " kHz" },
    ],
    share: ShareLayout {
        title: "Ironhollow Frostshriek Results",
        separator_len: 29,
        output_label: "Energy Absorption",
        stability_label: "Stability Index",
        duration_label: "Duration",
        configuration_heading: "Configuration:",
        footer_prefix: "Generated on",
    },
    metrics: MetricLabels {
        output: "Energy Absorption",
        stability: "Stability Index",
        duration: "Duration",
        timestamp: "Timestamp",
    },
    recommendations: Recommendations {
        heading: "Cryo Recommendations",
        stabilize: &[
            "Increase stabilizer constant by 15-20%",
            "Reduce cryo rate by 10-15%",
            "Consider using Snow Composite matrix",
        ],
        boost: &[
            "Increase core temperature gradient",
            "Try Arctic or Polar protocols",
            "Consider Extreme intensity setting",
        ],
        optimal: &[
            "Parameters are within optimal range",
            "Consider increasing iterations for deeper infusion",
        ],
    },
    messages: Messages {
        success: "Cryo infusion successful!",
        reset: "Chamber reset to default parameters",
        copied: "Cryo data copied",
        completion: "CRYO INFUSION COMPLETE",
        processing: Some("Stabilizing Cryo Matrix..."),
        manual: "Ironhollow Frostshriek Manual\n\
                 ----------------------------\n\
                 1. Set core temperature (-273°K to 0°K)\n\
                 2. Configure cryo injection rate\n\
                 3. Enter frostbite factor (1-100)\n\
                 4. Set stabilizer constant (0.1-10)\n\
                 5. Select protocol and matrix\n\
                 6. Adjust resonance frequency\n\
                 7. Initiate cryo infusion\n\
                 \n\
                 Warning: Extreme temperatures may cause quantum instability.",
    },
    alert_titles: STANDARD_ALERT_TITLES,
    pacing: Pacing {
        processing: Duration::from_millis(1500),
        reveal: REVEAL_DELAY,
    },
};

// =============================================================================
// NIGHTVEIL DUSKWHISPER (nocturne)
// =============================================================================

pub const NOCTURNE: VariantConfig = VariantConfig {
    variant: Variant::Nocturne,
    title: "Nightveil Duskwhisper",
    subtitle: "Quantum resonance modulation system",

    primary: Bounds { min: 1.0, max: 100.0, step: 1.0, default: 50.0 },
    secondary: Bounds { min: 0.1, max: 5.0, step: 0.1, default: 2.5 },
    resonance: RESONANCE,
    iterations: ITERATIONS,
    factor_a: FactorSpec {
        label: "Shadow Coefficient",
        range_label: "Shadow Coefficient",
        bounds: FACTOR_A_BOUNDS,
        missing_message: "Please enter Shadow Coefficient",
    },
    factor_b: FactorSpec {
        label: "Twilight Constant",
        range_label: "Twilight Constant",
        bounds: FACTOR_B_BOUNDS,
        missing_message: "Please enter Twilight Constant",
    },

    duration_per_iteration: 0.5,
    base_transform: BaseTransform::Identity,
    intensity_multipliers: [0.7, 1.0, 1.8],

    protocols: [
        "Dusk Protocol",
        "Twilight Protocol",
        "Nocturne Protocol",
        "Eclipse Protocol",
    ],
    materials: ["Lunar Matrix", "Stellar Composite", "Celestial Alloy"],
    intensities: ["Whisper", "Murmur", "Resonance"],

    snapshot_header: None,
    snapshot_lines: &[
        SnapshotLine { field: SnapshotField::Resonance, label: "Sparkle Frequency", unit: " kHz" },
        SnapshotLine { field: SnapshotField::Primary, label: "Core Luminescence", unit: " lumens" },
        SnapshotLine { field: SnapshotField::Secondary, label: "Duskwave Frequency", unit: " kHz" },
        SnapshotLine { field: SnapshotField::FactorA, label: "Shadow Coefficient", unit: "" },
        SnapshotLine { field: SnapshotField::FactorB, label: "Twilight Constant", unit: "" },
        SnapshotLine { field: SnapshotField::Iterations, label: "Echo Iterations", unit: "" },
        SnapshotLine { field: SnapshotField::Protocol, label: "Dusk Protocol", unit: "" },
        SnapshotLine { field: SnapshotField::Material, label: "Celestial Matrix", unit: "" },
        SnapshotLine { field: SnapshotField::Intensity, label: "Resonance", unit: "" },
    ],
    share: ShareLayout {
        title: "Nightveil Duskwhisper Echoes",
        separator_len: 27,
        output_label: "Luminous Output",
        stability_label: "Harmony Index",
        duration_label: "Dusk Duration",
        configuration_heading: "Celestial Configuration:",
        footer_prefix: "Recorded during",
    },
    metrics: MetricLabels {
        output: "Luminous Output",
        stability: "Harmony Index",
        duration: "Dusk Duration",
        timestamp: "Moon Phase",
    },
    recommendations: Recommendations {
        heading: "Celestial Guidance",
        stabilize: &[
            "Increase twilight constant",
            "Reduce duskwave frequency by 10-15%",
            "Consider using Stellar Composite",
        ],
        boost: &[
            "Increase core luminescence",
            "Try Nocturne Protocol",
            "Consider Resonance intensity",
        ],
        optimal: &[
            "Parameters are harmonious",
            "Consider increasing echo iterations",
        ],
    },
    messages: Messages {
        success: "Nocturne resonance achieved!",
        reset: "Veil restored to twilight state",
        copied: "Echoes copied to scroll",
        completion: "Nocturne Complete!",
        processing: None,
        manual: "Eldritch Guide:\n\
                 1. Set all celestial parameters\n\
                 2. Configure nocturne settings\n\
                 3. Begin the duskwhisper\n\
                 4. Interpret the resonance echoes",
    },
    alert_titles: AlertTitles {
        info: "Whisper",
        warning: "Caution",
        error: "Disturbance",
        success: "Harmony",
    },
    pacing: Pacing {
        processing: Duration::ZERO,
        reveal: REVEAL_DELAY,
    },
};

// =============================================================================
// QUANTUM INFUSION NEXUS (quantum)
// =============================================================================

pub const QUANTUM: VariantConfig = VariantConfig {
    variant: Variant::Quantum,
    title: "Quantum Infusion Nexus",
    subtitle: "Advanced protocol modulation system",

    primary: Bounds { min: 1.0, max: 100.0, step: 1.0, default: 50.0 },
    secondary: Bounds { min: 0.1, max: 5.0, step: 0.1, default: 2.5 },
    resonance: RESONANCE,
    iterations: ITERATIONS,
    factor_a: FactorSpec {
        label: "Plinthride Factor",
        range_label: "Plinthride Factor",
        bounds: FACTOR_A_BOUNDS,
        missing_message: "Please enter Plinthride Factor",
    },
    factor_b: FactorSpec {
        label: "Stabilizer Constant",
        range_label: "Stabilizer Constant",
        bounds: FACTOR_B_BOUNDS,
        missing_message: "Please enter Stabilizer Constant",
    },

    duration_per_iteration: 0.5,
    base_transform: BaseTransform::Identity,
    intensity_multipliers: [0.7, 1.0, 1.8],

    protocols: [
        "Basic Protocol",
        "Enhanced Protocol",
        "Quantum Protocol",
        "Singularity Protocol",
    ],
    materials: ["Alpha Matrix", "Beta Composite", "Gamma Alloy"],
    intensities: ["Minimal", "Moderate", "Extreme"],

    snapshot_header: None,
    snapshot_lines: &[
        SnapshotLine { field: SnapshotField::Resonance, label: "Sparkle Frequency", unit: " kHz" },
        SnapshotLine { field: SnapshotField::Primary, label: "Core Value", unit: "" },
        SnapshotLine { field: SnapshotField::Secondary, label: "Infusion Rate", unit: "" },
        SnapshotLine { field: SnapshotField::FactorA, label: "Plinthride Factor", unit: "" },
        SnapshotLine { field: SnapshotField::FactorB, label: "Stabilizer Constant", unit: "" },
        SnapshotLine { field: SnapshotField::Iterations, label: "Iterations", unit: "" },
        SnapshotLine { field: SnapshotField::Protocol, label: "Infusion Protocol", unit: "" },
        SnapshotLine { field: SnapshotField::Material, label: "Material Matrix", unit: "" },
        SnapshotLine { field: SnapshotField::Intensity, label: "Intensity", unit: "" },
    ],
    share: ShareLayout {
        title: "Quantum Infusion Results",
        separator_len: 23,
        output_label: "Energy Output",
        stability_label: "Stability Index",
        duration_label: "Duration",
        configuration_heading: "Configuration:",
        footer_prefix: "Generated on",
    },
    metrics: MetricLabels {
        output: "Energy Output",
        stability: "Stability Index",
        duration: "Duration",
        timestamp: "Timestamp",
    },
    recommendations: Recommendations {
        heading: "Recommendations",
        stabilize: &[
            "Increase stabilizer constant",
            "Reduce infusion rate by 10-15%",
            "Consider using Beta Composite material",
        ],
        boost: &[
            "Increase core value",
            "Try Quantum Protocol",
            "Consider Extreme intensity",
        ],
        optimal: &[
            "Parameters are optimal",
            "Consider increasing iterations",
        ],
    },
    messages: Messages {
        success: "Infusion completed successfully!",
        reset: "Form reset to default values",
        copied: "Results copied to clipboard",
        completion: "Infusion Complete!",
        processing: None,
        manual: "Quantum Infusion Guide:\n\
                 1. Set all parameters\n\
                 2. Configure infusion settings\n\
                 3. Press Start Infusion\n\
                 4. View results & recommendations",
    },
    alert_titles: STANDARD_ALERT_TITLES,
    pacing: Pacing {
        processing: Duration::ZERO,
        reveal: REVEAL_DELAY,
    },
};

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_nan_falls_back_to_default() {
        assert_eq!(RESONANCE.constrain(f64::NAN), 3.0);
        assert_eq!(RESONANCE.constrain(f64::INFINITY), 5.0);
        assert_eq!(RESONANCE.constrain(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_bounds_snap() {
        assert_eq!(RESONANCE.constrain(2.46), 2.5);
        assert_eq!(CRYO.primary.constrain(-300.0), -273.0);
        assert_eq!(CRYO.primary.constrain(12.0), 0.0);
    }

    #[test]
    fn test_base_transform() {
        assert_eq!(BaseTransform::Magnitude.apply(-50.0), 50.0);
        assert_eq!(BaseTransform::Identity.apply(50.0), 50.0);
        assert_eq!(BaseTransform::Identity.apply(-5.0), -5.0);
    }

    #[test]
    fn test_intensity_tables() {
        assert_eq!(CRYO.intensity_multiplier(Intensity::High), 1.5);
        assert_eq!(NOCTURNE.intensity_multiplier(Intensity::High), 1.8);
        assert_eq!(QUANTUM.intensity_multiplier(Intensity::Low), 0.7);
        assert_eq!(QUANTUM.intensity_multiplier(Intensity::Mid), 1.0);
    }

    #[test]
    fn test_find_choices_by_name_or_label() {
        assert_eq!(CRYO.find_protocol("absolute zero protocol"), Some(Protocol::Singularity));
        assert_eq!(CRYO.find_protocol("enhanced"), Some(Protocol::Enhanced));
        assert_eq!(NOCTURNE.find_material("Stellar Composite"), Some(Material::Beta));
        assert_eq!(NOCTURNE.find_intensity("murmur"), Some(Intensity::Mid));
        assert_eq!(QUANTUM.find_intensity("EXTREME"), Some(Intensity::High));
        assert_eq!(QUANTUM.find_protocol("Glacial Protocol"), None);
    }

    #[test]
    fn test_snapshot_lines_cover_every_field() {
        let fields = [
            SnapshotField::Primary,
            SnapshotField::Secondary,
            SnapshotField::FactorA,
            SnapshotField::FactorB,
            SnapshotField::Iterations,
            SnapshotField::Protocol,
            SnapshotField::Material,
            SnapshotField::Intensity,
        ];
        for config in [&CRYO, &NOCTURNE, &QUANTUM] {
            for field in fields {
                assert!(
                    config.snapshot_lines.iter().any(|line| line.field == field),
                    "{} snapshot misses {:?}",
                    config.title,
                    field
                );
            }
        }
    }

    #[test]
    fn test_alert_titles_per_variant() {
        assert_eq!(NOCTURNE.alert_titles.get(Severity::Info), "Whisper");
        assert_eq!(NOCTURNE.alert_titles.get(Severity::Warning), "Caution");
        assert_eq!(NOCTURNE.alert_titles.get(Severity::Error), "Disturbance");
        assert_eq!(NOCTURNE.alert_titles.get(Severity::Success), "Harmony");
        for config in [CRYO, QUANTUM] {
            for severity in [Severity::Info, Severity::Warning, Severity::Error, Severity::Success] {
                assert_eq!(config.alert_titles.get(severity), severity.title());
            }
        }
    }

    #[test]
    fn test_cryo_stabilizer_range_label_is_dormant() {
        assert_eq!(CRYO.factor_b.bounds, None);
        assert_eq!(CRYO.factor_b.range_label, "Stabilizer");
    }
}

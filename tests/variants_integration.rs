//! Integration tests across the nocturne and quantum screens
//!
//! - Worked quantum example: 8/2, two iterations, extreme ⇒ 225.00 MW, 1.6/10, 1.0 s
//! - Golden share texts (no configuration header on these screens)
//! - Formula bounds hold for every variant

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use runedra::core::{stability_index, InfusionCalculator};
use runedra::types::{
    DisplayZone, Intensity, ParameterSet, StabilityBand, ValidationError, Variant,
};

fn afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 0).unwrap()
}

fn with_factors(variant: Variant, a: &str, b: &str) -> ParameterSet {
    let mut params = ParameterSet::defaults_for(variant);
    params.factor_a = a.to_string();
    params.factor_b = b.to_string();
    params
}

// =============================================================================
// QUANTUM
// =============================================================================

#[test]
fn test_quantum_worked_example() {
    let calc = InfusionCalculator::new(Variant::Quantum).with_zone(DisplayZone::Utc);
    let mut params = with_factors(Variant::Quantum, "8", "2");
    params.iterations = 2;
    params.intensity = Intensity::High;

    let result = calc.compute_at(&params, afternoon());
    assert!((result.stability_index - 1.6).abs() < 1e-9);
    assert!((result.duration_seconds - 1.0).abs() < 1e-9);
    assert!((result.output_magnitude - 225.0).abs() < 1e-9);
    assert_eq!(result.stability_band(), StabilityBand::Unstable);

    assert_eq!(
        calc.recommendations(&result),
        &[
            "Increase stabilizer constant",
            "Reduce infusion rate by 10-15%",
            "Consider using Beta Composite material",
        ]
    );

    let expected = [
        "Quantum Infusion Results".to_string(),
        "-".repeat(23),
        "Energy Output: 225.00 MW".to_string(),
        "Stability Index: 1.6/10".to_string(),
        "Duration: 1.0 seconds".to_string(),
        String::new(),
        "Configuration:".to_string(),
        "Sparkle Frequency: 3.0 kHz".to_string(),
        "Core Value: 50".to_string(),
        "Infusion Rate: 2.5".to_string(),
        "Plinthride Factor: 8".to_string(),
        "Stabilizer Constant: 2".to_string(),
        "Iterations: 2".to_string(),
        "Infusion Protocol: Basic Protocol".to_string(),
        "Material Matrix: Alpha Matrix".to_string(),
        "Intensity: Extreme".to_string(),
        String::new(),
        "Generated on 10/19/2026, 3:04 PM".to_string(),
    ]
    .join("\n");

    assert_eq!(calc.render_share_text(&result), expected);
}

#[test]
fn test_quantum_range_checks_both_factors() {
    let calc = InfusionCalculator::new(Variant::Quantum);

    let err = calc.validate(&with_factors(Variant::Quantum, "0.5", "2")).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { .. }));
    assert_eq!(calc.notice_for(&err).message, "Plinthride Factor must be 1-100");

    let err = calc.validate(&with_factors(Variant::Quantum, "50", "10.5")).unwrap_err();
    assert_eq!(calc.notice_for(&err).message, "Stabilizer Constant must be 0.1-10");

    // Inclusive bounds
    assert!(calc.validate(&with_factors(Variant::Quantum, "1", "0.1")).is_ok());
    assert!(calc.validate(&with_factors(Variant::Quantum, "100", "10")).is_ok());
}

// =============================================================================
// NOCTURNE
// =============================================================================

#[test]
fn test_nocturne_share_text_golden() {
    let calc = InfusionCalculator::new(Variant::Nocturne).with_zone(DisplayZone::Utc);
    let result = calc.compute_at(&with_factors(Variant::Nocturne, "10", "5"), afternoon());

    let expected = [
        "Nightveil Duskwhisper Echoes".to_string(),
        "-".repeat(27),
        "Luminous Output: 125.00 MW".to_string(),
        "Harmony Index: 5.0/10".to_string(),
        "Dusk Duration: 0.5 seconds".to_string(),
        String::new(),
        "Celestial Configuration:".to_string(),
        "Sparkle Frequency: 3.0 kHz".to_string(),
        "Core Luminescence: 50 lumens".to_string(),
        "Duskwave Frequency: 2.5 kHz".to_string(),
        "Shadow Coefficient: 10".to_string(),
        "Twilight Constant: 5".to_string(),
        "Echo Iterations: 1".to_string(),
        "Dusk Protocol: Dusk Protocol".to_string(),
        "Celestial Matrix: Lunar Matrix".to_string(),
        "Resonance: Murmur".to_string(),
        String::new(),
        "Recorded during 10/19/2026, 3:04 PM".to_string(),
    ]
    .join("\n");

    assert_eq!(calc.render_share_text(&result), expected);
}

#[test]
fn test_nocturne_metric_labels() {
    let calc = InfusionCalculator::new(Variant::Nocturne);
    let result = calc.compute_at(&with_factors(Variant::Nocturne, "10", "5"), afternoon());
    let labels: Vec<&str> = calc.metric_lines(&result).iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Luminous Output", "Harmony Index", "Dusk Duration", "Moon Phase"]);
}

#[test]
fn test_nocturne_low_output_recommendations() {
    let calc = InfusionCalculator::new(Variant::Nocturne);
    let mut params = with_factors(Variant::Nocturne, "50", "5");
    params.primary_value = 10.0;
    params.secondary_rate = 1.0;

    let result = calc.compute_at(&params, afternoon());
    assert_eq!(result.stability_index, 10.0);
    assert!(result.output_magnitude < 50.0);
    assert_eq!(calc.recommendations(&result)[1], "Try Nocturne Protocol");
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_stability_always_within_bounds() {
    let samples = [-1000.0, -1.0, 0.0, 0.05, 1.0, 3.3, 10.0, 99.9, 1e6];
    for a in samples {
        for b in samples {
            let s = stability_index(a, b);
            assert!((1.0..=10.0).contains(&s), "a={} b={} -> {}", a, b, s);
        }
    }
}

#[test]
fn test_duration_is_iterations_times_step() {
    for variant in Variant::ALL {
        let calc = InfusionCalculator::new(variant);
        let step = variant.config().duration_per_iteration;
        for iterations in 1..=10u32 {
            let expected = iterations as f64 * step;
            assert!((calc.duration_seconds(iterations) - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_snapshot_covers_every_parameter() {
    for variant in Variant::ALL {
        let calc = InfusionCalculator::new(variant);
        let snapshot = calc.render_snapshot(&with_factors(variant, "10", "5"));
        let config = variant.config();
        for line in config.snapshot_lines {
            assert!(snapshot.contains(line.label), "{} missing {}", variant, line.label);
        }
        assert!(!snapshot.ends_with('\n'));
    }
}

#[test]
fn test_compute_ignores_validation() {
    // Unparseable factors fall back to 5.0 / 1.0 when compute is called directly
    for variant in Variant::ALL {
        let calc = InfusionCalculator::new(variant);
        let result = calc.compute_at(&with_factors(variant, "x", "y"), afternoon());
        assert_eq!(result.stability_index, 1.0);
    }
}

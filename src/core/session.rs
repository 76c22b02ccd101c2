//! Infusion session: explicit state machine for one screen
//!
//! State transitions:
//! - IDLE/READY → VALIDATING: submit
//! - VALIDATING → IDLE: factors rejected (warning notice)
//! - VALIDATING → COMPUTING → READY: factors accepted (success notice)
//! - any → IDLE: reset (defaults restored, result discarded)

use std::time::Duration;
use chrono::{DateTime, Utc};
use crate::core::calculator::InfusionCalculator;
use crate::types::{
    DisplayZone, Intensity, Material, Notice, ParameterSet, Protocol, ResultRecord,
    SessionOutput, SessionReason, SessionState, Variant,
};

/// Which cosmetic delay is being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingPhase {
    /// Before compute ("Stabilizing Cryo Matrix...")
    Processing,
    /// Between compute and showing the result
    Reveal,
}

/// Session state machine
#[derive(Debug)]
pub struct InfusionSession {
    /// Variant calculator
    calculator: InfusionCalculator,
    /// Current input state
    params: ParameterSet,
    /// Live result, at most one
    result: Option<ResultRecord>,
    /// Current state
    state: SessionState,
    /// Time source for result timestamps
    clock: fn() -> DateTime<Utc>,
    /// Number of submits
    submit_count: u64,
}

impl InfusionSession {
    /// Create new session with default parameters
    pub fn new(variant: Variant) -> Self {
        Self {
            calculator: InfusionCalculator::new(variant),
            params: ParameterSet::defaults_for(variant),
            result: None,
            state: SessionState::Idle,
            clock: Utc::now,
            submit_count: 0,
        }
    }

    /// Replace the time source (tests pin it)
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Zone for rendered timestamps (local by default)
    pub fn with_display_zone(mut self, zone: DisplayZone) -> Self {
        self.calculator = self.calculator.with_zone(zone);
        self
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Validate and compute with no delay
    pub fn submit(&mut self) -> SessionOutput {
        self.submit_paced(|_, _| {})
    }

    /// Validate and compute, calling `pause` for each non-zero cosmetic delay
    ///
    /// The delays never affect the result; a zero-delay `pause` gives identical output.
    pub fn submit_paced<F>(&mut self, mut pause: F) -> SessionOutput
    where
        F: FnMut(PacingPhase, Duration),
    {
        self.submit_count += 1;
        self.transition(SessionState::Validating);

        if let Err(error) = self.calculator.validate(&self.params) {
            log::debug!("[{}] validation failed: {} ({})", self.variant(), error, error.code());
            self.transition(SessionState::Idle);
            let notice = self.calculator.notice_for(&error);
            return self
                .output(SessionReason::S002_VALIDATION_FAILED, notice)
                .with_error(error);
        }

        self.transition(SessionState::Computing);

        let pacing = self.calculator.config().pacing;
        if !pacing.processing.is_zero() {
            pause(PacingPhase::Processing, pacing.processing);
        }

        let record = self.calculator.compute_at(&self.params, (self.clock)());
        log::info!(
            "[{}] output={:.2} stability={:.1} duration={:.1}s",
            self.variant(),
            record.output_magnitude,
            record.stability_index,
            record.duration_seconds
        );

        if !pacing.reveal.is_zero() {
            pause(PacingPhase::Reveal, pacing.reveal);
        }

        self.result = Some(record.clone());
        self.transition(SessionState::Ready);

        let notice = Notice::success(self.calculator.config().messages.success);
        self.output(SessionReason::S003_RESULT_READY, notice)
            .with_result(record)
    }

    // =========================================================================
    // RESET / SHELL ACTIONS
    // =========================================================================

    /// Restore defaults and discard the result; idempotent
    pub fn reset(&mut self) -> SessionOutput {
        self.params = ParameterSet::defaults_for(self.variant());
        self.result = None;
        self.transition(SessionState::Idle);
        let notice = Notice::info(self.calculator.config().messages.reset);
        self.output(SessionReason::S004_SESSION_RESET, notice)
    }

    /// Share text for the clipboard collaborator, with its confirmation notice
    pub fn copy_share_text(&self) -> (Option<String>, SessionOutput) {
        match self.share_text() {
            Some(text) => {
                let notice = Notice::success(self.calculator.config().messages.copied);
                (Some(text), self.output(SessionReason::S005_SHARE_TEXT_COPIED, notice))
            }
            None => {
                let notice = Notice::info("Run an infusion before sharing results");
                (None, self.output(SessionReason::S006_NO_RESULT, notice))
            }
        }
    }

    /// Manual text as an info notice
    pub fn help(&self) -> SessionOutput {
        let notice = Notice::info(self.calculator.config().messages.manual);
        self.output(SessionReason::S007_HELP_SHOWN, notice)
    }

    // =========================================================================
    // PARAMETER EDITING
    // =========================================================================

    /// Replace all parameters (constrained to the widgets' bounds)
    pub fn apply(&mut self, params: ParameterSet) -> SessionOutput {
        self.params = params.constrained(self.calculator.config());
        self.updated()
    }

    pub fn set_primary_value(&mut self, value: f64) -> SessionOutput {
        self.params.primary_value = self.calculator.config().primary.constrain(value);
        self.updated()
    }

    pub fn set_secondary_rate(&mut self, value: f64) -> SessionOutput {
        self.params.secondary_rate = self.calculator.config().secondary.constrain(value);
        self.updated()
    }

    pub fn set_factor_a(&mut self, text: impl Into<String>) -> SessionOutput {
        self.params.factor_a = text.into();
        self.updated()
    }

    pub fn set_factor_b(&mut self, text: impl Into<String>) -> SessionOutput {
        self.params.factor_b = text.into();
        self.updated()
    }

    pub fn set_iterations(&mut self, iterations: u32) -> SessionOutput {
        self.params.iterations = self.calculator.config().iterations.constrain(iterations);
        self.updated()
    }

    pub fn set_protocol(&mut self, protocol: Protocol) -> SessionOutput {
        self.params.protocol = protocol;
        self.updated()
    }

    pub fn set_material(&mut self, material: Material) -> SessionOutput {
        self.params.material = material;
        self.updated()
    }

    pub fn set_intensity(&mut self, intensity: Intensity) -> SessionOutput {
        self.params.intensity = intensity;
        self.updated()
    }

    pub fn set_resonance_frequency(&mut self, value: f64) -> SessionOutput {
        self.params.resonance_frequency = self.calculator.config().resonance.constrain(value);
        self.updated()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn variant(&self) -> Variant {
        self.calculator.variant()
    }

    pub fn calculator(&self) -> &InfusionCalculator {
        &self.calculator
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }

    /// Share text of the live result
    pub fn share_text(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|r| self.calculator.render_share_text(r))
    }

    /// Snapshot of the current (not yet computed) parameters
    pub fn preview_snapshot(&self) -> String {
        self.calculator.render_snapshot(&self.params)
    }

    pub fn submit_count(&self) -> u64 {
        self.submit_count
    }

    fn updated(&self) -> SessionOutput {
        self.output(SessionReason::S001_PARAMETERS_UPDATED, Notice::info("Parameters updated"))
    }

    fn output(&self, reason: SessionReason, notice: Notice) -> SessionOutput {
        SessionOutput::new(self.variant(), self.state, reason, notice)
    }

    fn transition(&mut self, next: SessionState) {
        if next != self.state {
            log::debug!("[{}] {} → {}", self.variant(), self.state, next);
            self.state = next;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn ready_session(variant: Variant) -> InfusionSession {
        let mut session = InfusionSession::new(variant)
            .with_clock(fixed_clock)
            .with_display_zone(DisplayZone::Utc);
        session.set_factor_a("10");
        session.set_factor_b("5");
        session
    }

    #[test]
    fn test_initial_state_is_idle() {
        let session = InfusionSession::new(Variant::Cryo);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_invalid_submit_returns_to_idle() {
        let mut session = InfusionSession::new(Variant::Quantum);
        let output = session.submit();
        assert_eq!(output.state, SessionState::Idle);
        assert_eq!(output.reason, SessionReason::S002_VALIDATION_FAILED);
        assert_eq!(output.notice.message, "Please enter Plinthride Factor");
        assert!(output.error.is_some());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_valid_submit_reaches_ready() {
        let mut session = ready_session(Variant::Cryo);
        let output = session.submit();
        assert!(output.is_ready());
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(output.notice.message, "Cryo infusion successful!");
        assert_eq!(session.result().unwrap().timestamp, fixed_clock());
    }

    #[test]
    fn test_pacing_phases_per_variant() {
        let mut cryo = ready_session(Variant::Cryo);
        let mut phases = Vec::new();
        cryo.submit_paced(|phase, delay| phases.push((phase, delay)));
        assert_eq!(
            phases,
            vec![
                (PacingPhase::Processing, Duration::from_millis(1500)),
                (PacingPhase::Reveal, Duration::from_millis(1500)),
            ]
        );

        let mut quantum = ready_session(Variant::Quantum);
        let mut phases = Vec::new();
        quantum.submit_paced(|phase, _| phases.push(phase));
        assert_eq!(phases, vec![PacingPhase::Reveal]);
    }

    #[test]
    fn test_no_pacing_on_invalid_input() {
        let mut session = InfusionSession::new(Variant::Cryo);
        let mut called = false;
        session.submit_paced(|_, _| called = true);
        assert!(!called);
    }

    #[test]
    fn test_setters_constrain() {
        let mut session = InfusionSession::new(Variant::Cryo);
        session.set_primary_value(-500.0);
        session.set_secondary_rate(0.0);
        session.set_iterations(42);
        session.set_resonance_frequency(0.2);
        let p = session.params();
        assert_eq!(p.primary_value, -273.0);
        assert_eq!(p.secondary_rate, 0.1);
        assert_eq!(p.iterations, 10);
        assert_eq!(p.resonance_frequency, 1.0);
    }

    #[test]
    fn test_reset_discards_result() {
        let mut session = ready_session(Variant::Nocturne);
        session.submit();
        assert!(session.result().is_some());

        let output = session.reset();
        assert_eq!(output.state, SessionState::Idle);
        assert_eq!(output.notice.message, "Veil restored to twilight state");
        assert!(session.result().is_none());
        assert_eq!(session.params(), &ParameterSet::defaults_for(Variant::Nocturne));
    }

    #[test]
    fn test_copy_without_result() {
        let session = InfusionSession::new(Variant::Quantum);
        let (text, output) = session.copy_share_text();
        assert!(text.is_none());
        assert_eq!(output.reason, SessionReason::S006_NO_RESULT);
    }

    #[test]
    fn test_copy_with_result() {
        let mut session = ready_session(Variant::Quantum);
        session.submit();
        let (text, output) = session.copy_share_text();
        assert!(text.unwrap().starts_with("Quantum Infusion Results\n"));
        assert_eq!(output.notice.message, "Results copied to clipboard");
    }

    #[test]
    fn test_submit_count() {
        let mut session = ready_session(Variant::Cryo);
        session.submit();
        session.submit();
        assert_eq!(session.submit_count(), 2);
    }
}

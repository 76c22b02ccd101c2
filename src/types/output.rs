//! Output structures for terminal display

use serde::Serialize;
use chrono::{DateTime, Utc};
use crate::types::{Notice, ResultRecord, SessionReason, SessionState, ValidationError, Variant};

/// Output of every session call
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Screen
    pub variant: Variant,
    /// State after the call
    pub state: SessionState,
    /// Reason for current state
    pub reason: SessionReason,
    /// Message for the alert collaborator
    pub notice: Notice,
    /// Result produced by this call, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultRecord>,
    /// Validation failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl SessionOutput {
    /// Create new output
    pub fn new(
        variant: Variant,
        state: SessionState,
        reason: SessionReason,
        notice: Notice,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            variant,
            state,
            reason,
            notice,
            result: None,
            error: None,
        }
    }

    pub fn with_result(mut self, result: ResultRecord) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_error(mut self, error: ValidationError) -> Self {
        self.error = Some(error);
        self
    }

    /// Did this call produce a result?
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready && self.result.is_some()
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = SessionState::color_reset();
        let emoji = self.state.emoji();

        format!(
            "{}{} [{}] state={} | {} | {}{}",
            color,
            emoji,
            self.variant,
            self.state,
            self.notice.message,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "variant={} | state={} | severity={} | reason={} | message={}",
            self.variant,
            self.state,
            self.notice.severity,
            self.reason.code(),
            self.notice.message
        )
    }
}

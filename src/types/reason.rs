//! Reason codes for session outcomes

use serde::{Deserialize, Serialize};

/// Why a session call ended where it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum SessionReason {
    // =========================================================================
    // S001-S003: Computation
    // =========================================================================
    /// A parameter was changed
    S001_PARAMETERS_UPDATED,
    /// Free-text factors rejected, back to IDLE
    S002_VALIDATION_FAILED,
    /// Result computed, READY
    S003_RESULT_READY,

    // =========================================================================
    // S004: Reset
    // =========================================================================
    /// Defaults restored, result discarded
    S004_SESSION_RESET,

    // =========================================================================
    // S005-S007: Shell actions
    // =========================================================================
    /// Share text handed to the clipboard collaborator
    S005_SHARE_TEXT_COPIED,
    /// Share requested without a result
    S006_NO_RESULT,
    /// Manual shown
    S007_HELP_SHOWN,
}

impl SessionReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::S001_PARAMETERS_UPDATED => "S001_PARAMETERS_UPDATED",
            Self::S002_VALIDATION_FAILED => "S002_VALIDATION_FAILED",
            Self::S003_RESULT_READY => "S003_RESULT_READY",
            Self::S004_SESSION_RESET => "S004_SESSION_RESET",
            Self::S005_SHARE_TEXT_COPIED => "S005_SHARE_TEXT_COPIED",
            Self::S006_NO_RESULT => "S006_NO_RESULT",
            Self::S007_HELP_SHOWN => "S007_HELP_SHOWN",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::S001_PARAMETERS_UPDATED => "Parameters updated",
            Self::S002_VALIDATION_FAILED => "Validation failed",
            Self::S003_RESULT_READY => "Result ready",
            Self::S004_SESSION_RESET => "Defaults restored",
            Self::S005_SHARE_TEXT_COPIED => "Share text copied",
            Self::S006_NO_RESULT => "No result to share",
            Self::S007_HELP_SHOWN => "Manual shown",
        }
    }
}

impl std::fmt::Display for SessionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

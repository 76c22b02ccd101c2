//! Session state definitions

use serde::{Deserialize, Serialize};

/// The four states of an infusion screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Collecting parameters, nothing pending
    Idle,
    /// Checking the free-text factors
    Validating,
    /// Factors valid, result being produced
    Computing,
    /// Result record available
    Ready,
}

impl SessionState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SessionState::Idle => "\x1b[90m",       // Gray
            SessionState::Validating => "\x1b[33m", // Yellow
            SessionState::Computing => "\x1b[36m",  // Cyan
            SessionState::Ready => "\x1b[32m",      // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            SessionState::Idle => "⏳",
            SessionState::Validating => "🔎",
            SessionState::Computing => "⚙️",
            SessionState::Ready => "✅",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "IDLE",
            SessionState::Validating => "VALIDATING",
            SessionState::Computing => "COMPUTING",
            SessionState::Ready => "READY",
        };
        write!(f, "{}", name)
    }
}

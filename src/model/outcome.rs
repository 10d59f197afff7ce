//! Validation outcomes.

use serde::{Deserialize, Serialize};

/// Message shown for a passing run.
pub const PASS_MESSAGE: &str = "Great job! Output is correct.";

/// Shown when a validator fails without saying why.
pub const DEFAULT_FAIL_REASON: &str = "Code validation failed.";

/// Result of one explicit run of a unit's validator.
///
/// Produced fresh on every run; never carried across buffer edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    Pass,
    Fail { reason: String },
}

impl Outcome {
    /// Builds a failure, substituting the default reason for a blank one.
    pub fn fail(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Self::Fail {
                reason: DEFAULT_FAIL_REASON.to_string(),
            };
        }
        Self::Fail { reason }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Learner-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::Pass => PASS_MESSAGE,
            Self::Fail { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_gets_default() {
        assert_eq!(Outcome::fail("  ").message(), DEFAULT_FAIL_REASON);
        assert_eq!(Outcome::fail("Missing <h1> tag.").message(), "Missing <h1> tag.");
    }

    #[test]
    fn pass_message() {
        assert!(Outcome::Pass.is_pass());
        assert_eq!(Outcome::Pass.message(), PASS_MESSAGE);
    }
}

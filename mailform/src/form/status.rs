//! Submission status tracking

use serde::{Deserialize, Serialize};

/// Where one submission attempt currently stands
///
/// Exactly one value exists at any time, owned by the controller and
/// replaced wholesale on each transition. The terminal variants carry the
/// banner message shown to the operator; neither is absorbing — a
/// subsequent edit or submit re-enters the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Nothing in flight and nothing to report
    #[default]
    Idle,

    /// A submission is in flight; further submits are ignored
    Sending,

    /// The last attempt succeeded
    Succeeded(String),

    /// The last attempt failed (validation or transport)
    Failed(String),
}

impl SubmissionStatus {
    /// Check if no attempt is in flight or reported
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if a submission is currently in flight
    #[must_use]
    pub const fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Check if the last attempt succeeded
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Check if the last attempt failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The banner message, for the terminal states
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Get a human-readable status name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    /// Drops a displayed banner, leaving non-terminal states untouched
    ///
    /// Field edits call this: a stale success/error banner disappears, but
    /// an in-flight `Sending` stays in flight.
    #[must_use]
    pub fn clear_banner(self) -> Self {
        match self {
            Self::Succeeded(_) | Self::Failed(_) => Self::Idle,
            other => other,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => write!(f, "{message}"),
            other => write!(f, "{}", other.name()),
        }
    }
}

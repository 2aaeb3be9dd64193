//! Errors raised when a caller extracts the wrong side of an outcome.
//!
//! Domain failures are never errors in this crate: they travel as failed
//! outcomes. [`OutcomeError`] only covers the extraction helpers
//! (`try_into_value`, `try_into_reason`) that leave the outcome channel and
//! hand the caller a plain [`std::result::Result`].

use thiserror::Error;

use crate::Reason;

/// A caller asked an outcome for a side it does not hold.
#[derive(Debug, Clone, Error)]
pub enum OutcomeError {
    /// A value was requested from a failed outcome.
    ///
    /// Carries the failure reason so the caller can still inspect it.
    #[error("Outcome is not successful: {reason}")]
    NotSuccessful {
        /// The reason the outcome failed.
        reason: Reason,
    },

    /// A failure reason was requested from a successful outcome.
    #[error("Outcome is not failed")]
    NotFailed,
}

impl OutcomeError {
    /// Returns the failure reason for [`OutcomeError::NotSuccessful`].
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Self::NotSuccessful { reason } => Some(reason),
            Self::NotFailed => None,
        }
    }
}

//! Outcome containers.
//!
//! Two independent sum types share the [`Reason`] handle:
//!
//! - [`Outcome`] — success or failure, no payload.
//! - [`ValueOutcome<T>`] — success carrying a `T`, or failure.
//!
//! Both are immutable once built. Success and payload live in the same
//! variant, so a `ValueOutcome` can never report success without a value,
//! nor hold a value and a reason at once.

use std::fmt;

use crate::errors::OutcomeError;
use crate::pending::PendingOutcome;
use crate::reason::{FailureReason, Reason};

// ---------------------------------------------------------------------------
// Bare outcome
// ---------------------------------------------------------------------------

/// The result of an operation that returns nothing on success.
#[must_use = "an outcome may be failed and must be inspected"]
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The operation succeeded.
    Success,
    /// The operation failed for the held reason.
    Failed(Reason),
}

impl Outcome {
    /// Creates a successful outcome.
    pub fn success() -> Self {
        Self::Success
    }

    /// Creates a failed outcome holding `reason`.
    pub fn fail(reason: impl Into<Reason>) -> Self {
        Self::Failed(reason.into())
    }

    /// Creates a failed outcome holding a default-constructed `R`.
    ///
    /// Shortcut for reasons that need no contextual data.
    pub fn fail_default<R: FailureReason + Default>() -> Self {
        Self::fail(R::default())
    }

    /// Returns `true` if the operation succeeded.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` if the operation failed.
    ///
    /// When this is `true`, [`Outcome::failure_reason`] returns `Some`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the failure reason, or `None` if the operation succeeded.
    pub fn failure_reason(&self) -> Option<&Reason> {
        match self {
            Self::Success => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// Consumes the outcome, returning its failure reason.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NotFailed`] if the operation succeeded.
    pub fn try_into_reason(self) -> Result<Reason, OutcomeError> {
        match self {
            Self::Failed(reason) => Ok(reason),
            Self::Success => {
                tracing::warn!("Failure reason requested from a successful outcome");
                Err(OutcomeError::NotFailed)
            }
        }
    }

    /// Converts into a standard [`Result`] so the failure can be propagated with `?`.
    pub fn into_result(self) -> Result<(), Reason> {
        match self {
            Self::Success => Ok(()),
            Self::Failed(reason) => Err(reason),
        }
    }

    /// Attaches `value` to a successful outcome; a failure keeps its reason.
    pub fn with_value<T>(self, value: T) -> ValueOutcome<T> {
        match self {
            Self::Success => ValueOutcome::Success(value),
            Self::Failed(reason) => ValueOutcome::Failed(reason),
        }
    }
}

impl<R: Into<Reason>> From<Result<(), R>> for Outcome {
    fn from(result: Result<(), R>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(reason) => Self::fail(reason),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload-bearing outcome
// ---------------------------------------------------------------------------

/// The result of an operation that returns a `T` on success.
///
/// `T` is the payload itself, never an `Option`: the container already
/// models absence. Use [`ValueOutcome::from_option`] to turn an optional
/// lookup into an explicit success or failure.
#[must_use = "an outcome may be failed and must be inspected"]
#[derive(Debug, Clone)]
pub enum ValueOutcome<T> {
    /// The operation succeeded and produced the held value.
    Success(T),
    /// The operation failed for the held reason and produced no value.
    Failed(Reason),
}

impl<T> ValueOutcome<T> {
    /// Creates a successful outcome holding `value`.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome holding `reason`.
    pub fn fail(reason: impl Into<Reason>) -> Self {
        Self::Failed(reason.into())
    }

    /// Creates a failed outcome holding a default-constructed `R`.
    pub fn fail_default<R: FailureReason + Default>() -> Self {
        Self::fail(R::default())
    }

    /// Stages an outcome of this type; see [`PendingOutcome`].
    pub fn pending() -> PendingOutcome<T> {
        PendingOutcome::new()
    }

    /// Succeeds with the value if present, otherwise fails with `reason`.
    ///
    /// `reason` is only converted when `value` is `None`.
    pub fn from_option(value: Option<T>, reason: impl Into<Reason>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::fail(reason),
        }
    }

    /// Returns `true` if the operation succeeded and holds a value.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the operation failed.
    ///
    /// When this is `true`, [`ValueOutcome::failure_reason`] returns `Some`
    /// and [`ValueOutcome::value`] returns `None`.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the failure reason, or `None` if the operation succeeded.
    pub fn failure_reason(&self) -> Option<&Reason> {
        match self {
            Self::Success(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// Returns the value, or `None` if the operation failed.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Consumes the outcome, returning the value if it succeeded.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Consumes the outcome, returning the reason if it failed.
    pub fn into_reason(self) -> Option<Reason> {
        match self {
            Self::Success(_) => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// Consumes the outcome, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NotSuccessful`] carrying the reason if the
    /// operation failed.
    pub fn try_into_value(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(reason) => {
                tracing::warn!(
                    reason = reason.reason_name(),
                    "Value requested from a failed outcome"
                );
                Err(OutcomeError::NotSuccessful { reason })
            }
        }
    }

    /// Consumes the outcome, returning its failure reason.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::NotFailed`] if the operation succeeded.
    pub fn try_into_reason(self) -> Result<Reason, OutcomeError> {
        match self {
            Self::Failed(reason) => Ok(reason),
            Self::Success(_) => {
                tracing::warn!("Failure reason requested from a successful outcome");
                Err(OutcomeError::NotFailed)
            }
        }
    }

    /// Converts into a standard [`Result`] so the failure can be propagated with `?`.
    pub fn into_result(self) -> Result<T, Reason> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(reason) => Err(reason),
        }
    }

    /// Borrows the value, keeping a clone of the reason handle on failure.
    pub fn as_ref(&self) -> ValueOutcome<&T> {
        match self {
            Self::Success(value) => ValueOutcome::Success(value),
            Self::Failed(reason) => ValueOutcome::Failed(reason.clone()),
        }
    }

    /// Transforms the value of a successful outcome; a failure passes through.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ValueOutcome::Success(f(value)),
            Self::Failed(reason) => ValueOutcome::Failed(reason),
        }
    }

    /// Chains a further operation onto a successful outcome.
    ///
    /// The first failure wins; `f` is not called on a failed outcome.
    pub fn and_then<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> ValueOutcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failed(reason) => ValueOutcome::Failed(reason),
        }
    }

    /// Drops the value, keeping only success or failure.
    pub fn discard_value(self) -> Outcome {
        match self {
            Self::Success(_) => Outcome::Success,
            Self::Failed(reason) => Outcome::Failed(reason),
        }
    }
}

impl<T, R: Into<Reason>> From<Result<T, R>> for ValueOutcome<T> {
    fn from(result: Result<T, R>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(reason) => Self::fail(reason),
        }
    }
}

impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        outcome.discard_value()
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "success({value})"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

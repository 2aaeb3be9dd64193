//! Outcome types for domain-layer operations.
//!
//! Expected failures are values, not panics or errors. Every domain operation
//! returns an outcome that is either a success (optionally carrying a payload)
//! or a failure carrying a typed [`FailureReason`]. Callers inspect the
//! outcome explicitly.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`reason`] | [`FailureReason`] capability, [`Reason`] handle, [`failure_reason!`] macro |
//! | [`outcome`] | [`Outcome`] (no payload) and [`ValueOutcome<T>`] containers |
//! | [`pending`] | [`PendingOutcome<T>`] staged construction |
//! | [`errors`] | [`OutcomeError`] for wrong-side extraction |
//!
//! ## Usage
//!
//! ```
//! use results::{fail, success, success_with, Outcome, ValueOutcome};
//!
//! results::failure_reason! {
//!     /// No customer exists with the requested id.
//!     #[message = "customer {id} not found"]
//!     pub struct CustomerNotFound {
//!         pub id: u64,
//!     }
//! }
//!
//! fn find_name(id: u64) -> ValueOutcome<String> {
//!     if id == 1 {
//!         success_with("Ada".to_string())
//!     } else {
//!         ValueOutcome::fail(CustomerNotFound { id })
//!     }
//! }
//!
//! fn deactivate(id: u64) -> Outcome {
//!     if id == 1 { success() } else { fail(CustomerNotFound { id }) }
//! }
//!
//! assert_eq!(find_name(1).value().map(String::as_str), Some("Ada"));
//! assert!(deactivate(2).failure_reason().is_some_and(|r| r.is::<CustomerNotFound>()));
//! ```
//!
//! Outcomes are immutable values and are `Send + Sync` whenever the payload is.

pub mod errors;
pub mod outcome;
pub mod pending;
pub mod reason;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::OutcomeError;
pub use outcome::{Outcome, ValueOutcome};
pub use pending::PendingOutcome;
pub use reason::{FailureReason, Reason};

/// Creates a successful [`Outcome`].
pub fn success() -> Outcome {
    Outcome::success()
}

/// Creates a successful [`ValueOutcome`] holding `value`.
pub fn success_with<T>(value: T) -> ValueOutcome<T> {
    ValueOutcome::success(value)
}

/// Creates a failed [`Outcome`] holding `reason`.
///
/// For a failed [`ValueOutcome`], use [`ValueOutcome::fail`].
pub fn fail(reason: impl Into<Reason>) -> Outcome {
    Outcome::fail(reason)
}

/// Stages a [`ValueOutcome<T>`] before the operation knows which branch it takes.
pub fn of_type<T>() -> PendingOutcome<T> {
    PendingOutcome::new()
}

//! Test assertion helpers for [`results`] outcomes.
//!
//! Every helper reads outcomes through the public inspection surface
//! (`is_successful`, `is_failed`, `failure_reason`, `value`) only. Each
//! assertion panics with a descriptive message on mismatch and returns the
//! inspected part on success, so assertions chain naturally:
//!
//! ```
//! use results::ValueOutcome;
//! use results_assertions::{OutcomeAssertions, ValueOutcomeAssertions};
//!
//! results::failure_reason! {
//!     #[message = "rejected: {why}"]
//!     pub struct Rejected {
//!         pub why: String,
//!     }
//! }
//!
//! let ok = ValueOutcome::success(10);
//! ok.assert_successful_with(|v| *v > 5);
//!
//! let failed = ValueOutcome::<i32>::fail(Rejected { why: "limit".into() });
//! let reason = failed.assert_failed_with::<Rejected>();
//! assert_eq!(reason.why, "limit");
//! ```

use std::fmt::Debug;
use std::sync::Once;

use results::{FailureReason, Outcome, Reason, ValueOutcome};

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs. Filtering
/// follows `RUST_LOG` and defaults to `debug`.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        // Another harness may have installed a global subscriber already.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

// ---------------------------------------------------------------------------
// Shared assertions
// ---------------------------------------------------------------------------

mod sealed {
    use results::{Outcome, Reason, ValueOutcome};

    /// Uniform read access to the failure reason of either outcome kind.
    pub trait Inspect {
        fn inspected_reason(&self) -> Option<&Reason>;
    }

    impl Inspect for Outcome {
        fn inspected_reason(&self) -> Option<&Reason> {
            self.failure_reason()
        }
    }

    impl<T> Inspect for ValueOutcome<T> {
        fn inspected_reason(&self) -> Option<&Reason> {
            self.failure_reason()
        }
    }
}

/// Assertions available on every outcome kind.
///
/// Sealed: implemented for [`Outcome`] and [`ValueOutcome`] only. Importing
/// it adds nothing but the `assert_*` methods:
///
/// ```compile_fail
/// use results::Outcome;
/// use results_assertions::OutcomeAssertions;
///
/// let _ = Outcome::success().inspected_reason();
/// ```
pub trait OutcomeAssertions: sealed::Inspect {
    /// Panics unless the outcome is successful.
    #[track_caller]
    fn assert_successful(&self) {
        if let Some(reason) = self.inspected_reason() {
            panic!(
                "expected a successful outcome, but it failed with {} ({reason:?})",
                reason.reason_name()
            );
        }
    }

    /// Panics unless the outcome failed. Returns the reason.
    #[track_caller]
    fn assert_failed(&self) -> &Reason {
        match self.inspected_reason() {
            Some(reason) => reason,
            None => panic!("expected a failed outcome, but it was successful"),
        }
    }

    /// Panics unless the outcome failed with a reason of type `R`. Returns the typed reason.
    #[track_caller]
    fn assert_failed_with<R: FailureReason>(&self) -> &R {
        let reason = self.assert_failed();
        match reason.downcast_ref::<R>() {
            Some(typed) => typed,
            None => panic!(
                "expected failure reason {}, but found {} ({reason:?})",
                std::any::type_name::<R>(),
                reason.reason_name()
            ),
        }
    }

    /// Panics unless the outcome failed with an `R` satisfying `predicate`.
    #[track_caller]
    fn assert_failed_matching<R, P>(&self, predicate: P) -> &R
    where
        R: FailureReason,
        P: FnOnce(&R) -> bool,
    {
        let typed = self.assert_failed_with::<R>();
        assert!(
            predicate(typed),
            "failure reason {typed:?} did not satisfy the predicate"
        );
        typed
    }
}

impl OutcomeAssertions for Outcome {
    #[track_caller]
    fn assert_successful(&self) {
        assert!(
            self.is_successful(),
            "expected a successful outcome, but it failed: {self}"
        );
    }
}

impl<T> OutcomeAssertions for ValueOutcome<T> {
    #[track_caller]
    fn assert_successful(&self) {
        if self.value().is_none() {
            let name = self.failure_reason().map_or("<none>", Reason::reason_name);
            panic!("expected a successful outcome holding a value, but it failed with {name}");
        }
    }
}

// ---------------------------------------------------------------------------
// Value assertions
// ---------------------------------------------------------------------------

/// Assertions on the payload of a [`ValueOutcome`].
pub trait ValueOutcomeAssertions<T> {
    /// Panics unless the outcome succeeded with a value satisfying `predicate`.
    /// Returns the value.
    fn assert_successful_with<P>(&self, predicate: P) -> &T
    where
        P: FnOnce(&T) -> bool,
        T: Debug;

    /// Panics unless the outcome succeeded with a value equal to `expected`.
    fn assert_value_eq(&self, expected: &T) -> &T
    where
        T: Debug + PartialEq;
}

impl<T> ValueOutcomeAssertions<T> for ValueOutcome<T> {
    #[track_caller]
    fn assert_successful_with<P>(&self, predicate: P) -> &T
    where
        P: FnOnce(&T) -> bool,
        T: Debug,
    {
        let Some(value) = self.value() else {
            self.assert_successful();
            panic!("expected a successful outcome holding a value");
        };
        assert!(predicate(value), "value {value:?} did not satisfy the predicate");
        value
    }

    #[track_caller]
    fn assert_value_eq(&self, expected: &T) -> &T
    where
        T: Debug + PartialEq,
    {
        self.assert_successful_with(|value| value == expected)
    }
}

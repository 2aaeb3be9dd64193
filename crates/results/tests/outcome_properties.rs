//! Behavioural properties of outcomes, checked through the public surface only.

use proptest::prelude::*;
use results::{fail, of_type, success, success_with, Outcome, Reason, ValueOutcome};
use results_assertions::{init_test_tracing, OutcomeAssertions, ValueOutcomeAssertions};

results::failure_reason! {
    /// The requested entity does not exist.
    #[message = "not found"]
    struct NotFoundReason;
}

results::failure_reason! {
    /// The operation exceeded its deadline.
    #[message = "timed out after {millis}ms"]
    struct TimeoutReason {
        millis: u64,
    }
}

impl Default for TimeoutReason {
    fn default() -> Self {
        Self { millis: 30_000 }
    }
}

/// Every way to build an outcome, reduced to the four inspection answers.
#[derive(Debug, Clone, Copy)]
enum Construction {
    BareSuccess,
    BareFail,
    BareFailDefault,
    ValueSuccess,
    ValueFail,
    ValueFailDefault,
    StagedSuccess,
    StagedFail,
}

fn construction() -> impl Strategy<Value = Construction> {
    prop_oneof![
        Just(Construction::BareSuccess),
        Just(Construction::BareFail),
        Just(Construction::BareFailDefault),
        Just(Construction::ValueSuccess),
        Just(Construction::ValueFail),
        Just(Construction::ValueFailDefault),
        Just(Construction::StagedSuccess),
        Just(Construction::StagedFail),
    ]
}

/// Returns (is_successful, is_failed, has_reason, has_value) for the constructed outcome.
fn inspect(kind: Construction, value: i64, millis: u64) -> (bool, bool, bool, Option<bool>) {
    fn bare(o: &Outcome) -> (bool, bool, bool, Option<bool>) {
        (o.is_successful(), o.is_failed(), o.failure_reason().is_some(), None)
    }
    fn valued(o: &ValueOutcome<i64>) -> (bool, bool, bool, Option<bool>) {
        (
            o.is_successful(),
            o.is_failed(),
            o.failure_reason().is_some(),
            Some(o.value().is_some()),
        )
    }

    match kind {
        Construction::BareSuccess => bare(&success()),
        Construction::BareFail => bare(&fail(TimeoutReason { millis })),
        Construction::BareFailDefault => bare(&Outcome::fail_default::<NotFoundReason>()),
        Construction::ValueSuccess => valued(&success_with(value)),
        Construction::ValueFail => valued(&ValueOutcome::fail(TimeoutReason { millis })),
        Construction::ValueFailDefault => {
            valued(&ValueOutcome::fail_default::<TimeoutReason>())
        }
        Construction::StagedSuccess => valued(&of_type::<i64>().success(value)),
        Construction::StagedFail => valued(&of_type::<i64>().fail(NotFoundReason)),
    }
}

proptest! {
    /// Exactly one of successful/failed holds, and the reason and value slots agree with it.
    #[test]
    fn every_construction_is_exactly_one_state(
        kind in construction(),
        value in any::<i64>(),
        millis in any::<u64>(),
    ) {
        let (successful, failed, has_reason, has_value) = inspect(kind, value, millis);

        prop_assert_ne!(successful, failed);
        prop_assert_eq!(failed, has_reason);
        if let Some(has_value) = has_value {
            prop_assert_eq!(successful, has_value);
        }
    }

    /// A successful outcome hands back exactly the value it was given.
    #[test]
    fn success_returns_the_given_value(value in ".*") {
        let outcome = success_with(value.clone());

        prop_assert!(outcome.is_successful());
        prop_assert!(!outcome.is_failed());
        prop_assert_eq!(outcome.value(), Some(&value));
        prop_assert!(outcome.failure_reason().is_none());
    }

    /// Staging the outcome type first does not change the final state.
    #[test]
    fn staged_path_matches_direct_construction(value in any::<i64>(), millis in any::<u64>()) {
        let direct = success_with(value);
        let staged = of_type::<i64>().success(value);
        prop_assert_eq!(direct.value(), staged.value());
        prop_assert_eq!(direct.is_successful(), staged.is_successful());

        let reason = Reason::new(TimeoutReason { millis });
        let direct = ValueOutcome::<i64>::fail(reason.clone());
        let staged = of_type::<i64>().fail(reason.clone());
        prop_assert_eq!(direct.is_failed(), staged.is_failed());
        prop_assert_eq!(direct.value(), staged.value());
        prop_assert!(direct.failure_reason().is_some_and(|r| Reason::ptr_eq(r, &reason)));
        prop_assert!(staged.failure_reason().is_some_and(|r| Reason::ptr_eq(r, &reason)));
    }
}

#[test]
fn success_hello_scenario() {
    init_test_tracing();

    let outcome = success_with("hello");

    outcome.assert_value_eq(&"hello");
    assert!(!outcome.is_failed());
    assert!(outcome.failure_reason().is_none());
}

#[test]
fn fail_not_found_scenario() {
    init_test_tracing();

    let outcome = fail(NotFoundReason);

    outcome.assert_failed_with::<NotFoundReason>();
    assert!(!outcome.is_successful());
}

#[test]
fn staged_int_timeout_scenario() {
    init_test_tracing();

    let outcome: ValueOutcome<i32> = of_type::<i32>().fail(TimeoutReason { millis: 250 });

    outcome.assert_failed_matching::<TimeoutReason, _>(|r| r.millis == 250);
    assert!(outcome.value().is_none());
}

#[test]
fn default_reason_uses_the_zero_argument_constructor() {
    let outcome = ValueOutcome::<String>::fail_default::<TimeoutReason>();

    let reason = outcome.assert_failed_with::<TimeoutReason>();
    assert_eq!(reason, &TimeoutReason::default());
    assert_eq!(reason.millis, 30_000);

    Outcome::fail_default::<NotFoundReason>().assert_failed_with::<NotFoundReason>();
}

#[test]
fn outcomes_from_one_reason_instance_share_it() {
    let reason = Reason::new(TimeoutReason { millis: 5 });

    let first = fail(reason.clone());
    let second = ValueOutcome::<u8>::fail(reason.clone());

    assert!(Reason::ptr_eq(first.assert_failed(), &reason));
    assert!(Reason::ptr_eq(second.assert_failed(), &reason));
    assert_eq!(
        first.assert_failed_with::<TimeoutReason>(),
        second.assert_failed_with::<TimeoutReason>()
    );
}

#[test]
fn failures_propagate_through_question_mark() {
    fn load(id: u32) -> ValueOutcome<u32> {
        if id == 0 {
            ValueOutcome::fail(NotFoundReason)
        } else {
            success_with(id * 10)
        }
    }

    fn total(ids: &[u32]) -> Result<u32, Reason> {
        let mut sum = 0;
        for id in ids {
            sum += load(*id).into_result()?;
        }
        Ok(sum)
    }

    assert_eq!(total(&[1, 2]).ok(), Some(30));
    assert!(total(&[1, 0, 2]).err().is_some_and(|r| r.is::<NotFoundReason>()));
}

#[test]
fn outcomes_can_be_shared_across_threads() {
    let outcome = std::sync::Arc::new(success_with(vec![1, 2, 3]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let outcome = std::sync::Arc::clone(&outcome);
            std::thread::spawn(move || outcome.value().map(Vec::len))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().ok().flatten(), Some(3));
    }
}

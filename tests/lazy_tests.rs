#![cfg(feature = "control")]
//! Unit tests for the Lazy cell.
//!
//! Tests cover:
//! - Deferred evaluation and the evaluated/failed/pure queries
//! - Pure caching and impure re-evaluation
//! - result, failure and force on both outcomes
//! - Result normalization for nullary, side-effect and multi-value functions
//! - Iteration over the produced values

use nonstrict::control::{
    EvaluationError, Lazy, Outcome, Results, lazy, lazy_effect, lazy_many, lazy_nullary,
    lazy_nullary_effect, lazy_tupled,
};
use rstest::rstest;
use std::cell::Cell;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
struct NotPositive(i32);

impl fmt::Display for NotPositive {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} is not positive", self.0)
    }
}

impl std::error::Error for NotPositive {}

fn add_two_if_positive(value: i32) -> Result<i32, NotPositive> {
    if value < 1 {
        return Err(NotPositive(value));
    }
    Ok(value + 2)
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn lazy_defers_computation() {
    let computed = Cell::new(false);
    let _cell = lazy(
        |value: i32| {
            computed.set(true);
            Ok::<_, Infallible>(value)
        },
        1,
    );

    assert!(!computed.get());
}

#[rstest]
fn lazy_starts_unevaluated() {
    let cell = lazy(add_two_if_positive, 5);
    assert!(!cell.is_evaluated());
    assert!(!cell.is_failed());
    assert!(!cell.is_success());
    assert!(cell.get().is_none());
}

#[rstest]
#[case(true)]
#[case(false)]
fn lazy_reports_configured_purity(#[case] pure: bool) {
    let cell = lazy(add_two_if_positive, 5).with_purity(pure);
    assert_eq!(cell.is_pure(), pure);
}

#[rstest]
fn lazy_is_pure_by_default() {
    assert!(lazy(add_two_if_positive, 5).is_pure());
    assert!(!lazy(add_two_if_positive, 5).impure().is_pure());
}

// =============================================================================
// evaluate
// =============================================================================

#[rstest]
fn evaluate_happy_path() {
    let cell = lazy(add_two_if_positive, 5);
    assert!(cell.evaluate());
    assert!(cell.is_evaluated());
    assert!(!cell.is_failed());
    assert_eq!(cell.result().as_deref(), Some(&[7][..]));
}

#[rstest]
fn evaluate_sad_path() {
    let cell = lazy(add_two_if_positive, -42);
    assert!(!cell.evaluate());
    assert!(cell.is_evaluated());
    assert!(cell.is_failed());
    assert!(cell.result().is_none());
    assert_eq!(cell.failure().as_deref(), Some(&NotPositive(-42)));
}

#[rstest]
#[case(5, true)]
#[case(1, true)]
#[case(0, false)]
#[case(-42, false)]
fn evaluate_leaves_unevaluated_state_after_one_call(#[case] input: i32, #[case] succeeds: bool) {
    let cell = lazy(add_two_if_positive, input);
    assert_eq!(cell.evaluate(), succeeds);
    assert!(cell.is_evaluated());
    assert_eq!(cell.is_failed(), !succeeds);
}

#[rstest]
fn pure_cell_invokes_function_once() {
    let call_count = Cell::new(0);
    let cell = lazy(
        |value: i32| {
            call_count.set(call_count.get() + 1);
            add_two_if_positive(value)
        },
        5,
    );

    for _ in 0..5 {
        assert!(cell.evaluate());
    }
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn pure_failure_is_not_retried() {
    let call_count = Cell::new(0);
    let cell = lazy(
        |value: i32| {
            call_count.set(call_count.get() + 1);
            add_two_if_positive(value)
        },
        -1,
    );

    assert!(!cell.evaluate());
    assert!(!cell.evaluate());
    assert!(cell.failure().is_some());
    assert!(cell.force().is_err());
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn impure_cell_invokes_function_every_time() {
    let counter = Cell::new(0);
    let cell = lazy_nullary_effect(|| {
        counter.set(counter.get() + 1);
        Ok::<_, Infallible>(())
    })
    .impure();

    cell.evaluate();
    cell.evaluate();
    cell.evaluate();
    assert_eq!(counter.get(), 3);
}

#[rstest]
fn impure_cell_overwrites_previous_outcome() {
    let attempt = Cell::new(0);
    let flaky = lazy_nullary(|| {
        attempt.set(attempt.get() + 1);
        if attempt.get() % 2 == 0 {
            Err(format!("attempt {} failed", attempt.get()))
        } else {
            Ok(attempt.get())
        }
    })
    .impure();

    assert!(flaky.evaluate());
    assert_eq!(flaky.result().as_deref(), Some(&[1][..]));

    assert!(!flaky.evaluate());
    assert!(flaky.is_failed());
    assert_eq!(
        flaky.failure().as_deref(),
        Some(&"attempt 2 failed".to_string())
    );

    assert!(flaky.evaluate());
    assert!(!flaky.is_failed());
    assert_eq!(flaky.result().as_deref(), Some(&[3][..]));
}

// =============================================================================
// result / failure
// =============================================================================

#[rstest]
fn result_evaluates_unevaluated_cell() {
    let cell = lazy(add_two_if_positive, 40);
    assert_eq!(cell.result().as_deref(), Some(&[42][..]));
    assert!(cell.is_evaluated());
}

#[rstest]
fn failure_evaluates_unevaluated_cell() {
    let cell = lazy(add_two_if_positive, 0);
    assert_eq!(cell.failure().as_deref(), Some(&NotPositive(0)));
    assert!(cell.is_failed());
}

#[rstest]
fn failure_is_none_on_success() {
    let cell = lazy(add_two_if_positive, 3);
    assert!(cell.failure().is_none());
}

#[rstest]
fn failure_returns_the_same_captured_error() {
    let cell = lazy(add_two_if_positive, -7);
    let first = cell.failure();
    let second = cell.failure();
    assert!(matches!((first, second), (Some(a), Some(b)) if Rc::ptr_eq(&a, &b)));
}

#[rstest]
fn result_does_not_re_run_impure_cell() {
    let call_count = Cell::new(0);
    let cell = lazy_nullary(|| {
        call_count.set(call_count.get() + 1);
        Ok::<_, Infallible>(call_count.get())
    })
    .impure();

    assert_eq!(cell.result().as_deref(), Some(&[1][..]));
    assert_eq!(cell.result().as_deref(), Some(&[1][..]));
    assert_eq!(call_count.get(), 1);
}

// =============================================================================
// force
// =============================================================================

#[rstest]
fn force_returns_cached_values_without_re_invoking() {
    let call_count = Cell::new(0);
    let cell = lazy(
        |value: i32| {
            call_count.set(call_count.get() + 1);
            add_two_if_positive(value)
        },
        10,
    );

    assert!(cell.evaluate());
    assert_eq!(*cell.force().unwrap(), [12]);
    assert_eq!(*cell.force().unwrap(), [12]);
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn force_wraps_failure() {
    let cell = lazy(add_two_if_positive, -3);
    let error: EvaluationError<NotPositive> = cell.force().unwrap_err();

    assert_eq!(error.inner(), &NotPositive(-3));
    assert_eq!(
        error.to_string(),
        "lazy evaluation failed: -3 is not positive"
    );
}

#[rstest]
fn force_error_source_is_wrapped_failure() {
    use std::error::Error;

    let cell = lazy(add_two_if_positive, -3);
    let error = cell.force().unwrap_err();
    let source = error.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("-3 is not positive"));
}

#[rstest]
fn force_error_shares_failure_with_query() {
    let cell = lazy(add_two_if_positive, -3);
    let error = cell.force().unwrap_err();
    let captured = cell.failure().unwrap();
    assert!(Rc::ptr_eq(&error.into_inner(), &captured));
}

// =============================================================================
// Result normalization
// =============================================================================

#[rstest]
fn nullary_function_yields_single_value() {
    let cell = lazy_nullary(|| Ok::<_, Infallible>("ready"));
    assert_eq!(cell.result().as_deref(), Some(&["ready"][..]));
}

#[rstest]
fn effect_function_yields_no_values() {
    let seen = Cell::new(0);
    let cell = lazy_effect(
        |value: i32| {
            seen.set(value);
            Ok::<_, Infallible>(())
        },
        9,
    );

    assert!(cell.evaluate());
    assert_eq!(seen.get(), 9);
    assert_eq!(cell.result().map(|values| values.len()), Some(0));
}

#[rstest]
fn failing_effect_is_captured() {
    let cell = lazy_effect(
        |path: &str| {
            if path.starts_with('/') {
                Ok(())
            } else {
                Err(format!("{path} is not absolute"))
            }
        },
        "relative/file",
    );

    assert!(!cell.evaluate());
    assert_eq!(
        cell.failure().as_deref(),
        Some(&"relative/file is not absolute".to_string())
    );
}

#[rstest]
fn many_function_yields_values_in_order() {
    let cell = lazy_many(
        |limit: u32| Ok::<_, Infallible>((1..=limit).map(|value| value * value)),
        4,
    );
    assert_eq!(cell.result().as_deref(), Some(&[1, 4, 9, 16][..]));
}

#[rstest]
fn many_function_can_yield_nothing() {
    let cell = lazy_many(|_: ()| Ok::<_, Infallible>(Vec::<i32>::new()), ());
    assert!(cell.evaluate());
    assert_eq!(cell.result().map(|values| values.is_empty()), Some(true));
}

#[rstest]
fn tupled_function_receives_arguments_in_order() {
    let cell = lazy_tupled(
        |first: &str, second: &str, third: &str| {
            Ok::<_, Infallible>(format!("{first}{second}{third}"))
        },
        ("a", "b", "c"),
    );
    assert_eq!(cell.result().as_deref(), Some(&["abc".to_string()][..]));
}

#[rstest]
fn tupled_nullary_takes_unit_bundle() {
    let cell = lazy_tupled(|| Ok::<_, Infallible>(0_u8), ());
    assert_eq!(cell.result().as_deref(), Some(&[0][..]));
}

#[rstest]
fn raw_constructor_keeps_returned_values() {
    let cell = Lazy::new(
        |text: &str| -> Result<Results<char>, Infallible> { Ok(text.chars().collect()) },
        "abc",
    );
    assert_eq!(cell.result().as_deref(), Some(&['a', 'b', 'c'][..]));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn iteration_evaluates_on_first_next() {
    let cell = lazy(add_two_if_positive, 1);
    let mut values = cell.iter();
    assert!(!cell.is_evaluated());

    assert_eq!(values.next(), Some(3));
    assert!(cell.is_evaluated());
    assert_eq!(values.next(), None);
}

#[rstest]
fn iteration_is_restartable() {
    let cell = lazy_many(
        |text: String| Ok::<_, Infallible>(text.into_bytes()),
        "xyz".to_string(),
    );
    let first: Vec<u8> = cell.iter().collect();
    let second: Vec<u8> = (&cell).into_iter().collect();
    assert_eq!(first, b"xyz");
    assert_eq!(first, second);
}

#[rstest]
fn iteration_keeps_values_of_one_evaluation() {
    let round = Cell::new(0);
    let cell = lazy_many(
        |()| {
            round.set(round.get() + 1);
            Ok::<_, Infallible>([round.get() * 10, round.get() * 10 + 1])
        },
        (),
    )
    .impure();

    let mut values = cell.iter();
    assert_eq!(values.next(), Some(10));

    assert!(cell.evaluate());
    assert_eq!(round.get(), 2);

    assert_eq!(values.next(), Some(11));
    assert_eq!(values.next(), None);
    assert_eq!(cell.iter().collect::<Vec<_>>(), vec![20, 21]);
}

#[rstest]
fn evaluate_pure_cell_while_result_is_borrowed() {
    let cell = lazy(add_two_if_positive, 5);
    let values = cell.result();

    assert!(cell.evaluate());
    assert_eq!(values.as_deref(), Some(&[7][..]));
}

#[rstest]
fn iteration_over_failed_cell_is_empty() {
    let cell = lazy(add_two_if_positive, -1);
    assert_eq!(cell.iter().count(), 0);
    assert!(cell.is_failed());
}

#[rstest]
fn for_loop_over_cell_reference() {
    let cell = lazy_many(|count: usize| Ok::<_, Infallible>(vec!["tick"; count]), 3);
    let mut seen = 0;
    for value in &cell {
        assert_eq!(value, "tick");
        seen += 1;
    }
    assert_eq!(seen, 3);
}

// =============================================================================
// into_outcome / get
// =============================================================================

#[rstest]
fn into_outcome_of_failed_cell() {
    let cell = lazy(add_two_if_positive, -5);
    cell.evaluate();
    let outcome = cell.into_outcome();
    assert!(outcome.is_failure());
    assert_eq!(outcome.failure().as_deref(), Some(&NotPositive(-5)));
}

#[rstest]
fn into_outcome_reuses_cached_values() {
    let call_count = Cell::new(0);
    let cell = lazy_nullary(|| {
        call_count.set(call_count.get() + 1);
        Ok::<_, Infallible>(call_count.get())
    });
    cell.evaluate();
    let outcome: Outcome<i32, Rc<Infallible>> = cell.into_outcome();
    assert_eq!(outcome.success_ref(), Some(&[1][..]));
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn get_does_not_evaluate() {
    let cell = lazy(add_two_if_positive, 2);
    assert!(cell.get().is_none());
    assert!(!cell.is_evaluated());

    cell.evaluate();
    let outcome = cell.get().unwrap();
    assert_eq!(outcome.success_ref(), Some(&[4][..]));
}

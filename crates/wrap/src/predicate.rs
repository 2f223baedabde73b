//! Adapters for fallible tests.
//!
//! Adapted predicates borrow their inputs, so they can be handed straight to
//! `Iterator::filter`.

use crate::policy::{substituted, triage};
use safecall_core::Failure;
use std::fmt::Debug;

/// Adapt `op` into a predicate that logs failures and answers `false`
pub fn predicate<T, E, F>(op: F) -> impl Fn(&T) -> bool
where
    T: Debug + ?Sized,
    F: Fn(&T) -> Result<bool, E>,
    E: Into<Failure>,
{
    predicate_or(op, false)
}

/// Adapt `op` into a predicate that logs failures and answers `default`
pub fn predicate_or<T, E, F>(op: F, default: bool) -> impl Fn(&T) -> bool
where
    T: Debug + ?Sized,
    F: Fn(&T) -> Result<bool, E>,
    E: Into<Failure>,
{
    move |input: &T| match op(input) {
        Ok(verdict) => verdict,
        Err(error) => {
            let failure = triage(error);
            substituted("predicate", format_args!("{input:?}"), &default, &failure);
            default
        }
    }
}

pub fn predicate_or_else<T, E, F, H>(op: F, handler: H) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> Result<bool, E>,
    E: Into<Failure>,
    H: Fn(&T, Failure) -> bool,
{
    move |input: &T| match op(input) {
        Ok(verdict) => verdict,
        Err(error) => handler(input, triage(error)),
    }
}

pub fn bi_predicate<T, U, E, F>(op: F) -> impl Fn(&T, &U) -> bool
where
    T: Debug + ?Sized,
    U: Debug + ?Sized,
    F: Fn(&T, &U) -> Result<bool, E>,
    E: Into<Failure>,
{
    bi_predicate_or(op, false)
}

pub fn bi_predicate_or<T, U, E, F>(op: F, default: bool) -> impl Fn(&T, &U) -> bool
where
    T: Debug + ?Sized,
    U: Debug + ?Sized,
    F: Fn(&T, &U) -> Result<bool, E>,
    E: Into<Failure>,
{
    move |first: &T, second: &U| match op(first, second) {
        Ok(verdict) => verdict,
        Err(error) => {
            let failure = triage(error);
            substituted(
                "bi-predicate",
                format_args!("({first:?}, {second:?})"),
                &default,
                &failure,
            );
            default
        }
    }
}

pub fn bi_predicate_or_else<T, U, E, F, H>(op: F, handler: H) -> impl Fn(&T, &U) -> bool
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T, &U) -> Result<bool, E>,
    E: Into<Failure>,
    H: Fn(&T, &U, Failure) -> bool,
{
    move |first: &T, second: &U| match op(first, second) {
        Ok(verdict) => verdict,
        Err(error) => handler(first, second, triage(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecall_core::{interrupt, Interrupted};
    use safecall_utils::{log, MemorySink};
    use std::num::ParseFloatError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn positive(text: &str) -> Result<bool, ParseFloatError> {
        Ok(text.parse::<f64>()? > 0.0)
    }

    #[test]
    fn test_predicate_answers_false_on_failure() {
        let sink = Arc::new(MemorySink::new());
        let is_positive = predicate(positive);

        let kept: Vec<&str> = log::with_sink(sink.clone(), || {
            ["1.5", "abc", "-2"]
                .into_iter()
                .filter(|text| is_positive(*text))
                .collect()
        });

        assert_eq!(kept, vec!["1.5"]);
        assert_eq!(sink.messages(), vec!["predicate failed for \"abc\", returning false"]);
    }

    #[test]
    fn test_predicate_or_true_default() {
        let sink = Arc::new(MemorySink::new());
        let is_positive = predicate_or(positive, true);

        log::with_sink(sink.clone(), || {
            assert!(is_positive("abc"));
            assert!(is_positive("5"));
            assert!(!is_positive("-5"));
        });

        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_predicate_or_else_decides_per_input() {
        let lenient = predicate_or_else(positive, |input: &str, _| input.trim().is_empty());

        assert!(lenient("  "));
        assert!(!lenient("abc"));
        assert!(lenient("3"));
    }

    #[test]
    fn test_cancelled_predicate_restores_interrupt() {
        let flag_seen_by_sink = Arc::new(AtomicBool::new(false));
        let seen = Arc::clone(&flag_seen_by_sink);
        let recorder = move |_: &str, _: Option<&Failure>| {
            seen.store(interrupt::is_interrupted(), Ordering::SeqCst);
        };
        let guard = predicate_or(|_: &i32| Err::<bool, _>(Interrupted), true);

        assert!(log::with_sink(Arc::new(recorder), || guard(&1)));
        assert!(flag_seen_by_sink.load(Ordering::SeqCst));
        assert!(interrupt::take_interrupted());
    }

    #[test]
    fn test_bi_predicate_family() {
        let within = |value: &str, limit: &f64| -> Result<bool, ParseFloatError> {
            Ok(value.parse::<f64>()? <= *limit)
        };

        let sink = Arc::new(MemorySink::new());
        log::with_sink(sink.clone(), || {
            let strict = bi_predicate(within);
            assert!(strict("2", &3.0));
            assert!(!strict("four", &3.0));

            let lenient = bi_predicate_or(within, true);
            assert!(lenient("four", &3.0));
        });
        assert_eq!(
            sink.messages(),
            vec![
                "bi-predicate failed for (\"four\", 3.0), returning false",
                "bi-predicate failed for (\"four\", 3.0), returning true",
            ]
        );

        let by_limit = bi_predicate_or_else(within, |_, limit: &f64, _| *limit > 10.0);
        assert!(by_limit("x", &11.0));
        assert!(!by_limit("x", &1.0));
    }
}

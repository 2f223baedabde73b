//! Adapters for operations of one and two inputs.
//!
//! The wrapped operation borrows its inputs; the adapted function takes them
//! by value so it slots into `Iterator::map` and hands them to the failure
//! handler afterwards.

use crate::policy::{substituted, triage};
use safecall_core::{Either, Failure};
use std::fmt::Debug;

/// Adapt `op` into a function returning an [`Either`].
///
/// Every `Ok` becomes a present success, `Ok(None)` included. For an `op`
/// returning `Result<Option<R>, E>`, call [`Either::flatten`] on the outcome
/// to turn `None` into a null success.
///
/// ```
/// use safecall_wrap::{function, Either};
///
/// let lookup = function(|key: &&str| {
///     Ok::<_, std::num::ParseIntError>((!key.is_empty()).then(|| key.len()))
/// });
///
/// assert!(lookup("").is_present());
/// assert_eq!(lookup("").flatten(), Either::EMPTY);
/// assert_eq!(lookup("abc").flatten(), Either::success(3));
/// ```
pub fn function<T, R, E, F>(op: F) -> impl Fn(T) -> Either<R>
where
    F: Fn(&T) -> Result<R, E>,
    E: Into<Failure>,
{
    move |input: T| match op(&input) {
        Ok(value) => Either::success(value),
        Err(error) => Either::failure(triage(error)),
    }
}

/// Adapt `op` into a function returning `default` on failure
pub fn function_or<T, R, E, F>(op: F, default: R) -> impl Fn(T) -> R
where
    F: Fn(&T) -> Result<R, E>,
    E: Into<Failure>,
    T: Debug,
    R: Clone + Debug,
{
    move |input: T| match op(&input) {
        Ok(value) => value,
        Err(error) => {
            let failure = triage(error);
            substituted("function", format_args!("{input:?}"), &default, &failure);
            default.clone()
        }
    }
}

/// Adapt `op` into a function whose failures go to `handler` together with
/// the input that caused them
pub fn function_or_else<T, R, E, F, H>(op: F, handler: H) -> impl Fn(T) -> R
where
    F: Fn(&T) -> Result<R, E>,
    E: Into<Failure>,
    H: Fn(T, Failure) -> R,
{
    move |input: T| {
        let outcome = op(&input);
        match outcome {
            Ok(value) => value,
            Err(error) => handler(input, triage(error)),
        }
    }
}

/// Two-input form of [`function`]; `Ok(None)` is likewise a present success
pub fn bi_function<T, U, R, E, F>(op: F) -> impl Fn(T, U) -> Either<R>
where
    F: Fn(&T, &U) -> Result<R, E>,
    E: Into<Failure>,
{
    move |first: T, second: U| match op(&first, &second) {
        Ok(value) => Either::success(value),
        Err(error) => Either::failure(triage(error)),
    }
}

pub fn bi_function_or<T, U, R, E, F>(op: F, default: R) -> impl Fn(T, U) -> R
where
    F: Fn(&T, &U) -> Result<R, E>,
    E: Into<Failure>,
    T: Debug,
    U: Debug,
    R: Clone + Debug,
{
    move |first: T, second: U| match op(&first, &second) {
        Ok(value) => value,
        Err(error) => {
            let failure = triage(error);
            substituted(
                "bi-function",
                format_args!("({first:?}, {second:?})"),
                &default,
                &failure,
            );
            default.clone()
        }
    }
}

pub fn bi_function_or_else<T, U, R, E, F, H>(op: F, handler: H) -> impl Fn(T, U) -> R
where
    F: Fn(&T, &U) -> Result<R, E>,
    E: Into<Failure>,
    H: Fn(T, U, Failure) -> R,
{
    move |first: T, second: U| {
        let outcome = op(&first, &second);
        match outcome {
            Ok(value) => value,
            Err(error) => handler(first, second, triage(error)),
        }
    }
}

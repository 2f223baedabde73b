//! Adapters for operations that take no input

use crate::policy::{handle_failure, substituted, triage};
use safecall_core::{Either, Failure};
use std::any::type_name;
use std::fmt::Debug;

/// Run `op` once and capture its outcome.
///
/// `Ok(None)` is a present success; use [`Either::flatten`] for a null one.
pub fn call<V, E>(op: impl FnOnce() -> Result<V, E>) -> Either<V>
where
    E: Into<Failure>,
{
    match op() {
        Ok(value) => Either::success(value),
        Err(error) => Either::failure(triage(error)),
    }
}

/// Run `op` once, logging a failure instead of returning it.
///
/// Returns whether `op` succeeded.
pub fn run<E, F>(op: F) -> bool
where
    F: FnOnce() -> Result<(), E>,
    E: Into<Failure>,
{
    match op() {
        Ok(()) => true,
        Err(error) => {
            handle_failure(type_name::<F>(), &error.into());
            false
        }
    }
}

/// Adapt `op` into a runnable whose failures are logged
pub fn runnable<E, F>(op: F) -> impl Fn()
where
    F: Fn() -> Result<(), E>,
    E: Into<Failure>,
{
    move || {
        if let Err(error) = op() {
            handle_failure(type_name::<F>(), &error.into());
        }
    }
}

/// Adapt `op` into a supplier returning an [`Either`].
///
/// As with [`call`], a `None` payload stays present until flattened.
pub fn callable<V, E, F>(op: F) -> impl Fn() -> Either<V>
where
    F: Fn() -> Result<V, E>,
    E: Into<Failure>,
{
    move || call(&op)
}

/// Adapt `op` into a supplier returning `default` on failure
pub fn callable_or<V, E, F>(op: F, default: V) -> impl Fn() -> V
where
    F: Fn() -> Result<V, E>,
    E: Into<Failure>,
    V: Clone + Debug,
{
    move || match op() {
        Ok(value) => value,
        Err(error) => {
            let failure = triage(error);
            substituted("callable", format_args!("()"), &default, &failure);
            default.clone()
        }
    }
}

/// Adapt `op` into a supplier whose failures go to `handler`
pub fn callable_or_else<V, E, F, H>(op: F, handler: H) -> impl Fn() -> V
where
    F: Fn() -> Result<V, E>,
    E: Into<Failure>,
    H: Fn(Failure) -> V,
{
    move || match op() {
        Ok(value) => value,
        Err(error) => handler(triage(error)),
    }
}

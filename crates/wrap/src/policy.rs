//! Failure triage shared by every adapter.
//!
//! Whatever the policy, an adapter first re-raises fatal failures and puts
//! back the interrupt flag for cancelled ones. Only then does it substitute a
//! default, call a handler or log.

use safecall_core::{interrupt, Failure};
use safecall_utils::log;
use std::fmt;

/// Unwind if `failure` is fatal.
///
/// The panic payload is the failure itself, so a `catch_unwind` further up
/// can downcast it back to `Failure` and inspect it.
pub fn throw_if_fatal(failure: &Failure) {
    if failure.is_fatal() {
        std::panic::panic_any(failure.clone());
    }
}

/// Set this thread's interrupt flag again if `failure` is a cancellation
pub fn restore_interrupt(failure: &Failure) -> bool {
    interrupt::restore_if_cancelled(failure)
}

/// Convert an operation's error and apply the checks every policy shares
pub fn triage(error: impl Into<Failure>) -> Failure {
    let failure = error.into();
    throw_if_fatal(&failure);
    restore_interrupt(&failure);
    failure
}

/// Default handling for failures nobody else claimed: re-raise fatal ones,
/// log the rest as warnings naming `origin`.
pub fn handle_failure(origin: &str, failure: &Failure) {
    throw_if_fatal(failure);
    restore_interrupt(failure);
    log::warn(&format!("failure in {origin}"), Some(failure));
}

/// Drop a non-fatal failure without a trace
pub fn silent_ignore(failure: &Failure) {
    throw_if_fatal(failure);
    restore_interrupt(failure);
}

/// Drop a non-fatal failure after logging it
pub fn log_warn(failure: &Failure) {
    throw_if_fatal(failure);
    restore_interrupt(failure);
    log::warn("failure ignored", Some(failure));
}

/// Log that `default` replaced the result of an adapter of type `adapter`
pub(crate) fn substituted(
    adapter: &str,
    inputs: fmt::Arguments<'_>,
    default: &dyn fmt::Debug,
    failure: &Failure,
) {
    log::warn(
        &format!("{adapter} failed for {inputs}, returning {default:?}"),
        Some(failure),
    );
}

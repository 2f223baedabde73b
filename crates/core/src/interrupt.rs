//! Per-thread cooperative cancellation flag.
//!
//! Rust threads carry no interrupt status of their own, so long-running
//! operations that want to be cancellable poll this flag instead. When a
//! wrapped operation gives up with a cancellation failure and the adapter
//! swallows it, the adapter sets the flag again so callers further up the
//! stack still see that the thread was asked to stop.

use crate::failure::Failure;
use std::cell::Cell;

thread_local! {
    static INTERRUPTED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the current thread as interrupted
pub fn interrupt() {
    INTERRUPTED.with(|flag| flag.set(true));
}

/// Whether the current thread is marked as interrupted
pub fn is_interrupted() -> bool {
    INTERRUPTED.with(Cell::get)
}

/// Read and clear the current thread's interrupt flag
pub fn take_interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.replace(false))
}

/// Set the flag again if `failure` is a cancellation.
///
/// Returns whether the flag was set.
pub fn restore_if_cancelled(failure: &Failure) -> bool {
    if failure.is_cancelled() {
        interrupt();
        true
    } else {
        false
    }
}

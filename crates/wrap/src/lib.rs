//! Adapters that turn fallible closures into non-failing ones.
//!
//! Each family comes in three policies:
//!
//! - `function(op)` captures the outcome in an [`Either`],
//! - `function_or(op, default)` substitutes `default` and logs a warning,
//! - `function_or_else(op, handler)` hands the failure to `handler`.
//!
//! Predicates have no `Either` form; `predicate(op)` answers `false` on
//! failure. Under every policy fatal failures unwind with the [`Failure`] as
//! panic payload, and cancelled ones set the thread's interrupt flag again
//! before anything else happens.
//!
//! ```
//! use safecall_wrap::function;
//!
//! let parsed: Vec<_> = ["4", "four"]
//!     .into_iter()
//!     .map(function(|s: &&str| s.parse::<u8>()))
//!     .collect();
//!
//! assert!(parsed[0].is_success());
//! assert!(parsed[1].is_failure());
//! ```

mod callable;
mod function;
pub mod policy;
mod predicate;
mod safe;

pub use callable::{call, callable, callable_or, callable_or_else, run, runnable};
pub use function::{
    bi_function, bi_function_or, bi_function_or_else, function, function_or, function_or_else,
};
pub use predicate::{
    bi_predicate, bi_predicate_or, bi_predicate_or_else, predicate, predicate_or,
    predicate_or_else,
};
pub use safe::{SafeCallable, SafeRunnable};

pub use safecall_core::{Either, Failure, FailureKind};

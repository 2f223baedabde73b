//! Core types and errors for `safecall`.
//!
//! This crate holds the value types every other safecall crate passes around.
//!
//! ## Key Components
//!
//! - **`either`**: [`Either`], an immutable container holding a value, a null
//!   success, or a captured failure, built to flow through iterator pipelines.
//! - **`failure`**: [`Failure`], a shared captured error compared by identity,
//!   and [`FailureKind`], the fatal / cancelled / ordinary classification the
//!   adapters act on.
//! - **`errors`**: the [`Error`] enum and [`Result`] alias returned when an
//!   `Either` is asked for a value it does not have.
//! - **`interrupt`**: the per-thread cooperative cancellation flag.
//! - **`functional`**: fixed-arity [`Predicate`](functional::Predicate)s and the
//!   runtime-arity [`GenericPredicate`](functional::GenericPredicate).

pub mod either;
pub mod errors;
pub mod failure;
pub mod functional;
pub mod interrupt;

pub use self::{
    either::Either,
    errors::{Error, Interrupted, Result, ResultExt},
    failure::{Failure, FailureKind},
};

//! Functional programming utilities for safecall
//!
//! Predicates over a fixed number of arguments are plain closures tested
//! through [`Predicate`]; [`GenericPredicate`] covers the rare case where the
//! number of arguments is only known at runtime.

pub mod generic;
pub mod predicate;

pub use generic::GenericPredicate;
pub use predicate::{And, Not, Or, Predicate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::generic::GenericPredicate;
    pub use super::predicate::Predicate;
}

//! Core error type definitions

use crate::failure::Failure;

/// Result type alias for safecall operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for safecall operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value was requested from an `Either` that holds a failure
    InvalidState {
        #[source]
        source: Failure,
    },

    /// A value was requested from a null success
    NotFound,

    /// A generic predicate was called with the wrong number of arguments
    Arity { expected: usize, actual: usize },

    /// Configuration errors
    Configuration { message: String },
}

/// Signals that an operation gave up because the current thread was interrupted.
///
/// Failures built from this error are classified as cancellations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, thiserror::Error)]
#[error("operation interrupted")]
pub struct Interrupted;

/// Plain-text error behind [`Failure::msg`].
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct Message(pub(crate) String);

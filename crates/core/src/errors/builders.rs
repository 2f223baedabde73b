//! Builder methods for creating errors with context

use super::types::Error;
use crate::failure::Failure;

impl Error {
    /// Create an invalid state error carrying the captured failure as its source
    #[must_use]
    pub fn invalid_state(source: impl Into<Failure>) -> Self {
        Error::InvalidState {
            source: source.into(),
        }
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found() -> Self {
        Error::NotFound
    }

    /// Create an arity mismatch error
    #[must_use]
    pub fn arity(expected: usize, actual: usize) -> Self {
        Error::Arity { expected, actual }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The captured failure, if this error wraps one
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Error::InvalidState { source } => Some(source),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_state_keeps_failure_as_source() {
        let failure = Failure::msg("disk on fire");
        let error = Error::invalid_state(failure.clone());

        assert_eq!(error.to_string(), "failure instead of value: disk on fire");
        assert!(Failure::ptr_eq(error.failure().unwrap(), &failure));

        let source = error.source().expect("source should be set");
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::not_found().to_string(), "no value present");
        assert_eq!(
            Error::arity(1, 3).to_string(),
            "predicate expects 1 argument, got 3"
        );
        assert_eq!(
            Error::arity(2, 0).to_string(),
            "predicate expects 2 arguments, got 0"
        );
        assert_eq!(
            Error::configuration("bad backend").to_string(),
            "configuration error: bad backend"
        );
        assert!(Error::not_found().is_not_found());
    }
}

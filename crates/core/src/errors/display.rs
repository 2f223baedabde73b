//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState { source } => {
                write!(f, "failure instead of value: {source}")
            }
            Error::NotFound => write!(f, "no value present"),
            Error::Arity { expected, actual } => {
                let noun = if *expected == 1 { "argument" } else { "arguments" };
                write!(f, "predicate expects {expected} {noun}, got {actual}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}

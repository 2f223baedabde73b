use super::{Either, State};
use std::fmt;

impl<T: fmt::Display> fmt::Display for Either<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => write!(f, "Either({value})"),
            State::Null => f.write_str("Either.Empty"),
            State::Failure(failure) => write!(f, "Either.Failure({failure})"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Either<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => write!(f, "Either({value:?})"),
            State::Null => f.write_str("Either.Empty"),
            State::Failure(failure) => write!(f, "Either.Failure({failure:?})"),
        }
    }
}

//! `Either`: the outcome of an operation that may produce a value, produce
//! nothing, or fail.
//!
//! Unlike `Result<Option<T>, E>`, an `Either` is meant to flow through iterator
//! pipelines untouched and be inspected at the end: query it with
//! [`Either::is_present`] and friends, react with the chainable `if_*`
//! callbacks, or surface the failure on demand with [`Either::call`] and the
//! `throw_if_*` family.
//!
//! ```
//! use safecall_core::{Either, Failure};
//!
//! let parsed: Vec<Either<i32>> = ["1", "x", "3"]
//!     .iter()
//!     .map(|s| s.parse::<i32>().map_err(Failure::from).into())
//!     .collect();
//!
//! let sum: i32 = parsed.iter().flat_map(Either::iter).sum();
//! assert_eq!(sum, 4);
//! assert_eq!(parsed.iter().filter(|e| e.is_failure()).count(), 1);
//! ```

mod cmp;
mod convert;
mod fmt;

use crate::errors::{Error, Result};
use crate::failure::Failure;

/// An immutable value-or-null-or-failure container.
#[derive(Clone)]
pub struct Either<T> {
    state: State<T>,
}

#[derive(Clone)]
enum State<T> {
    Value(T),
    Null,
    Failure(Failure),
}

impl<T> Either<T> {
    /// The canonical null success
    pub const EMPTY: Self = Self { state: State::Null };

    /// A success holding `value`
    pub fn success(value: T) -> Self {
        Self {
            state: State::Value(value),
        }
    }

    /// A success whose payload may be absent
    pub fn success_opt(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self::EMPTY,
        }
    }

    /// The null success, equal to [`Either::EMPTY`]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// A failure holding the captured error
    pub fn failure(error: impl Into<Failure>) -> Self {
        Self {
            state: State::Failure(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        !self.is_failure()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Success with a value
    pub fn is_present(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Failure, or success without a value
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Success without a value
    pub fn is_null(&self) -> bool {
        matches!(self.state, State::Null)
    }

    /// The present value, if any
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The captured failure, if any
    pub fn error(&self) -> Option<&Failure> {
        match &self.state {
            State::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Both slots at once; at most one is `Some`
    pub fn tuple(&self) -> (Option<&T>, Option<&Failure>) {
        (self.value(), self.error())
    }

    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_error(self) -> Option<Failure> {
        match self.state {
            State::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Re-raise the captured failure, or return the possibly absent value.
    ///
    /// The returned failure is the very one this `Either` was built with.
    pub fn call(&self) -> std::result::Result<Option<&T>, Failure> {
        match &self.state {
            State::Value(value) => Ok(Some(value)),
            State::Null => Ok(None),
            State::Failure(failure) => Err(failure.clone()),
        }
    }

    /// Owning variant of [`Either::call`]
    pub fn into_result(self) -> std::result::Result<Option<T>, Failure> {
        match self.state {
            State::Value(value) => Ok(Some(value)),
            State::Null => Ok(None),
            State::Failure(failure) => Err(failure),
        }
    }

    /// The present value, or an error saying why there is none
    pub fn get(&self) -> Result<&T> {
        match &self.state {
            State::Value(value) => Ok(value),
            State::Null => Err(Error::not_found()),
            State::Failure(failure) => Err(Error::invalid_state(failure.clone())),
        }
    }

    pub fn throw_if_failure(&self) -> Result<&Self> {
        match &self.state {
            State::Failure(failure) => Err(Error::invalid_state(failure.clone())),
            _ => Ok(self),
        }
    }

    pub fn throw_if_empty(&self) -> Result<&Self> {
        self.get().map(|_| self)
    }

    pub fn throw_if_null(&self) -> Result<&Self> {
        if self.is_null() {
            Err(Error::not_found())
        } else {
            Ok(self)
        }
    }

    pub fn if_present(&self, action: impl FnOnce(&T)) -> &Self {
        if let State::Value(value) = &self.state {
            action(value);
        }
        self
    }

    pub fn if_null(&self, action: impl FnOnce()) -> &Self {
        if self.is_null() {
            action();
        }
        self
    }

    /// Runs for failures and null successes; the failure is `None` for the latter
    pub fn if_empty(&self, action: impl FnOnce(Option<&Failure>)) -> &Self {
        if self.is_empty() {
            action(self.error());
        }
        self
    }

    /// Runs for every success; the value is `None` for a null success
    pub fn if_success(&self, action: impl FnOnce(Option<&T>)) -> &Self {
        if self.is_success() {
            action(self.value());
        }
        self
    }

    pub fn if_failure(&self, action: impl FnOnce(&Failure)) -> &Self {
        if let State::Failure(failure) = &self.state {
            action(failure);
        }
        self
    }

    /// Hand both slots to `consumer`
    pub fn consume(&self, consumer: impl FnOnce(Option<&T>, Option<&Failure>)) {
        consumer(self.value(), self.error());
    }

    /// Reduce both slots to a single result
    pub fn fold<R>(&self, f: impl FnOnce(Option<&T>, Option<&Failure>) -> R) -> R {
        f(self.value(), self.error())
    }

    /// The success payload, or `other` for a failure
    pub fn success_or(self, other: Option<T>) -> Option<T> {
        match self.state {
            State::Value(value) => Some(value),
            State::Null => None,
            State::Failure(_) => other,
        }
    }

    /// Transform a present value, keeping null and failure as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Either<U> {
        let state = match self.state {
            State::Value(value) => State::Value(f(value)),
            State::Null => State::Null,
            State::Failure(failure) => State::Failure(failure),
        };
        Either { state }
    }

    pub fn as_ref(&self) -> Either<&T> {
        let state = match &self.state {
            State::Value(value) => State::Value(value),
            State::Null => State::Null,
            State::Failure(failure) => State::Failure(failure.clone()),
        };
        Either { state }
    }

    /// Zero elements for a failure or null success, the value otherwise.
    ///
    /// Every call starts a fresh iterator.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }

    /// One element per success (`None` for null), nothing for a failure
    pub fn success_iter(&self) -> std::option::IntoIter<Option<&T>> {
        match &self.state {
            State::Failure(_) => None.into_iter(),
            _ => Some(self.value()).into_iter(),
        }
    }
}

impl<T> Either<Option<T>> {
    /// Treat a success holding `None` as a null success
    pub fn flatten(self) -> Either<T> {
        let state = match self.state {
            State::Value(Some(value)) => State::Value(value),
            State::Value(None) | State::Null => State::Null,
            State::Failure(failure) => State::Failure(failure),
        };
        Either { state }
    }
}

impl<T> Default for Either<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

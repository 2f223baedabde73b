//! Equality and hashing for `Either`.
//!
//! Failures compare by identity. Besides `Either == Either`, an `Either` can be
//! compared with the bare failure it holds, with an `Option` of its payload,
//! and with a bare primitive payload.

use super::{Either, State};
use crate::failure::Failure;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for Either<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Value(a), State::Value(b)) => a == b,
            (State::Null, State::Null) => true,
            (State::Failure(a), State::Failure(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Either<T> {}

impl<T: Hash> Hash for Either<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Value(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            State::Null => 1u8.hash(state),
            State::Failure(failure) => {
                2u8.hash(state);
                failure.hash(state);
            }
        }
    }
}

impl<T> PartialEq<Failure> for Either<T> {
    fn eq(&self, other: &Failure) -> bool {
        self.error() == Some(other)
    }
}

/// `Some` matches a present value, `None` matches a null success
impl<T: PartialEq> PartialEq<Option<T>> for Either<T> {
    fn eq(&self, other: &Option<T>) -> bool {
        match (&self.state, other) {
            (State::Value(a), Some(b)) => a == b,
            (State::Null, None) => true,
            _ => false,
        }
    }
}

macro_rules! impl_eq_bare_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Either<$ty> {
                fn eq(&self, other: &$ty) -> bool {
                    self.value() == Some(other)
                }
            }
        )*
    };
}

impl_eq_bare_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl PartialEq<&str> for Either<String> {
    fn eq(&self, other: &&str) -> bool {
        self.value().map(String::as_str) == Some(*other)
    }
}

impl PartialEq<str> for Either<String> {
    fn eq(&self, other: &str) -> bool {
        self.value().map(String::as_str) == Some(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Either::success(9), Either::success(9));
        assert_ne!(Either::success(9), Either::success(8));
        assert!(Either::success(9) == 9);
        assert!(Either::success(9) != 8);
        assert!(Either::success(9) == Some(9));
        assert!(Either::success("x".to_string()) == "x");
        assert!(Either::success("x".to_string()) == *"x");
    }

    #[test]
    fn test_null_equals_empty() {
        let null: Either<i32> = Either::success_opt(None);

        assert_eq!(null, Either::EMPTY);
        assert_eq!(null, Either::empty());
        assert_eq!(null, Either::default());
        assert!(null == None);
        assert!(null != 0);
        assert_eq!(hash_of(&null), hash_of(&Either::<i32>::EMPTY));
    }

    #[test]
    fn test_failure_equality_is_identity() {
        let failure = Failure::msg("x");
        let either: Either<i32> = Either::failure(failure.clone());

        assert!(either == failure);
        assert!(either != Failure::msg("x"));
        assert_eq!(either, Either::failure(failure.clone()));
        assert_ne!(either, Either::failure(Failure::msg("x")));
        assert_ne!(either, Either::EMPTY);
        assert!(either != None);
        assert_eq!(hash_of(&either), hash_of(&Either::<i32>::failure(failure)));
    }

    #[test]
    fn test_state_changes_hash() {
        assert_ne!(hash_of(&Either::success(0)), hash_of(&Either::<i32>::EMPTY));
        assert_eq!(hash_of(&Either::success(7)), hash_of(&Either::success(7)));
    }
}

//! Conversions into and out of `Either`.

use super::Either;
use crate::failure::Failure;
use std::future::{ready, IntoFuture, Ready};

impl<T, E> From<Result<T, E>> for Either<T>
where
    E: Into<Failure>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::success(value),
            Err(error) => Either::failure(error),
        }
    }
}

impl<T> From<Option<T>> for Either<T> {
    fn from(value: Option<T>) -> Self {
        Either::success_opt(value)
    }
}

impl<T> IntoIterator for Either<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Either<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An `Either` is an already completed computation: awaiting it yields the
/// payload or the captured failure without suspending.
impl<T> IntoFuture for Either<T> {
    type Output = Result<Option<T>, Failure>;
    type IntoFuture = Ready<Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        ready(self.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResultExt;

    #[test]
    fn test_from_result() {
        let ok: Either<i32> = "42".parse::<i32>().into();
        assert_eq!(ok, Either::success(42));

        let err: Either<i32> = "forty-two".parse::<i32>().into();
        assert!(err.is_failure());
        assert!(err.error().unwrap().is::<std::num::ParseIntError>());

        let via_ext = "7".parse::<u8>().into_either();
        assert!(via_ext == 7u8);
    }

    #[test]
    fn test_from_option_and_iteration() {
        assert_eq!(Either::from(Some(1)), Either::success(1));
        assert_eq!(Either::<i32>::from(None), Either::EMPTY);

        let values: Vec<i32> = vec![Either::success(1), Either::EMPTY, Either::success(3)]
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(values, vec![1, 3]);

        let either = Either::success(5);
        let mut seen = 0;
        for v in &either {
            seen += v;
        }
        assert_eq!(seen, 5);
    }

    #[tokio::test]
    async fn test_await_yields_result() {
        assert_eq!(Either::success(1).await.unwrap(), Some(1));
        assert_eq!(Either::<i32>::EMPTY.await.unwrap(), None);

        let failure = Failure::msg("late");
        let raised = Either::<i32>::failure(failure.clone()).await.unwrap_err();
        assert!(Failure::ptr_eq(&raised, &failure));
    }
}

//! Extension traits for error handling

use crate::either::Either;
use crate::failure::Failure;

/// Extension trait for turning a `Result` into an [`Either`]
pub trait ResultExt<T> {
    /// Capture the error side as a [`Failure`]
    fn into_either(self) -> Either<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Failure>,
{
    fn into_either(self) -> Either<T> {
        match self {
            Ok(value) => Either::success(value),
            Err(error) => Either::failure(error),
        }
    }
}

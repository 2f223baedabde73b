//! Captured failures shared between `Either`, the adapters and log sinks.
//!
//! A [`Failure`] owns one boxed error behind an `Arc`. Clones share the same
//! allocation and compare equal only to each other, so an error that is
//! captured, passed through a pipeline and handed back still *is* the error
//! the operation produced.

use crate::errors::{Interrupted, Message};
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// How adapters treat a failure before any policy applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Unrecoverable, never swallowed
    Fatal,
    /// Cooperative cancellation; the thread's interrupt flag is restored
    Cancelled,
    /// Everything else
    Ordinary,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Fatal => "fatal",
            FailureKind::Cancelled => "cancelled",
            FailureKind::Ordinary => "ordinary",
        };
        f.write_str(name)
    }
}

/// A captured error with identity semantics.
#[derive(Clone)]
pub struct Failure {
    inner: Arc<Inner>,
}

struct Inner {
    kind: FailureKind,
    error: BoxError,
}

impl Failure {
    /// Capture an error, inferring its kind.
    ///
    /// [`Interrupted`] and `std::io::Error`s of kind `Interrupted` become
    /// cancellations. Nothing is ever inferred as fatal.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Capture an already boxed error, inferring its kind
    pub fn from_boxed(error: BoxError) -> Self {
        let kind = classify(error.as_ref());
        Self::with_kind(kind, error)
    }

    /// Capture an error that must never be swallowed
    pub fn fatal<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_kind(FailureKind::Fatal, Box::new(error))
    }

    /// Capture an error that represents a cancellation
    pub fn cancelled<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_kind(FailureKind::Cancelled, Box::new(error))
    }

    /// A cancellation carrying [`Interrupted`]
    pub fn interrupted() -> Self {
        Self::cancelled(Interrupted)
    }

    /// An ordinary failure with a plain message
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::with_kind(FailureKind::Ordinary, Box::new(Message(message.to_string())))
    }

    fn with_kind(kind: FailureKind, error: BoxError) -> Self {
        Self {
            inner: Arc::new(Inner { kind, error }),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.inner.kind
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == FailureKind::Fatal
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind() == FailureKind::Cancelled
    }

    pub fn is_ordinary(&self) -> bool {
        self.kind() == FailureKind::Ordinary
    }

    /// Whether both handles point at the same captured error
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// The captured error
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.error.as_ref()
    }

    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.inner.error.is::<E>()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.error.downcast_ref::<E>()
    }

    /// The captured error followed by its chain of sources
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let head: &(dyn StdError + 'static) = self.error();
        std::iter::successors(Some(head), |&error| error.source())
    }
}

fn classify(error: &(dyn StdError + 'static)) -> FailureKind {
    if error.is::<Interrupted>() {
        return FailureKind::Cancelled;
    }
    match error.downcast_ref::<std::io::Error>() {
        Some(io) if io.kind() == std::io::ErrorKind::Interrupted => FailureKind::Cancelled,
        _ => FailureKind::Ordinary,
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Failure::new(error)
    }
}

impl Deref for Failure {
    type Target = dyn StdError + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        self.error()
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Failure {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.error()
    }
}

impl fmt::Display for Failure {
    /// `{}` prints the captured error, `{:#}` appends its sources.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error(), f)?;
        if f.alternate() {
            for source in self.chain().skip(1) {
                write!(f, ": {source}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.inner.kind)
            .field("error", &self.inner.error)
            .finish()
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        Failure::ptr_eq(self, other)
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

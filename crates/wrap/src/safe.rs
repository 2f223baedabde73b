//! Task traits whose failures are handled by the task itself.
//!
//! Implementors supply `execute`; callers use `call` or `run`, which never
//! return an error. Fatal failures still unwind.

use crate::policy;
use safecall_core::Failure;
use std::any::type_name;

/// A task producing a value, with overridable failure handling
pub trait SafeCallable<V> {
    fn execute(&self) -> Result<V, Failure>;

    /// Called with every failure of `execute`.
    ///
    /// The default re-raises fatal failures, logs the rest and yields no value.
    fn handle_failure(&self, failure: Failure) -> Option<V> {
        policy::handle_failure(type_name::<Self>(), &failure);
        None
    }

    fn call(&self) -> Option<V> {
        match self.execute() {
            Ok(value) => Some(value),
            Err(failure) => self.handle_failure(failure),
        }
    }
}

impl<V, F> SafeCallable<V> for F
where
    F: Fn() -> Result<V, Failure>,
{
    fn execute(&self) -> Result<V, Failure> {
        self()
    }
}

/// A task run for its effects, with overridable failure handling
pub trait SafeRunnable {
    fn execute(&self) -> Result<(), Failure>;

    fn handle_failure(&self, failure: Failure) {
        policy::handle_failure(type_name::<Self>(), &failure);
    }

    /// Run the task; returns whether it succeeded
    fn run(&self) -> bool {
        match self.execute() {
            Ok(()) => true,
            Err(failure) => {
                self.handle_failure(failure);
                false
            }
        }
    }
}

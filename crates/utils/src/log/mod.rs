//! Logging facade used when a failure is swallowed.
//!
//! The only capability required from a backend is [`LogSink::warn`]. The sink
//! in effect for a call is looked up in this order:
//!
//! 1. a sink scoped to the current thread with [`with_sink`],
//! 2. the process-wide sink set once with [`install`] or [`init`],
//! 3. a sink built from [`LogConfig::from_env`], installed on first use.

mod sinks;

pub use sinks::{MemorySink, Record, SilentSink, TracingSink, WriterSink};

use crate::config::LogConfig;
use once_cell::sync::OnceCell;
use safecall_core::{Error, Failure, Result};
use std::cell::RefCell;
use std::sync::Arc;

/// Receives warnings about failures that were handled without propagating.
///
/// Sinks are shared between threads and must not interleave records.
pub trait LogSink: Send + Sync {
    fn warn(&self, message: &str, failure: Option<&Failure>);
}

impl<F> LogSink for F
where
    F: Fn(&str, Option<&Failure>) + Send + Sync,
{
    fn warn(&self, message: &str, failure: Option<&Failure>) {
        self(message, failure)
    }
}

static GLOBAL: OnceCell<Arc<dyn LogSink>> = OnceCell::new();

thread_local! {
    static SCOPED: RefCell<Option<Arc<dyn LogSink>>> = RefCell::new(None);
}

/// Install the process-wide sink.
///
/// Fails if a sink was already installed, including the implicit one created
/// by the first warning logged before any call to `install`.
pub fn install(sink: Arc<dyn LogSink>) -> Result<()> {
    GLOBAL
        .set(sink)
        .map_err(|_| Error::configuration("a log sink is already installed"))
}

/// Install the sink described by `config`
pub fn init(config: &LogConfig) -> Result<()> {
    install(config.build())
}

fn global() -> &'static Arc<dyn LogSink> {
    GLOBAL.get_or_init(|| match LogConfig::from_env() {
        Ok(config) => config.build(),
        Err(error) => {
            let sink = LogConfig::default().build();
            sink.warn(&format!("ignoring log configuration: {error}"), None);
            sink
        }
    })
}

/// The sink a warning logged on this thread right now would go to
pub fn current() -> Arc<dyn LogSink> {
    SCOPED
        .with(|scoped| scoped.borrow().clone())
        .unwrap_or_else(|| Arc::clone(global()))
}

/// Log a warning through the [`current`] sink
pub fn warn(message: &str, failure: Option<&Failure>) {
    current().warn(message, failure);
}

/// Route this thread's warnings to `sink` while `f` runs.
///
/// Scopes nest; the previous sink is restored even if `f` panics.
pub fn with_sink<R>(sink: Arc<dyn LogSink>, f: impl FnOnce() -> R) -> R {
    let previous = SCOPED.with(|scoped| scoped.replace(Some(sink)));
    let _restore = Restore(previous);
    f()
}

struct Restore(Option<Arc<dyn LogSink>>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        SCOPED.with(|scoped| *scoped.borrow_mut() = previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_scoped_sink_receives_warnings() {
        let sink = Arc::new(MemorySink::new());
        let failure = Failure::msg("boom");

        with_sink(sink.clone(), || warn("first", Some(&failure)));

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "first");
        assert!(Failure::ptr_eq(records[0].failure.as_ref().unwrap(), &failure));
    }

    #[test]
    fn test_scopes_nest_and_restore() {
        let outer = Arc::new(MemorySink::new());
        let inner = Arc::new(MemorySink::new());

        with_sink(outer.clone(), || {
            warn("to outer", None);
            with_sink(inner.clone(), || warn("to inner", None));
            warn("to outer again", None);
        });

        assert_eq!(outer.messages(), vec!["to outer", "to outer again"]);
        assert_eq!(inner.messages(), vec!["to inner"]);
    }

    #[test]
    fn test_scope_restored_after_panic() {
        let outer = Arc::new(MemorySink::new());
        let inner = Arc::new(MemorySink::new());

        with_sink(outer.clone(), || {
            let result = catch_unwind(AssertUnwindSafe(|| {
                with_sink(inner.clone(), || panic!("inside scope"));
            }));
            assert!(result.is_err());
            warn("after panic", None);
        });

        assert_eq!(outer.messages(), vec!["after panic"]);
        assert!(inner.is_empty());
    }

    #[test]
    fn test_closures_are_sinks() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        let sink = move |message: &str, failure: Option<&Failure>| {
            captured.lock().push(format!("{message}:{}", failure.is_some()));
        };

        with_sink(Arc::new(sink), || {
            warn("a", None);
            warn("b", Some(&Failure::msg("x")));
        });

        assert_eq!(*seen.lock(), vec!["a:false".to_string(), "b:true".to_string()]);
    }

    #[test]
    fn test_scope_is_per_thread() {
        let sink = Arc::new(MemorySink::new());

        with_sink(sink.clone(), || {
            std::thread::spawn(|| {
                let here = current();
                here.warn("from another thread", None);
            })
            .join()
            .unwrap();
        });

        assert!(sink.is_empty());
    }
}

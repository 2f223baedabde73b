//! Sink backends

use super::LogSink;
use chrono::Utc;
use parking_lot::Mutex;
use safecall_core::Failure;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Forwards warnings to `tracing` with the failure as structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warn(&self, message: &str, failure: Option<&Failure>) {
        match failure {
            Some(failure) => tracing::warn!(
                target: "safecall",
                error = %format_args!("{failure:#}"),
                kind = %failure.kind(),
                "{message}"
            ),
            None => tracing::warn!(target: "safecall", "{message}"),
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl LogSink for SilentSink {
    fn warn(&self, _message: &str, _failure: Option<&Failure>) {}
}

/// Writes one plain-text record per warning to any `io::Write`.
///
/// Record layout: `<unix millis>\t[WARN]\t<name>\t- <message>`, followed by
/// one indented line per error in the failure's chain. Each record is written
/// with a single `write_all` under a lock.
#[derive(Debug)]
pub struct WriterSink<W> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with exclusive access to the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.writer.lock())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr(name: impl Into<String>) -> Self {
        Self::new(name, io::stderr())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn warn(&self, message: &str, failure: Option<&Failure>) {
        let record = render(&self.name, message, failure);
        let mut writer = self.writer.lock();
        // A sink has nowhere to report its own I/O errors.
        let _ = writer
            .write_all(record.as_bytes())
            .and_then(|()| writer.flush());
    }
}

fn render(name: &str, message: &str, failure: Option<&Failure>) -> String {
    let mut record = format!(
        "{}\t[WARN]\t{name}\t- {message}\n",
        Utc::now().timestamp_millis()
    );
    if let Some(failure) = failure {
        for (depth, error) in failure.chain().enumerate() {
            let _ = if depth == 0 {
                writeln!(record, "\t{}: {error}", failure.kind())
            } else {
                writeln!(record, "\tcaused by: {error}")
            };
        }
    }
    record
}

/// One warning captured by a [`MemorySink`]
#[derive(Debug, Clone)]
pub struct Record {
    pub message: String,
    pub failure: Option<Failure>,
}

/// Keeps every warning in memory; handy in tests
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn warn(&self, message: &str, failure: Option<&Failure>) {
        self.records.lock().push(Record {
            message: message.to_string(),
            failure: failure.cloned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecall_core::Error;
    use std::sync::Arc;

    #[test]
    fn test_writer_record_layout() {
        let sink = WriterSink::new("pipeline", Vec::new());
        let cause = Failure::msg("socket closed");
        sink.warn("fetch failed", Some(&Failure::new(Error::invalid_state(cause))));
        sink.warn("plain", None);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("\t[WARN]\tpipeline\t- fetch failed"));
        assert!(lines[0].split('\t').next().unwrap().parse::<i64>().is_ok());
        assert_eq!(lines[1], "\tordinary: failure instead of value: socket closed");
        assert_eq!(lines[2], "\tcaused by: socket closed");
        assert!(lines[3].ends_with("\t- plain"));
    }

    #[test]
    fn test_writer_lines_do_not_interleave() {
        let sink = Arc::new(WriterSink::new("threads", Vec::new()));

        let handles: Vec<_> = (0..8)
            .map(|thread| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        sink.warn(&format!("thread {thread} message {i}"), None);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let text = sink.with_writer(|buffer| String::from_utf8(buffer.clone()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.contains("\t[WARN]\tthreads\t- thread "), "torn line: {line:?}");
        }
    }

    #[test]
    fn test_memory_sink_keeps_failures() {
        let sink = MemorySink::new();
        let failure = Failure::msg("x");

        sink.warn("one", Some(&failure));
        sink.warn("two", None);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["one", "two"]);
        assert_eq!(sink.records()[0].failure.as_ref(), Some(&failure));
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_silent_and_tracing_sinks_do_not_panic() {
        let failure = Failure::msg("ignored");
        SilentSink.warn("nothing", Some(&failure));
        TracingSink.warn("no subscriber", Some(&failure));
        TracingSink.warn("no subscriber", None);
    }
}

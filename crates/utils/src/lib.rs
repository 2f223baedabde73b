//! Shared utilities for safecall
//!
//! This crate provides the logging capability the adapters report swallowed
//! failures to, the backends behind it, and the configuration that picks one
//! at process start.

pub mod config;
pub mod log;
pub mod subscriber;

pub use config::{LogBackend, LogConfig};
pub use log::{LogSink, MemorySink, Record, SilentSink, TracingSink, WriterSink};

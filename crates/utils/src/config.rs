//! Log sink configuration.
//!
//! Resolved once at process start, either explicitly (`LogConfig::from_json`,
//! struct literal, or embedded in an application's own serde config) or from
//! the environment.

use crate::log::{LogSink, SilentSink, TracingSink, WriterSink};
use safecall_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Environment variable selecting the [`LogBackend`]
pub const BACKEND_ENV: &str = "SAFECALL_LOG_BACKEND";

/// Environment variable naming the logger in plain-text records
pub const NAME_ENV: &str = "SAFECALL_LOG_NAME";

const DEFAULT_NAME: &str = "safecall";

/// Where warnings about swallowed failures go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBackend {
    /// `Tracing` if a global tracing subscriber is set, `Stderr` otherwise
    #[default]
    Auto,
    Tracing,
    Stderr,
    Silent,
}

impl LogBackend {
    /// Replace `Auto` with the backend it stands for right now
    pub fn resolve(self) -> Self {
        match self {
            LogBackend::Auto if tracing::dispatcher::has_been_set() => LogBackend::Tracing,
            LogBackend::Auto => LogBackend::Stderr,
            other => other,
        }
    }
}

impl fmt::Display for LogBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogBackend::Auto => "auto",
            LogBackend::Tracing => "tracing",
            LogBackend::Stderr => "stderr",
            LogBackend::Silent => "silent",
        };
        f.write_str(name)
    }
}

impl FromStr for LogBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(LogBackend::Auto),
            "tracing" => Ok(LogBackend::Tracing),
            "stderr" => Ok(LogBackend::Stderr),
            "silent" | "off" | "none" => Ok(LogBackend::Silent),
            other => Err(Error::configuration(format!(
                "unknown log backend '{other}' (expected auto, tracing, stderr or silent)"
            ))),
        }
    }
}

/// Configuration for the process-wide log sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub backend: LogBackend,
    /// Logger name written into plain-text records
    pub name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            backend: LogBackend::Auto,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl LogConfig {
    /// Read [`BACKEND_ENV`] and [`NAME_ENV`]; unset variables keep their defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LogConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(backend) = lookup(BACKEND_ENV) {
            config.backend = backend.parse()?;
        }
        if let Some(name) = lookup(NAME_ENV).filter(|name| !name.trim().is_empty()) {
            config.name = name;
        }
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("invalid log configuration: {e}")))
    }

    /// Build the sink this configuration describes
    pub fn build(&self) -> Arc<dyn LogSink> {
        match self.backend.resolve() {
            LogBackend::Tracing => Arc::new(TracingSink),
            LogBackend::Silent => Arc::new(SilentSink),
            LogBackend::Stderr | LogBackend::Auto => Arc::new(WriterSink::stderr(self.name.clone())),
        }
    }
}

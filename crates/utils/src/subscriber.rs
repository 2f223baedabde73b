//! `tracing` subscriber setup for applications that want `TracingSink`
//! output on stderr without configuring tracing themselves.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the global tracing subscriber with [`DEFAULT_DIRECTIVE`]
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    init_with_directive(DEFAULT_DIRECTIVE)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `directive`. Output goes to stderr,
/// with colours only when stderr is a terminal. Fails if a global
/// subscriber is already set.
pub fn init_with_directive(
    directive: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if stderr is attached to a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

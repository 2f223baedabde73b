//! Parse a batch of readings, keeping going past bad lines.
//!
//! Run with `SAFECALL_LOG_BACKEND=tracing` to route warnings through the
//! tracing subscriber instead of the plain stderr writer.

use safecall_utils::{log, subscriber, LogBackend, LogConfig};
use safecall_wrap::{function, predicate_or, Either, Failure};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = LogConfig::from_env()?;
    if config.backend == LogBackend::Tracing {
        subscriber::init()?;
    }
    log::init(&config)?;

    let readings = ["21.5", "n/a", "19.0", "-3", "22.25"];

    let parsed: Vec<Either<f64>> = readings
        .into_iter()
        .map(function(|line: &&str| line.trim().parse::<f64>()))
        .collect();
    let failures = parsed.iter().filter(|reading| reading.is_failure()).count();

    let plausible = predicate_or(
        |line: &&str| Ok::<_, Failure>(line.trim().parse::<f64>()? >= 0.0),
        false,
    );
    let kept: Vec<f64> = readings
        .into_iter()
        .filter(|line| plausible(line))
        .filter_map(|line| line.trim().parse().ok())
        .collect();

    println!("{failures} unreadable, kept {kept:?}");
    Ok(())
}

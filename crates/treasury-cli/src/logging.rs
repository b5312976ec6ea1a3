//! Tracing subscriber setup.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_PREFIX: &str = "treasury.log";

/// Resolves the filter directive: `RUST_LOG` wins, then `--verbose`, then
/// the configured level.
pub fn filter_directive(env: Option<&str>, verbose: bool, configured: &str) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Installs the global subscriber.
///
/// Console output goes to stderr so `--json` output stays clean. With a
/// `log_dir`, a daily rolling file is written as well; the returned guard
/// must be held until exit to flush it.
pub fn init(directive: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::try_new(directive)?);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry().with(console).try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(directive)?);

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()?;

    Ok(Some(guard))
}

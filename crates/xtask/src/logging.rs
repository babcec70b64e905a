//! Tracing setup for xtask commands.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// Messages go to stderr, filtered by `RUST_LOG` (default `warn`, or `debug`
/// for `verbose`). With a log directory, everything at `debug` and above is
/// also written to `<dir>/<session>/sync.log`. Keep the returned guard alive
/// until exit so the file writer flushes.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "warn" };
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(stderr_layer.with_filter(stderr_filter))
            .init();
        return Ok(None);
    };

    let session_dir = log_dir.join(session_id());
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("Failed to create log directory: {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "sync.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(stderr_filter))
        .with(file_layer.with_filter(EnvFilter::new("debug")))
        .init();

    tracing::info!("Log file: {}", session_dir.join("sync.log").display());
    Ok(Some(guard))
}

fn session_id() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{seconds}")
}

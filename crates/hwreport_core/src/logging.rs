use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::ReportConfig;

/// Initializes file + console logging under `~/.hwreport/logs`.
/// Returns a guard that must be kept alive until the process exits.
pub fn init_logging(level: &str) -> Result<WorkerGuard> {
    let logs_dir = ReportConfig::logs_dir()?;
    init_logging_to_dir(&logs_dir, &default_filter(level))
}

/// Initialize logging to a custom directory with a custom filter.
///
/// The console layer writes to stderr so stdout stays free for report output.
pub fn init_logging_to_dir(logs_dir: &std::path::Path, filter: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    // File appender: daily rotation
    let file_appender = tracing_appender::rolling::daily(logs_dir, "hwreport");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

/// `level` for everything, one notch chattier for our own crates when at info.
fn default_filter(level: &str) -> String {
    let level = level.trim();
    let level = if level.is_empty() { "info" } else { level };
    if level.eq_ignore_ascii_case("info") {
        "info,hwreport_app=debug,hwreport_core=debug,hwreport_docs=debug".to_string()
    } else {
        level.to_string()
    }
}

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `checklists=trace`)
pub const LOG_ENV: &str = "CHECKLISTS_LOG";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to `<data_dir>/checklists.log`. Used by the TUI, which owns the terminal.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_file(data_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;
    let appender = tracing_appender::rolling::never(data_dir, "checklists.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter_or("info"))
        .try_init();
    Ok(guard)
}

/// Log warnings and errors to stderr. Used by CLI subcommands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter_or("warn"))
        .try_init();
}

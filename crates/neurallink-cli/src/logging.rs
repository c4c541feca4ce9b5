//! File logging.
//!
//! The TUI owns stdout, so logs go to `$NEURALLINK_HOME/logs/neurallink.log`.
//! If that file cannot be opened, logging is disabled instead of writing to
//! the terminal.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use neurallink_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "NEURALLINK_LOG";

const LOG_FILE_NAME: &str = "neurallink.log";

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole process.
pub fn init_tracing() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let target = paths::logs_dir().ok().and_then(|dir| {
        let path = open_log_file(&dir)?;
        Some((dir, path))
    });
    let Some((dir, log_path)) = target else {
        // Never log to the terminal the TUI draws on.
        tracing_subscriber::registry().with(env_filter).init();
        return None;
    };

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "logging initialized");
    Some(guard)
}

/// Ensures the log file in `dir` can be created and returns its path.
fn open_log_file(dir: &Path) -> Option<PathBuf> {
    fs::create_dir_all(dir).ok()?;
    let path = dir.join(LOG_FILE_NAME);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some(path)
}

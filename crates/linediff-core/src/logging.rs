//! Tracing subscriber setup

use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(level: &str) -> ConfigResult<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::LogLevel(level.to_string()))
}

/// Install the global fmt subscriber.
///
/// Logs go to stderr unless `log_file` is given, in which case they are
/// appended to that file through a non-blocking writer. The returned guard
/// flushes the writer on drop and must live as long as logging is wanted.
/// Once a global subscriber exists, later calls keep it and return `None`.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> ConfigResult<Option<WorkerGuard>> {
    let level = parse_level(level)?;
    if tracing::dispatcher::has_been_set() {
        return Ok(None);
    }

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| ConfigError::Logging(format!("not a file: {}", path.display())))?;
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .or_else(already_installed)?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .try_init()
                .or_else(already_installed)?;
            Ok(None)
        }
    }
}

/// Losing an install race to another thread is not an error.
fn already_installed(err: impl std::fmt::Display) -> ConfigResult<()> {
    if tracing::dispatcher::has_been_set() {
        Ok(())
    } else {
        Err(ConfigError::Logging(err.to_string()))
    }
}

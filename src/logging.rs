//! Log sink: stdout plus an append-only file
//!
//! Both layers share the same timestamp format. The file never gets ANSI
//! escapes; stdout follows the resolved color mode.

use anyhow::{Context, Result};
use std::path::Path;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::color::ColorMode;

/// `2024/05/01 13:37:00`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Install the global subscriber
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// until the run is over.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed
pub fn init(log_file: &Path, color_mode: ColorMode) -> Result<WorkerGuard> {
    let appender = open_appender(log_file)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(color_mode.should_colorize(Stream::Stdout))
                .with_target(false)
                .with_timer(timer.clone()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false)
                .with_timer(timer),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

/// Open `log_file` for appending, creating it and its parent directory
fn open_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let file_name = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid log file path: {}", log_file.display()))?;

    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_appender_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let log_file = tmp.path().join("logs/nested/action.log");

        let mut appender = open_appender(&log_file).unwrap();
        appender.write_all(b"first line\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(
            std::fs::read_to_string(&log_file).unwrap(),
            "first line\n"
        );
    }

    #[test]
    fn test_open_appender_appends_to_existing_file() {
        let tmp = TempDir::new().unwrap();
        let log_file = tmp.path().join("action.log");
        std::fs::write(&log_file, "previous run\n").unwrap();

        let mut appender = open_appender(&log_file).unwrap();
        appender.write_all(b"this run\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(
            std::fs::read_to_string(&log_file).unwrap(),
            "previous run\nthis run\n"
        );
    }

    #[test]
    fn test_open_appender_rejects_directory_path() {
        let tmp = TempDir::new().unwrap();
        let result = open_appender(&tmp.path().join(".."));
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_format_shape() {
        let formatted = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(formatted.len(), "2024/05/01 13:37:00".len());
        assert_eq!(&formatted[4..5], "/");
    }
}

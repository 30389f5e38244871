use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling file; the TUI owns the terminal
    File,
    /// Plain `--once` runs
    Stderr,
}

/// `~/.local/share/mensa-widget/logs` (platform data dir), or `./logs`
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("mensa-widget").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber. The returned guard flushes the file
/// writer on drop and has to live until the program exits.
pub fn init_logger(target: LogTarget) -> Result<Option<WorkerGuard>> {
    // Get log level from environment; stderr stays quiet unless asked
    let default_level = match target {
        LogTarget::File => "info,mensa_widget=debug",
        LogTarget::Stderr => "warn",
    };
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    let filter = EnvFilter::try_new(&log_level)?;

    match target {
        LogTarget::File => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("mensa-widget")
                .filename_suffix("log")
                .build(log_dir())?;
            let (writer, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false); // No colors in file
            if json {
                tracing_subscriber::registry().with(filter).with(layer.json()).init();
            } else {
                tracing_subscriber::registry().with(filter).with(layer).init();
            }
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
            if json {
                tracing_subscriber::registry().with(filter).with(layer.json()).init();
            } else {
                tracing_subscriber::registry().with(filter).with(layer).init();
            }
            Ok(None)
        }
    }
}

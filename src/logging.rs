//! Logging Module
//!
//! Installs the process-wide tracing subscriber. Every event goes to two sinks:
//! the console, and an append-only log file written from a background thread.
//! Application code only emits `tracing` events and never touches the sinks.

use anyhow::Context;
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Config;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "division_api=info,tower_http=info";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Initializes console and file logging.
///
/// The returned guard owns the file writer's worker thread. Keep it alive for
/// the lifetime of the process: dropping it flushes any buffered records and
/// closes the file.
pub fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let appender = file_appender(config)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_timer(ChronoLocal::new(TIME_FORMAT.to_string())))
        .with(
            fmt::layer()
                .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(file_writer),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Opens the log file appender, creating the log directory if needed.
///
/// With [`LogRotation::Never`](crate::config::LogRotation::Never) the file is
/// named exactly `log_file`; otherwise `log_file` is used as the prefix and a
/// date suffix is appended per period.
pub fn file_appender(config: &Config) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            config.log_dir.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(config.log_rotation.into())
        .filename_prefix(config.log_file.as_str())
        .build(&config.log_dir)
        .with_context(|| format!("failed to open log file in {}", config.log_dir.display()))
}

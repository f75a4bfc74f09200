//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing_appender::rolling::Rotation;

/// How often the log file is rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    /// Single append-only file
    Never,
    Daily,
    Hourly,
    Minutely,
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(LogRotation::Never),
            "daily" => Ok(LogRotation::Daily),
            "hourly" => Ok(LogRotation::Hourly),
            "minutely" => Ok(LogRotation::Minutely),
            other => Err(format!("unknown log rotation '{}'", other)),
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Minutely => Rotation::MINUTELY,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Directory holding the log file
    pub log_dir: PathBuf,
    /// Log file name (prefix when rotation is enabled)
    pub log_file: String,
    /// Log file rotation policy
    pub log_rotation: LogRotation,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `LOG_DIR` - Log directory (default: logs)
    /// - `LOG_FILE` - Log file name (default: division_api.log)
    /// - `LOG_ROTATION` - never, daily, hourly or minutely (default: never)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_host: parse_var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            log_dir: env::var("LOG_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file: env::var("LOG_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_file),
            log_rotation: parse_var("LOG_ROTATION").unwrap_or(defaults.log_rotation),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 5000,
            log_dir: PathBuf::from("logs"),
            log_file: "division_api.log".to_string(),
            log_rotation: LogRotation::Never,
        }
    }
}

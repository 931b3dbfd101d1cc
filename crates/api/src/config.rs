//! Process configuration, read from environment variables.
//!
//! | Variable      | Default | Allowed          |
//! |---------------|---------|------------------|
//! | `PORT`        | `8080`  | any `u16`        |
//! | `HEALTH_PORT` | `8081`  | `u16` != `PORT`  |
//! | `LOG_LEVEL`   | `info`  | `debug`, `info`  |

use core::str::FromStr;
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HEALTH_PORT: u16 = 8081;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' is not a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid log level: '{0}' (expected one of: debug, info)")]
    InvalidLogLevel(String),

    #[error("PORT and HEALTH_PORT must differ (both set to {0})")]
    PortClash(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the ledger API listens on.
    pub port: u16,
    /// Port of the separate health-check listener.
    pub health_port: u16,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            health_port: DEFAULT_HEALTH_PORT,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup; unset or blank keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => parse_port("PORT", v)?,
            None => DEFAULT_PORT,
        };
        let health_port = match get("HEALTH_PORT") {
            Some(v) => parse_port("HEALTH_PORT", v)?,
            None => DEFAULT_HEALTH_PORT,
        };
        let log_level = match get("LOG_LEVEL") {
            Some(v) => v.parse()?,
            None => LogLevel::default(),
        };

        let config = Self {
            port,
            health_port,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == self.health_port {
            return Err(ConfigError::PortClash(self.port));
        }
        Ok(())
    }

    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn health_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.health_port))
    }
}

fn parse_port(var: &'static str, value: String) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidPort { var, value })
}

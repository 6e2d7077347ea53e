// Runtime configuration read from the environment.
//
// Variables
// - REGISTRATION_BIND_ADDR: socket address to listen on (default 0.0.0.0:8080).
// - REGISTRATION_TIMESTAMP_FORMAT: strftime pattern for the submission timestamp.

use std::net::SocketAddr;

use thiserror::Error;

use crate::shared::core::clock::{InvalidTimestampFormat, TimestampFormat};

pub const BIND_ADDR_VAR: &str = "REGISTRATION_BIND_ADDR";
pub const TIMESTAMP_FORMAT_VAR: &str = "REGISTRATION_TIMESTAMP_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value:?}")]
    BindAddr { var: &'static str, value: String },

    #[error(transparent)]
    TimestampFormat(#[from] InvalidTimestampFormat),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub timestamp_format: TimestampFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let bind_value = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::BindAddr {
                var: BIND_ADDR_VAR,
                value: bind_value.clone(),
            })?;

        let timestamp_format = match read(TIMESTAMP_FORMAT_VAR) {
            Some(pattern) => TimestampFormat::parse(pattern)?,
            None => TimestampFormat::default(),
        };

        Ok(Self {
            bind_addr,
            timestamp_format,
        })
    }
}

//! Configuration management for the booking server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Booking service configuration
    pub bookings: BookingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

/// Booking service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How booking ids are generated
    pub id_scheme: IdScheme,
}

/// Booking id generation scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// `RES-000001`, `RES-000002`, ...
    #[default]
    Sequential,
    /// `RES-<uuid v4>`
    Uuid,
}

impl FromStr for IdScheme {
    type Err = UnknownIdScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            _ => Err(UnknownIdScheme(s.to_string())),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Uuid => f.write_str("uuid"),
        }
    }
}

/// `BOOKING_ID_SCHEME` held something other than `sequential` or `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking id scheme: {0}")]
pub struct UnknownIdScheme(pub String);

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults. An unknown
    /// `BOOKING_ID_SCHEME` is logged and replaced with `sequential`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3050),
                log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
                shutdown_timeout: lookup("SHUTDOWN_TIMEOUT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            bookings: BookingConfig {
                id_scheme: lookup("BOOKING_ID_SCHEME")
                    .map(|s| {
                        s.parse().unwrap_or_else(|e: UnknownIdScheme| {
                            tracing::warn!(error = %e, "Falling back to sequential booking ids");
                            IdScheme::Sequential
                        })
                    })
                    .unwrap_or_default(),
            },
        }
    }

    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Graceful shutdown timeout.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3050);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(30));
        assert_eq!(config.bookings.id_scheme, IdScheme::Sequential);
        assert_eq!(config.bind_address(), "0.0.0.0:3050");
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SHUTDOWN_TIMEOUT", "5"),
            ("BOOKING_ID_SCHEME", "UUID"),
        ]);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.shutdown_timeout(), Duration::from_secs(5));
        assert_eq!(config.bookings.id_scheme, IdScheme::Uuid);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_with(&[("PORT", "not-a-port"), ("BOOKING_ID_SCHEME", "random")]);
        assert_eq!(config.server.port, 3050);
        assert_eq!(config.bookings.id_scheme, IdScheme::Sequential);
    }

    #[test]
    fn test_id_scheme_parse() {
        assert_eq!("sequential".parse::<IdScheme>(), Ok(IdScheme::Sequential));
        assert_eq!(
            "nope".parse::<IdScheme>(),
            Err(UnknownIdScheme("nope".to_string()))
        );
        assert_eq!(IdScheme::Uuid.to_string(), "uuid");
    }
}

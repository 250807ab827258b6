//! Configuration module
//!
//! Application configuration is read from a TOML file
//! (default: ~/.config/cinema-booking/config.toml, override with
//! the `CINEMA_CONFIG` environment variable). Missing sections fall
//! back to defaults so a partial file is always valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default path of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cinema-booking")
        .join("config.toml")
}

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub booking: BookingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        toml::from_str(&raw).map_err(ConfigError::Parse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {0}: {1}")]
    Io(String, std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(toml::de::Error),
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// API host address
    pub host: String,
    /// API port
    pub port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

/// Database section of the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite database file path
    pub path: String,
    /// Connection pool size
    pub max_connections: u32,
}

impl DatabaseSection {
    pub fn connection_url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite://{}?mode=rwc", self.path)
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: "./cinema.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Seat hold and expiry sweep tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// How long a seat hold lives before it may be reclaimed, in seconds
    pub hold_ttl_secs: u64,
    /// Expiry sweep cadence in seconds
    pub sweep_interval_secs: u64,
    /// Maximum number of seats a single hold or booking may cover
    pub max_seats_per_hold: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            hold_ttl_secs: 300,
            sweep_interval_secs: 60,
            max_seats_per_hold: 6,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by RUST_LOG)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.booking.hold_ttl_secs, 300);
        assert_eq!(cfg.booking.sweep_interval_secs, 60);
        assert_eq!(cfg.booking.max_seats_per_hold, 6);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [booking]
            hold_ttl_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(cfg.booking.hold_ttl_secs, 120);
        assert_eq!(cfg.booking.sweep_interval_secs, 60);
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn connection_url_wraps_plain_path() {
        let db = DatabaseSection {
            path: "./test.db".into(),
            max_connections: 1,
        };
        assert_eq!(db.connection_url(), "sqlite://./test.db?mode=rwc");

        let mem = DatabaseSection {
            path: "sqlite::memory:".into(),
            max_connections: 1,
        };
        assert_eq!(mem.connection_url(), "sqlite::memory:");
    }
}

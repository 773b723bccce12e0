//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wavekey.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use wavekey_adapter_ble::LinkConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Wireless-link settings.
    pub link: LinkConfig,
    /// Logging settings.
    pub log: LogConfig,
    /// Host-capability settings.
    pub host: HostConfig,
    /// Action-execution settings.
    pub executor: ExecutorConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (`RUST_LOG` syntax) for the tracing subscriber.
    pub filter: String,
    /// Activity-log retention in entries; `0` disables eviction.
    pub activity_capacity: usize,
}

/// Host-capability configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Directory screenshots are written to. Defaults to the user's
    /// desktop directory.
    pub screenshot_dir: Option<PathBuf>,
}

/// Action-execution configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Upper bound on a single host action, in seconds.
    pub action_timeout_secs: u64,
}

impl Config {
    /// Load configuration from `wavekey.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wavekey.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WAVEKEY_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("WAVEKEY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("WAVEKEY_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("WAVEKEY_DEVICE") {
            self.link.device_name = val;
        }
        if let Ok(val) = std::env::var("WAVEKEY_LOG") {
            self.log.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.log.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.link.device_name.is_empty() {
            return Err(ConfigError::Validation(
                "link.device_name must not be empty".to_string(),
            ));
        }
        if self.link.retry_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "link.retry_interval_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl LogConfig {
    /// Activity-log retention as an option; `0` means unbounded.
    #[must_use]
    pub fn activity_capacity(&self) -> Option<usize> {
        (self.activity_capacity > 0).then_some(self.activity_capacity)
    }
}

impl HostConfig {
    /// Resolved screenshot directory: configured value, then the user's
    /// desktop, then the system temp directory.
    #[must_use]
    pub fn screenshot_dir(&self) -> PathBuf {
        self.screenshot_dir
            .clone()
            .or_else(dirs::desktop_dir)
            .unwrap_or_else(std::env::temp_dir)
    }
}

impl ExecutorConfig {
    /// Upper bound on a single host action.
    #[must_use]
    pub fn action_timeout(&self) -> Duration {
        Duration::from_secs(self.action_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "wavekeyd=info,wavekey=info,tower_http=debug".to_string(),
            activity_capacity: 1024,
        }
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            action_timeout_secs: 30,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

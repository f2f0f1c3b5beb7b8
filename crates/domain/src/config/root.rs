use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::{LogFormat, LoggingConfig};
use super::server::ServerConfig;
use crate::Zone;

const LOCAL_CONFIG_PATH: &str = "loopy-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/loopy-dns/config.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for Loopy DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (address, zone)
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. loopy-dns.toml in current directory
    /// 3. /etc/loopy-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen_address {
            self.server.listen_address = listen;
        }
        if let Some(zone) = overrides.zone {
            self.server.zone = zone;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zone()?;

        let port = self
            .server
            .listen_address
            .trim()
            .rsplit_once(':')
            .map(|(_, port)| port)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "Listen address '{}' is missing a port",
                    self.server.listen_address
                ))
            })?;
        if port.parse::<u16>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Listen address '{}' has an invalid port",
                self.server.listen_address
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// The configured zone, `None` when queries are unrestricted.
    pub fn zone(&self) -> Result<Option<Zone>, ConfigError> {
        Zone::from_config(&self.server.zone).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_address: Option<String>,
    pub zone: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
}

use serde::{Deserialize, Serialize};

use super::check::CheckConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dnstamper.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnstamper/config.toml";

/// Main configuration structure for the dnstamper tool
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Hostnames and resolvers to compare
    #[serde(default)]
    pub check: CheckConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnstamper.toml in current directory
    /// 3. /etc/dnstamper/config.toml
    /// 4. Default configuration
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
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(hostnames) = overrides.hostnames {
            self.check.hostnames = hostnames;
        }
        if let Some(resolvers) = overrides.resolvers {
            self.check.resolvers = resolvers;
        }
        if let Some(control) = overrides.control_resolver {
            self.check.control_resolver = control;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check.hostnames.iter().all(|h| h.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "No hostnames configured".to_string(),
            ));
        }

        if self.check.resolvers.iter().all(|r| r.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "No resolvers configured".to_string(),
            ));
        }

        if self.check.control_resolver.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Control resolver cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub hostnames: Option<Vec<String>>,
    pub resolvers: Option<Vec<String>>,
    pub control_resolver: Option<String>,
    pub log_level: Option<String>,
}

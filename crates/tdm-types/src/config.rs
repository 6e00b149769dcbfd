//! Configuration loading for the term-document matrix tools.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! Settings only steer ambient behaviour such as logging; output formats
//! are fixed.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TdmError;

/// Levels accepted by `log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error, off)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (platform config dir, e.g. ~/.config/tdm-tools/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (TDM_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, TdmError> {
        let config_dir = ProjectDirs::from("", "", "tdm-tools")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| TdmError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // TDM_LOG_LEVEL -> log_level
        builder = builder.add_source(Environment::with_prefix("TDM").try_parsing(true));

        let settings: Settings = builder
            .build()
            .map_err(|e| TdmError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TdmError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply a CLI log level override, if given.
    pub fn with_log_level(mut self, log_level: Option<&str>) -> Result<Self, TdmError> {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), TdmError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(TdmError::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }
}

//! Layered configuration for the calculator CLI.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed `CALCULATOR__`, with `__` between
//!    nesting levels (`CALCULATOR__LOGGING__LEVEL=debug` sets `logging.level`)
//! 4. command-line overrides (`-v`, `--json`)

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Accepted values for `logging.level`, matched case-insensitively.
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Rendering used for log events and for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (off, error, warn, info, debug, trace), used when
    /// `RUST_LOG` is not set. Only level names are accepted; per-target
    /// directives and numeric levels belong in `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log event rendering.
    pub format: Format,
}

fn default_level() -> String {
    "warn".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: Format::default(),
        }
    }
}

/// Result output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Format,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] when `path` is given but is not a
    /// file, [`ConfigError::Load`] when a source cannot be parsed, and
    /// [`ConfigError::InvalidLogLevel`] when the merged level is unknown.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialization alone cannot reject.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLogLevel`] if `logging.level` is not a
    /// recognised level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.logging.level))
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.logging.level.clone()))
        }
    }

    /// Apply command-line overrides on top of the loaded configuration.
    ///
    /// `verbose` replaces the log level (`1` info, `2` debug, `3+` trace);
    /// `json` forces JSON result output.
    pub fn apply_cli_overrides(&mut self, verbose: u8, json: bool) {
        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
        if json {
            self.output.format = Format::Json;
        }
    }
}

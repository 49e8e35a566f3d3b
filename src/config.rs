//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/kafka-admin/kafka-admin.toml`, or the file given by `--config`
//! 3. Environment variables: `KAFKA_ADMIN_*` prefix

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Prefix of environment variable overrides, e.g. `KAFKA_ADMIN_API_URL`.
pub const ENV_PREFIX: &str = "KAFKA_ADMIN";

/// Unified configuration for kafka-admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the management API
    pub api_url: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".into(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Get the XDG config directory for kafka-admin.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "kafka-admin").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("kafka-admin.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global file when given
    ///   and must then exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_file, None)
    }

    /// Like `load`, with environment variables taken from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("api_url", defaults.api_url.clone())
            .map_err(config_err)?
            .set_default("timeout_secs", defaults.timeout_secs)
            .map_err(config_err)?;

        match config_file {
            Some(path) => {
                debug!("config file: {}", path.display());
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    debug!("global config file: {}", global_path.display());
                    builder = builder.add_source(
                        File::from(global_path)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.normalize()?;
        Ok(settings)
    }

    fn normalize(&mut self) -> Result<(), ApplicationError> {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApplicationError::Config {
                message: "api_url must not be empty".to_string(),
            });
        }
        self.api_url = trimmed.to_string();
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.token = None;
        }
        Ok(())
    }

    /// Show the effective configuration as TOML, token masked.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        let mut shown = self.clone();
        if shown.token.is_some() {
            shown.token = Some("********".to_string());
        }
        toml::to_string_pretty(&shown).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# kafka-admin configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/kafka-admin/kafka-admin.toml (or --config <FILE>)
#   Env:  KAFKA_ADMIN_* environment variables (explicit overrides)

# Base URL of the management API
# api_url = "http://localhost:5000"

# Bearer token (prefer KAFKA_ADMIN_TOKEN over storing it here)
# token = "..."

# Request timeout in seconds
# timeout_secs = 30
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

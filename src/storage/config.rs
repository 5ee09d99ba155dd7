//! Configuration handling for Launchpad
//!
//! Configuration is stored in `{config_dir}/config.toml`. The config
//! directory is `$LAUNCHPAD_CONFIG_DIR` when set, otherwise the platform
//! directory (e.g. `~/.config/launchpad`). `$LAUNCHPAD_GRAPHQL_ENDPOINT`
//! overrides the endpoint from the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LAUNCHPAD_CONFIG_DIR";

/// Environment variable overriding the GraphQL endpoint
pub const ENDPOINT_ENV: &str = "LAUNCHPAD_GRAPHQL_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "https://api.spacex.land/graphql/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the interactive UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL endpoint for launch data
    pub graphql_endpoint: String,

    /// How many launches to request by default
    pub launches_limit: u32,

    /// Output format when `--format` is not given
    pub default_format: OutputFormat,

    /// Interactive UI settings
    pub tui: TuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_ENDPOINT.to_string(),
            launches_limit: 12,
            default_format: OutputFormat::Text,
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location, applying env overrides
    pub fn load() -> Result<Self> {
        let dir = Self::config_dir()?;
        let mut config = Self::load_from(&dir)?;

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.graphql_endpoint = endpoint.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Loads `config.toml` from `dir`, or defaults when it does not exist
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }

    /// Returns the config directory
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        ProjectDirs::from("dev", "launchpad", "launchpad")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::NoConfigDir.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.graphql_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.launches_limit, 12);
        assert_eq!(config.default_format, OutputFormat::Text);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
launches_limit = 5
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.launches_limit, 5);
        assert_eq!(config.graphql_endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
graphql_endpoint = "http://localhost:4000/graphql"
launches_limit = 3
default_format = "json"

[tui]
tick_rate_ms = 100
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.graphql_endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.default_format, OutputFormat::Json);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn written_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            launches_limit: 4,
            default_format: OutputFormat::Json,
            ..Config::default()
        };

        fs::write(
            dir.path().join("config.toml"),
            toml::to_string_pretty(&config).unwrap(),
        )
        .unwrap();
        assert_eq!(Config::load_from(dir.path()).unwrap(), config);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "default_format = \"yaml\"").unwrap();

        assert!(Config::load_from(dir.path()).is_err());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "launches_limit = \"many\"").unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}

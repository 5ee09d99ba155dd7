//! # Storage Layer
//!
//! The only state Launchpad keeps between runs. Todos and the session are
//! in-memory and never written here.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `{config_dir}/config.toml` |
//! | Bearer token | Plain text | `{config_dir}/auth-token` |
//!
//! ## Key Types
//!
//! - [`Config`] - Endpoint, default launch limit and UI settings
//! - [`TokenStore`] - Read/write/clear the bearer token

mod config;
mod token;

pub use config::{Config, ConfigError, TuiConfig, CONFIG_DIR_ENV, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use token::{mask_token, TokenStore};

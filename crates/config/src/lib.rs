//! Configuration management for the contract analyzer
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{env}.toml)
//! - Environment variables (CONTRACT_ANALYZER_ prefix)
//!
//! Keyword rule tables for risk scoring live with the analysis crate and can
//! be overridden via `analysis.rules_path`.

pub mod settings;

pub use settings::{
    load_settings, AnalysisSettings, AuditSettings, RuntimeEnvironment, ServerConfig, Settings,
    SummarizerProvider, SummarizerSettings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

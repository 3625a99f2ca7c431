//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Clause analysis configuration
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Optional external summarizer configuration
    #[serde(default)]
    pub summarizer: SummarizerSettings,

    /// Audit record configuration
    #[serde(default)]
    pub audit: AuditSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether CORS restrictions are enforced
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins; empty means localhost-only default
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_enabled: true,
            cors_origins: Vec::new(),
            max_upload_bytes: default_max_upload_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Clause analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// High-risk clause count above which the overall verdict is High
    #[serde(default = "default_risk_threshold")]
    pub high_threshold: usize,

    /// Medium-risk clause count above which the overall verdict is Medium
    #[serde(default = "default_risk_threshold")]
    pub medium_threshold: usize,

    /// Optional TOML file overriding the built-in keyword rule tables
    #[serde(default)]
    pub rules_path: Option<String>,
}

fn default_risk_threshold() -> usize {
    2
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            high_threshold: default_risk_threshold(),
            medium_threshold: default_risk_threshold(),
            rules_path: None,
        }
    }
}

/// Summarizer providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    /// Anthropic Messages API
    Claude,
    /// Deterministic canned strings, no network
    #[default]
    Disabled,
}

/// Optional external summarizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSettings {
    /// Which provider to use
    #[serde(default)]
    pub provider: SummarizerProvider,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Sampling temperature (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_summarizer_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_model() -> String {
    "haiku".to_string()
}

fn default_max_tokens() -> usize {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

fn default_summarizer_timeout_secs() -> u64 {
    30
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            provider: SummarizerProvider::Disabled,
            api_key_env: default_api_key_env(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_summarizer_timeout_secs(),
        }
    }
}

/// Audit record configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Whether an audit record is written per analysis
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory audit records are written to
    #[serde(default = "default_audit_dir")]
    pub dir: String,
}

fn default_audit_dir() -> String {
    "audit".to_string()
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_audit_dir(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_analysis()?;
        self.validate_summarizer()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port must be non-zero".to_string(),
            });
        }

        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_upload_bytes".to_string(),
                message: "Upload limit must be non-zero".to_string(),
            });
        }

        if self.server.max_upload_bytes > 100 * 1024 * 1024 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_upload_bytes".to_string(),
                message: "Upload limit too large (maximum 100MB)".to_string(),
            });
        }

        Ok(())
    }

    fn validate_analysis(&self) -> Result<(), ConfigError> {
        // Thresholds are clause counts; anything beyond this is a typo
        if self.analysis.high_threshold > 10_000 || self.analysis.medium_threshold > 10_000 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.thresholds".to_string(),
                message: "Risk thresholds out of range (maximum 10000)".to_string(),
            });
        }

        Ok(())
    }

    fn validate_summarizer(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.summarizer.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "summarizer.temperature".to_string(),
                message: format!(
                    "Must be between 0.0 and 1.0, got {}",
                    self.summarizer.temperature
                ),
            });
        }

        if self.summarizer.timeout_secs == 0 || self.summarizer.timeout_secs > 300 {
            return Err(ConfigError::InvalidValue {
                field: "summarizer.timeout_secs".to_string(),
                message: "Timeout must be between 1 and 300 seconds".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env}.toml > config/default.toml > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("CONTRACT_ANALYZER")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

//! Claude summarizer backend
//!
//! Implements the Anthropic Messages API for contract summaries and clause
//! suggestions. Plain text in, plain text out: no tool use, no streaming.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use contract_analyzer_config::SummarizerSettings;
use contract_analyzer_core::{Result, Summarizer};

use crate::LlmError;

/// Claude model variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaudeModel {
    /// Fastest, good for summarization
    #[default]
    Haiku3_5,
    /// Fast and capable
    Sonnet4,
    /// Most capable, best for complex documents
    Opus4_5,
}

impl ClaudeModel {
    pub fn model_id(&self) -> &'static str {
        match self {
            ClaudeModel::Haiku3_5 => "claude-3-5-haiku-20241022",
            ClaudeModel::Sonnet4 => "claude-sonnet-4-20250514",
            ClaudeModel::Opus4_5 => "claude-opus-4-5-20251101",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "haiku" | "haiku-3.5" | "claude-3-5-haiku-20241022" => Some(ClaudeModel::Haiku3_5),
            "sonnet" | "sonnet-4" | "claude-sonnet-4-20250514" => Some(ClaudeModel::Sonnet4),
            "opus" | "opus-4.5" | "claude-opus-4-5-20251101" => Some(ClaudeModel::Opus4_5),
            _ => None,
        }
    }
}

/// Configuration for the Claude backend
#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    /// API key (from ANTHROPIC_API_KEY or direct)
    pub api_key: String,
    /// Model to use
    pub model: ClaudeModel,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Temperature (0.0 - 1.0)
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
    /// API endpoint (for testing or proxy)
    pub endpoint: String,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            model: ClaudeModel::Haiku3_5,
            max_tokens: 1024,
            temperature: 0.3,
            timeout: Duration::from_secs(30),
            endpoint: "https://api.anthropic.com".to_string(),
        }
    }
}

impl ClaudeConfig {
    /// Create config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Build config from application settings
    ///
    /// The API key is read from the environment variable named in the
    /// settings; an unset variable yields an empty key, which
    /// [`ClaudeSummarizer::new`] rejects.
    pub fn from_settings(settings: &SummarizerSettings) -> Self {
        Self {
            api_key: std::env::var(&settings.api_key_env).unwrap_or_default(),
            model: ClaudeModel::from_str(&settings.model).unwrap_or_default(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout: Duration::from_secs(settings.timeout_secs),
            endpoint: "https://api.anthropic.com".to_string(),
        }
    }

    /// Set model
    pub fn with_model(mut self, model: ClaudeModel) -> Self {
        self.model = model;
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }
}

/// Summarizer backed by the Anthropic Messages API
pub struct ClaudeSummarizer {
    config: ClaudeConfig,
    client: Client,
}

impl ClaudeSummarizer {
    /// Create a new Claude summarizer
    pub fn new(config: ClaudeConfig) -> std::result::Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::Configuration(
                "API key not set. Set it via environment or config.".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn generate(&self, prompt: &str) -> std::result::Result<String, LlmError> {
        let request = ClaudeRequest {
            model: self.config.model.model_id().to_string(),
            max_tokens: self.config.max_tokens,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(self.config.temperature),
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.endpoint))
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let response: ClaudeApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        response
            .content
            .into_iter()
            .find_map(|block| block.text)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("No text block in response".to_string()))
    }
}

#[async_trait]
impl Summarizer for ClaudeSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = format!("Summarize this contract in simple business English:\n{}", text);
        Ok(self.generate(&prompt).await?)
    }

    async fn suggest(&self, clause: &str) -> Result<String> {
        let prompt = format!("Suggest a safer alternative for this clause:\n{}", clause);
        Ok(self.generate(&prompt).await?)
    }

    fn is_external(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: usize,
    messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ClaudeApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

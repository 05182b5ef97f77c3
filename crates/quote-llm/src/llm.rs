//! LLM client for quote generation.

use async_trait::async_trait;
use quote_types::{env_first, env_or, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// LLM client error.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM error: {0}")]
    Other(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Message for LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters sent with each completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 50,
            temperature: 1.5,
        }
    }
}

impl GenerationParams {
    /// Read `LLM_MAX_TOKENS` and `LLM_TEMPERATURE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_tokens: env_or("LLM_MAX_TOKENS", defaults.max_tokens)?,
            temperature: env_or("LLM_TEMPERATURE", defaults.temperature)?,
        })
    }
}

/// Request to LLM chat completion.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

/// Response from LLM chat completion.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// LLM client trait for text generation.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete with conversation messages; returns the first choice's content.
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, LlmError>;
}

#[async_trait]
impl<T: LlmClient + ?Sized> LlmClient for std::sync::Arc<T> {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        (**self).complete(messages, params).await
    }
}

/// Connection settings for [`OpenAiLlmClient`].
#[derive(Clone)]
pub struct OpenAiLlmConfig {
    /// API endpoint URL.
    pub api_url: String,
    /// API key. Requests go out unauthenticated when absent.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for OpenAiLlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: None,
            model: "gpt-4-turbo".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiLlmConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            api_url: env_or("LLM_API_URL", defaults.api_url)?,
            api_key: env_first(&["OPENAI_API_KEY", "LLM_API_KEY"]),
            model: env_or("LLM_MODEL", defaults.model)?,
            timeout: Duration::from_secs(env_or("LLM_TIMEOUT_SECS", defaults.timeout.as_secs())?),
        })
    }
}

impl fmt::Debug for OpenAiLlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiLlmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// OpenAI-compatible LLM client.
pub struct OpenAiLlmClient {
    client: reqwest::Client,
    config: OpenAiLlmConfig,
}

impl OpenAiLlmClient {
    pub fn new(config: OpenAiLlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

impl fmt::Debug for OpenAiLlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiLlmClient")
            .field("api_url", &self.config.api_url)
            .field("model", &self.config.model)
            .finish()
    }
}

/// Extract the first choice's content, untouched, from a raw completion body.
fn parse_completion(body: &str) -> Result<String, LlmError> {
    let completion: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::Other("no choices returned".to_string()))
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let mut req = self.client.post(&self.config.api_url).json(&request);
        if let Some(ref key) = self.config.api_key {
            req = req.bearer_auth(key);
        }
        let response = req.send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, model = %self.config.model, "chat completion returned");
        if !status.is_success() {
            return Err(LlmError::Api(format!("status: {}, body: {}", status, body)));
        }

        parse_completion(&body)
    }
}

//! LLM provider trait: common interface for all remote classifiers.
//!
//! Each provider implements `RemoteClassifier`. `MessageClassifier` only
//! ever talks to this trait, so a provider can be swapped (or faked in
//! tests) without touching the classification logic.

use super::config::ClassifierConfig;
use super::error::RemoteError;
use super::{anthropic, gemini, openai};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hosted model that turns one prompt into one text reply.
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    /// Provider id, for logging.
    fn name(&self) -> &'static str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Send a single user-role prompt and return the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError>;
}

/// The supported hosted providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Anthropic, ProviderKind::Gemini];

    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn env_key(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => openai::DEFAULT_MODEL,
            ProviderKind::Anthropic => anthropic::DEFAULT_MODEL,
            ProviderKind::Gemini => gemini::DEFAULT_MODEL,
        }
    }

    pub fn default_endpoint(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => openai::DEFAULT_ENDPOINT,
            ProviderKind::Anthropic => anthropic::DEFAULT_ENDPOINT,
            ProviderKind::Gemini => gemini::DEFAULT_ENDPOINT,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

/// Build the HTTP-backed remote classifier for a configuration.
pub fn build_remote(config: &ClassifierConfig) -> Result<Box<dyn RemoteClassifier>, RemoteError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    Ok(match config.provider {
        ProviderKind::OpenAi => Box::new(openai::OpenAiClassifier::new(client, config.clone())),
        ProviderKind::Anthropic => Box::new(anthropic::AnthropicClassifier::new(client, config.clone())),
        ProviderKind::Gemini => Box::new(gemini::GeminiClassifier::new(client, config.clone())),
    })
}

/// Provider metadata shown by `support-triage providers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub env_key: String,
    pub default_model: String,
}

/// All known providers and their display info.
pub fn all_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            id: "openai".to_string(),
            name: "OpenAI-compatible chat completions".to_string(),
            env_key: ProviderKind::OpenAi.env_key().to_string(),
            default_model: ProviderKind::OpenAi.default_model().to_string(),
        },
        ProviderInfo {
            id: "anthropic".to_string(),
            name: "Anthropic Messages API".to_string(),
            env_key: ProviderKind::Anthropic.env_key().to_string(),
            default_model: ProviderKind::Anthropic.default_model().to_string(),
        },
        ProviderInfo {
            id: "gemini".to_string(),
            name: "Google Gemini generateContent".to_string(),
            env_key: ProviderKind::Gemini.env_key().to_string(),
            default_model: ProviderKind::Gemini.default_model().to_string(),
        },
    ]
}

/// Check if a provider has an API key, in its env var or the OS keychain.
pub fn is_provider_configured(provider_id: &str) -> bool {
    let Ok(kind) = provider_id.parse::<ProviderKind>() else {
        return false;
    };
    crate::settings::api_key_for(kind).is_some()
}

/// Truncate an error body for logs and error values.
pub(crate) fn truncate_body(body: &str) -> String {
    body[..super::reply::floor_char_boundary(body, 200)].to_string()
}

/// Turn a non-2xx response into `RemoteError::Api`.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Api {
        status: status.as_u16(),
        body: truncate_body(&body),
    })
}

//! OpenAI-compatible chat-completion provider (the default).
//!
//! Works against any server that speaks `POST /chat/completions` with
//! bearer auth, so `TRIAGE_ENDPOINT` can point it at a self-hosted gateway.

use super::config::ClassifierConfig;
use super::error::RemoteError;
use super::provider::{check_status, RemoteClassifier};
use async_trait::async_trait;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl OpenAiClassifier {
    pub fn new(client: reqwest::Client, config: ClassifierConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RemoteClassifier for OpenAiClassifier {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(RemoteError::MissingApiKey { provider: "openai" })?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.endpoint))
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.config.model,
                "temperature": self.config.temperature,
                "max_tokens": self.config.max_tokens,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await?;

        let body: serde_json::Value = check_status(response).await?.json().await?;
        extract_text(&body)
    }
}

/// Pull `choices[0].message.content` out of a chat-completion response.
fn extract_text(body: &serde_json::Value) -> Result<String, RemoteError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| RemoteError::Envelope("missing choices[0].message.content".to_string()))
}

//! Anthropic Messages API provider.
//!
//! Non-streaming: the reply is a handful of tokens, so the whole response is
//! read at once and the text pulled from `content[0].text`.

use super::config::ClassifierConfig;
use super::error::RemoteError;
use super::provider::{check_status, RemoteClassifier};
use async_trait::async_trait;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl AnthropicClassifier {
    pub fn new(client: reqwest::Client, config: ClassifierConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RemoteClassifier for AnthropicClassifier {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(RemoteError::MissingApiKey { provider: "anthropic" })?;

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.endpoint))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.config.model,
                "max_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await?;

        let body: serde_json::Value = check_status(response).await?.json().await?;

        if let Some(usage) = body.get("usage") {
            log::debug!(
                "[LLM] Tokens: {} in / {} out",
                usage["input_tokens"].as_u64().unwrap_or(0),
                usage["output_tokens"].as_u64().unwrap_or(0)
            );
        }

        extract_text(&body)
    }
}

/// Extract the text of the first content block.
fn extract_text(body: &serde_json::Value) -> Result<String, RemoteError> {
    body["content"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| RemoteError::Envelope("missing content[0].text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_text_block() {
        let body = json!({
            "type": "message",
            "content": [{"type": "text", "text": "```json\n{}\n```"}],
            "usage": {"input_tokens": 120, "output_tokens": 30}
        });
        assert_eq!(extract_text(&body).unwrap(), "```json\n{}\n```");
    }

    #[test]
    fn error_payload_is_an_envelope_error() {
        let body = json!({"type": "error", "error": {"type": "overloaded_error"}});
        assert!(matches!(extract_text(&body), Err(RemoteError::Envelope(_))));
    }
}

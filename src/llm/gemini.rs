//! Gemini provider: `generateContent` via the Google AI API.
//!
//! Key differences from the other providers:
//! - API key in the URL query param, not a header
//! - `responseMimeType: "application/json"` asks for bare JSON, though
//!   fences are still stripped downstream in case the model ignores it
//! - Text lives in `candidates[0].content.parts[0].text`

use super::config::ClassifierConfig;
use super::error::RemoteError;
use super::provider::{check_status, RemoteClassifier};
use async_trait::async_trait;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

pub struct GeminiClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl GeminiClassifier {
    pub fn new(client: reqwest::Client, config: ClassifierConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RemoteClassifier for GeminiClassifier {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        let api_key = self
            .config
            .api_key()
            .ok_or(RemoteError::MissingApiKey { provider: "gemini" })?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{ "text": prompt }]
                    }
                ],
                "generationConfig": {
                    "maxOutputTokens": self.config.max_tokens,
                    "temperature": self.config.temperature,
                    "responseMimeType": "application/json"
                }
            }))
            .send()
            .await?;

        let body: serde_json::Value = check_status(response).await?.json().await?;

        if let Some(usage) = body.get("usageMetadata") {
            log::debug!(
                "[LLM] Tokens: {} in / {} out",
                usage["promptTokenCount"].as_u64().unwrap_or(0),
                usage["candidatesTokenCount"].as_u64().unwrap_or(0)
            );
        }

        extract_gemini_text(&body)
            .ok_or_else(|| RemoteError::Envelope("missing candidates[0].content.parts[0].text".to_string()))
    }
}

/// Gemini format: candidates[0].content.parts[0].text
fn extract_gemini_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

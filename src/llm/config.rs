//! Client configuration passed to `MessageClassifier` at construction.
//!
//! Nothing in here reads the environment; see `settings::config_from_env`
//! for that.

use super::prompts::{DEFAULT_TEMPERATURE, MAX_TOKENS};
use super::provider::ProviderKind;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    /// Base URL of the provider API, without a trailing slash.
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// `None` means the request may wait indefinitely.
    pub timeout: Option<Duration>,
}

impl ClassifierConfig {
    /// Defaults for a provider, with no API key.
    pub fn for_provider(provider: ProviderKind) -> Self {
        Self {
            provider,
            api_key: None,
            endpoint: provider.default_endpoint().to_string(),
            model: provider.default_model().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: MAX_TOKENS,
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::for_provider(ProviderKind::OpenAi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_provider() {
        let config = ClassifierConfig::for_provider(ProviderKind::Anthropic);
        assert_eq!(config.model, ProviderKind::Anthropic.default_model());
        assert_eq!(config.endpoint, ProviderKind::Anthropic.default_endpoint());
        assert!(config.api_key().is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = ClassifierConfig::default().with_api_key("   ");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn endpoint_trailing_slash_is_dropped() {
        let config = ClassifierConfig::default().with_endpoint("http://127.0.0.1:9000/v1/");
        assert_eq!(config.endpoint, "http://127.0.0.1:9000/v1");
    }
}

//! MessageClassifier: remote classification with a heuristic fallback.
//!
//! One remote attempt per call, no retry:
//! - request succeeded → parse + normalize the reply (even if it is junk)
//! - request failed in any way → keyword heuristics
//!
//! `classify` never returns an error.

use super::config::ClassifierConfig;
use super::error::RemoteError;
use super::normalize::normalize;
use super::prompts;
use super::provider::{self, RemoteClassifier};
use super::reply;
use super::types::{ClassificationResult, Source};
use crate::heuristics;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;

/// Ask a remote model to classify a message and normalize its reply.
///
/// Only transport/API failures are errors; a reply that is not usable JSON
/// still produces a result with default fields.
pub async fn classify_remote(
    remote: &dyn RemoteClassifier,
    message: &str,
) -> Result<ClassificationResult, RemoteError> {
    let prompt = prompts::build_classify_message(message);

    log::info!("[LLM] Provider: {}", remote.name());
    log::info!("[LLM] Model: {}", remote.model());

    let start = std::time::Instant::now();
    let text = remote.complete(&prompt).await?;
    log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

    let raw = reply::parse_reply(&text);
    Ok(normalize(&raw))
}

pub struct MessageClassifier {
    remote: Option<Box<dyn RemoteClassifier>>,
}

impl MessageClassifier {
    /// Build a classifier backed by the configured hosted provider.
    ///
    /// If the HTTP client cannot be built the classifier runs heuristics only.
    pub fn new(config: &ClassifierConfig) -> Self {
        match provider::build_remote(config) {
            Ok(remote) => Self { remote: Some(remote) },
            Err(e) => {
                log::error!("[CLASSIFY] Could not build {} client: {} — heuristics only", config.provider, e);
                Self { remote: None }
            }
        }
    }

    /// Use a caller-supplied remote model.
    pub fn with_remote(remote: Box<dyn RemoteClassifier>) -> Self {
        Self { remote: Some(remote) }
    }

    /// Never touches the network.
    pub fn offline() -> Self {
        Self { remote: None }
    }

    /// Classify a support message. Always returns a valid result.
    pub async fn classify(&self, message: &str) -> ClassificationResult {
        self.classify_with_source(message).await.0
    }

    /// Like `classify`, also reporting which path produced the result.
    pub async fn classify_with_source(&self, message: &str) -> (ClassificationResult, Source) {
        let Some(remote) = self.remote.as_deref() else {
            log::info!("[CLASSIFY] Offline — using heuristics");
            return (heuristics::classify_heuristic(message), Source::Heuristic);
        };

        let attempt = AssertUnwindSafe(classify_remote(remote, message))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(RemoteError::Panicked(panic_message(panic.as_ref()))));

        match attempt {
            Ok(result) => {
                log::info!(
                    "[CLASSIFY] Remote: category={}, sentiment={}, priority={}",
                    result.category, result.sentiment, result.priority_score
                );
                (result, Source::Remote)
            }
            Err(e) => {
                log::warn!("[CLASSIFY] Remote classification failed: {} — falling back to heuristics", e);
                let result = heuristics::classify_heuristic(message);
                log::info!(
                    "[CLASSIFY] Heuristic: category={}, sentiment={}, priority={}",
                    result.category, result.sentiment, result.priority_score
                );
                (result, Source::Heuristic)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

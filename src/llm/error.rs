//! Failures of the remote classification path.
//!
//! Every variant sends `MessageClassifier` to the heuristic fallback; none
//! of them reach the caller of `classify`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no API key configured for {provider}")]
    MissingApiKey { provider: &'static str },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("unreadable response envelope: {0}")]
    Envelope(String),

    #[error("remote classification panicked: {0}")]
    Panicked(String),
}

//! LLM domain: support-message classification.
//!
//! Public API for the classification core.
//! External code should only use the items exported here.
//!
//! Providers (all behind `RemoteClassifier`):
//!   - OpenAI-compatible chat completions (openai.rs, default)
//!   - Anthropic Messages (anthropic.rs)
//!   - Google Gemini (gemini.rs)
//!
//! Shared:
//!   - reply.rs      fence stripping + lenient JSON parsing
//!   - normalize.rs  coercion of the parsed reply into a ClassificationResult
//!   - provider.rs   the provider trait, provider metadata, client construction

mod anthropic;
mod classify;
pub mod config;
pub mod error;
mod gemini;
pub mod normalize;
mod openai;
pub mod prompts;
pub mod provider;
pub mod reply;
pub mod types;

pub use classify::{classify_remote, MessageClassifier};
pub use config::ClassifierConfig;
pub use error::RemoteError;
pub use provider::{ProviderKind, RemoteClassifier};
pub use types::{Category, ClassificationResult, Sentiment, Source};

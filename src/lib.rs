//! support-triage: classify customer-support messages.
//!
//! Category, sentiment and a 1–5 priority come from a hosted LLM, with a
//! keyword heuristic standing in whenever the model cannot be reached.
//!
//! Modules:
//!   - llm          the classification core (MessageClassifier, providers)
//!   - heuristics   the offline rule chain
//!   - triage       urgency tier + recommended action
//!   - history      local JSON log of past results
//!   - settings     env files, provider resolution, API keys

pub mod heuristics;
pub mod history;
pub mod llm;
pub mod settings;
pub mod triage;

pub use llm::{
    Category, ClassificationResult, ClassifierConfig, MessageClassifier, ProviderKind, Sentiment, Source,
};
pub use triage::{RecommendedAction, TriageReport, Urgency};

/// Classify one message and wrap the verdict in a TriageReport.
pub async fn triage_message(classifier: &MessageClassifier, message: &str) -> TriageReport {
    let (result, source) = classifier.classify_with_source(message).await;
    TriageReport::new(message, result, source)
}

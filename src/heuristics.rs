//! Keyword heuristics for support messages.
//!
//! Used when the hosted model cannot be reached. The rules run in a fixed
//! order over the lower-cased text and the first match wins, so the output
//! depends only on the message. All matching is plain substring matching.

use crate::llm::types::{Category, ClassificationResult, Sentiment, MAX_PRIORITY};

const ANGER_WORDS: &[&str] = &[
    "angry", "furious", "outraged", "unacceptable", "worst", "terrible",
    "horrible", "!!!", "urgent", "asap", "immediately",
];

const BILLING_WORDS: &[&str] = &["bill", "payment", "charge", "invoice", "subscription", "refund"];

const TECHNICAL_WORDS: &[&str] = &[
    "bug", "error", "broken", "not working", "crash", "down", "server",
    "loading", "issue",
];

const FEATURE_WORDS: &[&str] = &["feature", "improve", "suggestion", "would like to see", "enhancement"];

const GRATITUDE_WORDS: &[&str] = &["thank", "thanks", "appreciate"];

/// A "thank you, but…" message is a complaint, not praise.
const CONTRAST_WORDS: &[&str] = &["but", "however"];

const QUESTION_WORDS: &[&str] = &["how", "what", "?", "can i", "is there"];

pub const BILLING_REASONING: &str =
    "Message mentions billing keywords such as payments, charges, invoices or refunds.";
pub const TECHNICAL_REASONING: &str =
    "Message describes technical difficulties such as errors, crashes or outages.";
pub const FEATURE_REASONING: &str =
    "Message requests a new feature or an enhancement to the product.";
pub const GRATITUDE_REASONING: &str =
    "Customer is expressing satisfaction or thanks; no action required.";
pub const QUESTION_REASONING: &str =
    "Message appears to be a general question about the product or service.";
pub const DEFAULT_REASONING: &str =
    "Message intent is ambiguous; manual review is recommended.";

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Returns true if the message reads as angry.
///
/// Any anger keyword, or two or more exclamation marks anywhere.
pub fn detect_anger(lower: &str) -> bool {
    contains_any(lower, ANGER_WORDS) || lower.matches('!').count() >= 2
}

/// Classify a message without any network access.
pub fn classify_heuristic(message: &str) -> ClassificationResult {
    let lower = message.to_lowercase();

    let angry = detect_anger(&lower);
    let sentiment = if angry { Sentiment::Angry } else { Sentiment::Neutral };
    let base_priority: u8 = if angry { 4 } else { 2 };

    let verdict = |category, sentiment, priority_score, reasoning: &str| ClassificationResult {
        category,
        sentiment,
        priority_score,
        reasoning: reasoning.to_string(),
    };

    if contains_any(&lower, BILLING_WORDS) {
        return verdict(
            Category::BillingIssue,
            sentiment,
            (base_priority + 1).min(MAX_PRIORITY),
            BILLING_REASONING,
        );
    }

    if contains_any(&lower, TECHNICAL_WORDS) {
        let priority = if angry { MAX_PRIORITY } else { (base_priority + 2).min(MAX_PRIORITY) };
        return verdict(Category::TechnicalProblem, sentiment, priority, TECHNICAL_REASONING);
    }

    if contains_any(&lower, FEATURE_WORDS) {
        return verdict(Category::FeatureRequest, sentiment, base_priority, FEATURE_REASONING);
    }

    if contains_any(&lower, GRATITUDE_WORDS) && !contains_any(&lower, CONTRAST_WORDS) {
        return verdict(Category::GeneralInquiry, Sentiment::Neutral, 1, GRATITUDE_REASONING);
    }

    if contains_any(&lower, QUESTION_WORDS) {
        return verdict(Category::GeneralInquiry, sentiment, base_priority, QUESTION_REASONING);
    }

    log::debug!("[HEURISTIC] No rule matched — defaulting to General Inquiry");
    verdict(Category::GeneralInquiry, sentiment, base_priority, DEFAULT_REASONING)
}

//! Urgency tiers and canned response actions.
//!
//! Turns a ClassificationResult into what a support agent acts on: a
//! Low / Medium / High urgency badge and one suggested next step.

use crate::llm::types::{Category, ClassificationResult, Sentiment, Source};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Coarse urgency derived from the 1–5 priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Thresholds: 1-2=Low, 3=Medium, 4-5=High.
pub fn urgency_for(priority_score: u8) -> Urgency {
    match priority_score {
        0..=2 => Urgency::Low,
        3 => Urgency::Medium,
        _ => Urgency::High,
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "Low"),
            Urgency::Medium => write!(f, "Medium"),
            Urgency::High => write!(f, "High"),
        }
    }
}

/// A canned next step for the agent handling the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub id: String,
    pub label: String,
    pub description: String,
}

fn action(id: &str, label: &str, description: &str) -> RecommendedAction {
    RecommendedAction {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Pick the canned action for a result.
///
/// An angry customer at High urgency is escalated regardless of category.
pub fn recommend_action(result: &ClassificationResult) -> RecommendedAction {
    if result.sentiment == Sentiment::Angry && urgency_for(result.priority_score) == Urgency::High {
        return action(
            "escalate",
            "Escalate to Senior Agent",
            "Apologize, acknowledge the frustration and hand off to a senior agent right away.",
        );
    }

    match &result.category {
        Category::BillingIssue => action(
            "review_billing",
            "Review Billing",
            "Check the customer's recent charges and invoices, then reply with the billing details.",
        ),
        Category::TechnicalProblem => action(
            "open_ticket",
            "Open Technical Ticket",
            "Collect device, version and reproduction steps and file a ticket with engineering.",
        ),
        Category::FeatureRequest => action(
            "log_feature_request",
            "Log Feature Request",
            "Thank the customer and add the request to the product backlog.",
        ),
        Category::GeneralInquiry if result.priority_score == 1 => action(
            "send_thanks",
            "Send Thank-You Reply",
            "Reply with a short thank-you; no follow-up needed.",
        ),
        Category::GeneralInquiry => action(
            "send_faq",
            "Answer from FAQ",
            "Reply with the matching help-center article or a short direct answer.",
        ),
        Category::Unknown | Category::Other(_) => action(
            "manual_review",
            "Manual Review",
            "Read the message and route it to the right team by hand.",
        ),
    }
}

/// One classified message, as stored in the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub message: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
    pub urgency: Urgency,
    pub recommended_action: RecommendedAction,
    pub source: Source,
}

impl TriageReport {
    pub fn new(message: &str, result: ClassificationResult, source: Source) -> Self {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::at(timestamp, message, result, source)
    }

    /// Build a report with an explicit timestamp.
    pub fn at(timestamp: u64, message: &str, result: ClassificationResult, source: Source) -> Self {
        Self {
            id: report_id(timestamp, message),
            timestamp,
            message: message.to_string(),
            urgency: urgency_for(result.priority_score),
            recommended_action: recommend_action(&result),
            result,
            source,
        }
    }
}

fn report_id(timestamp: u64, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_be_bytes());
    hasher.update(message.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(category: Category, sentiment: Sentiment, priority_score: u8) -> ClassificationResult {
        ClassificationResult {
            category,
            sentiment,
            priority_score,
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(urgency_for(1), Urgency::Low);
        assert_eq!(urgency_for(2), Urgency::Low);
        assert_eq!(urgency_for(3), Urgency::Medium);
        assert_eq!(urgency_for(4), Urgency::High);
        assert_eq!(urgency_for(5), Urgency::High);
    }

    #[test]
    fn angry_high_priority_escalates() {
        let r = result(Category::BillingIssue, Sentiment::Angry, 5);
        assert_eq!(recommend_action(&r).id, "escalate");
    }

    #[test]
    fn angry_medium_priority_follows_category() {
        let r = result(Category::BillingIssue, Sentiment::Angry, 3);
        assert_eq!(recommend_action(&r).id, "review_billing");
    }

    #[test]
    fn category_actions() {
        assert_eq!(recommend_action(&result(Category::TechnicalProblem, Sentiment::Neutral, 4)).id, "open_ticket");
        assert_eq!(recommend_action(&result(Category::FeatureRequest, Sentiment::Neutral, 2)).id, "log_feature_request");
        assert_eq!(recommend_action(&result(Category::GeneralInquiry, Sentiment::Neutral, 1)).id, "send_thanks");
        assert_eq!(recommend_action(&result(Category::GeneralInquiry, Sentiment::Neutral, 2)).id, "send_faq");
        assert_eq!(recommend_action(&result(Category::Unknown, Sentiment::Neutral, 3)).id, "manual_review");
        assert_eq!(
            recommend_action(&result(Category::Other("Shipping".into()), Sentiment::Neutral, 3)).id,
            "manual_review"
        );
    }

    #[test]
    fn report_id_is_stable_and_distinct() {
        let a = TriageReport::at(100, "hi", result(Category::Unknown, Sentiment::Neutral, 3), Source::Remote);
        let b = TriageReport::at(100, "hi", result(Category::Unknown, Sentiment::Neutral, 3), Source::Remote);
        let c = TriageReport::at(101, "hi", result(Category::Unknown, Sentiment::Neutral, 3), Source::Remote);
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert!(a.id.starts_with("sha256:"));
    }

    #[test]
    fn report_serializes_flat() {
        let report = TriageReport::at(7, "hello there", result(Category::GeneralInquiry, Sentiment::Neutral, 2), Source::Heuristic);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["category"], "General Inquiry");
        assert_eq!(json["priority_score"], 2);
        assert_eq!(json["urgency"], "Low");
        assert_eq!(json["recommendedAction"]["id"], "send_faq");
        assert_eq!(json["source"], "heuristic");
    }
}

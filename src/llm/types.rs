//! Classification result types: Category, Sentiment, ClassificationResult.
//!
//! Field names on the wire match the JSON object the model is asked to
//! return (`category`, `sentiment`, `priority_score`, `reasoning`), so a
//! serialized result can be fed back through normalization unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lowest and highest valid priority scores.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;
/// Priority used when the model gives nothing usable.
pub const DEFAULT_PRIORITY: u8 = 3;

/// Coarse bucket for a support message.
///
/// The five canonical labels have their own variants. A non-empty label the
/// model invents is kept verbatim in `Other` so callers can see it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    BillingIssue,
    TechnicalProblem,
    FeatureRequest,
    GeneralInquiry,
    Unknown,
    Other(String),
}

impl Category {
    pub const CANONICAL: [Category; 5] = [
        Category::BillingIssue,
        Category::TechnicalProblem,
        Category::FeatureRequest,
        Category::GeneralInquiry,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::BillingIssue => "Billing Issue",
            Category::TechnicalProblem => "Technical Problem",
            Category::FeatureRequest => "Feature Request",
            Category::GeneralInquiry => "General Inquiry",
            Category::Unknown => "Unknown",
            Category::Other(label) => label,
        }
    }

    /// Map a label to its variant. Exact match only; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Billing Issue" => Category::BillingIssue,
            "Technical Problem" => Category::TechnicalProblem,
            "Feature Request" => Category::FeatureRequest,
            "General Inquiry" => Category::GeneralInquiry,
            "Unknown" => Category::Unknown,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Category::from_label(&label))
    }
}

/// Binary emotional tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    #[default]
    Neutral,
    Angry,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Neutral => "Neutral",
            Sentiment::Angry => "Angry",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The verdict for one support message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub sentiment: Sentiment,
    pub priority_score: u8,
    pub reasoning: String,
}

/// Which code path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Heuristic,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote => f.write_str("remote"),
            Source::Heuristic => f.write_str("heuristic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_map_to_variants() {
        for category in Category::CANONICAL {
            assert_eq!(Category::from_label(category.as_str()), category);
            assert!(category.is_canonical());
        }
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let category = Category::from_label("Shipping Delay");
        assert_eq!(category, Category::Other("Shipping Delay".to_string()));
        assert!(!category.is_canonical());
        assert_eq!(category.to_string(), "Shipping Delay");
    }

    #[test]
    fn result_serializes_with_wire_names() {
        let result = ClassificationResult {
            category: Category::TechnicalProblem,
            sentiment: Sentiment::Angry,
            priority_score: 5,
            reasoning: "Server down.".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "Technical Problem");
        assert_eq!(json["sentiment"], "Angry");
        assert_eq!(json["priority_score"], 5);
        assert_eq!(json["reasoning"], "Server down.");
    }
}

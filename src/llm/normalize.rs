//! Field-by-field coercion of a parsed model reply into a ClassificationResult.
//!
//! Every field has a safe default, so any JSON object (including an empty
//! one) normalizes to a valid result.

use super::types::{
    Category, ClassificationResult, Sentiment, DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY,
};
use serde_json::{Map, Value};

/// Normalize a loosely-typed reply object.
pub fn normalize(raw: &Map<String, Value>) -> ClassificationResult {
    let category = match raw.get("category").and_then(Value::as_str).map(str::trim) {
        Some(label) if !label.is_empty() => Category::from_label(label),
        _ => Category::Unknown,
    };

    let sentiment = match raw.get("sentiment").and_then(Value::as_str) {
        Some("Angry") => Sentiment::Angry,
        _ => Sentiment::Neutral,
    };

    let priority_score = coerce_priority(raw.get("priority_score"));

    let reasoning = match raw.get("reasoning").and_then(Value::as_str).map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => format!(
            "Category: {}, Sentiment: {}, Priority: {}.",
            category, sentiment, priority_score
        ),
    };

    ClassificationResult {
        category,
        sentiment,
        priority_score,
        reasoning,
    }
}

/// Numbers and numeric strings are accepted; the value must be a whole
/// number in range, otherwise the default priority is used. Booleans and
/// arrays are not numbers here.
fn coerce_priority(value: Option<&Value>) -> u8 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.fract() == 0.0 && (MIN_PRIORITY as f64..=MAX_PRIORITY as f64).contains(&n) => {
            n as u8
        }
        _ => DEFAULT_PRIORITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn empty_object_gets_all_defaults() {
        let result = normalize(&Map::new());
        assert_eq!(result.category, Category::Unknown);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.priority_score, 3);
        assert_eq!(result.reasoning, "Category: Unknown, Sentiment: Neutral, Priority: 3.");
    }

    #[test]
    fn well_formed_reply_is_kept() {
        let result = normalize(&obj(json!({
            "category": "  Technical Problem ",
            "sentiment": "Angry",
            "priority_score": 5,
            "reasoning": " App crashes on login. "
        })));
        assert_eq!(result.category, Category::TechnicalProblem);
        assert_eq!(result.sentiment, Sentiment::Angry);
        assert_eq!(result.priority_score, 5);
        assert_eq!(result.reasoning, "App crashes on login.");
    }

    #[test]
    fn out_of_range_and_non_numeric_priority_become_three() {
        for bad in [json!(0), json!(6), json!("high"), json!(2.5), json!(null), json!(true), json!(-1)] {
            let result = normalize(&obj(json!({ "priority_score": bad.clone() })));
            assert_eq!(result.priority_score, 3, "priority {:?}", bad);
        }
    }

    #[test]
    fn booleans_and_arrays_are_not_numbers() {
        for bad in [json!(true), json!(false), json!([4]), json!(["2"])] {
            assert_eq!(normalize(&obj(json!({ "priority_score": bad.clone() }))).priority_score, 3, "priority {:?}", bad);
        }
    }

    #[test]
    fn numeric_priority_forms_are_accepted() {
        assert_eq!(normalize(&obj(json!({ "priority_score": 4.0 }))).priority_score, 4);
        assert_eq!(normalize(&obj(json!({ "priority_score": " 2 " }))).priority_score, 2);
        assert_eq!(normalize(&obj(json!({ "priority_score": 1 }))).priority_score, 1);
    }

    #[test]
    fn sentiment_must_be_exactly_angry() {
        for other in ["angry", "ANGRY", " Angry", "Furious", ""] {
            let result = normalize(&obj(json!({ "sentiment": other })));
            assert_eq!(result.sentiment, Sentiment::Neutral, "sentiment {:?}", other);
        }
    }

    #[test]
    fn non_string_category_is_unknown() {
        assert_eq!(normalize(&obj(json!({ "category": 7 }))).category, Category::Unknown);
        assert_eq!(normalize(&obj(json!({ "category": "   " }))).category, Category::Unknown);
    }

    #[test]
    fn novel_category_passes_through_trimmed() {
        let result = normalize(&obj(json!({ "category": " Shipping " })));
        assert_eq!(result.category, Category::Other("Shipping".to_string()));
    }

    #[test]
    fn missing_reasoning_is_synthesized() {
        let result = normalize(&obj(json!({
            "category": "Billing Issue",
            "sentiment": "Angry",
            "priority_score": 5,
            "reasoning": ""
        })));
        assert_eq!(result.reasoning, "Category: Billing Issue, Sentiment: Angry, Priority: 5.");
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            json!({}),
            json!({ "category": "Feature Request", "priority_score": "9" }),
            json!({ "category": " Other thing ", "sentiment": "Angry", "priority_score": 2, "reasoning": " x " }),
        ];
        for input in inputs {
            let once = normalize(&obj(input));
            let twice = normalize(&obj(serde_json::to_value(&once).unwrap()));
            assert_eq!(once, twice);
        }
    }
}

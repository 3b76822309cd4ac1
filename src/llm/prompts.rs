//! Classification prompt: the contract between support-triage and the model.
//!
//! The model must answer with a bare JSON object holding exactly the four
//! keys that `normalize` reads. Changing the key names here means changing
//! them in `normalize.rs` too.

/// Low temperature keeps repeated classifications of the same text stable.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const MAX_TOKENS: u32 = 256;

/// Build the single user-role message sent to the model.
///
/// The support message is embedded verbatim.
pub fn build_classify_message(message: &str) -> String {
    format!(
        r#"You are a customer-support triage assistant. Analyze the customer message below and classify it.

Respond with ONLY a JSON object with exactly these four keys:
- "category": one of "Billing Issue", "Technical Problem", "Feature Request", "General Inquiry", "Unknown"
- "sentiment": either "Neutral" or "Angry"
- "priority_score": an integer from 1 (lowest) to 5 (most urgent)
- "reasoning": one short sentence explaining the classification

Do not include any text outside the JSON object.

Customer message:
"""
{message}
""""#
    )
}

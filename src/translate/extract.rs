//! Plan extraction from model responses
//!
//! Models wrap JSON in prose or code fences. The plan is taken as the
//! widest brace-delimited region: first `{` through last `}`.

use crate::planner::{DefaultReason, PlanNormalizer, PlanOutcome};

/// Extracts the JSON object text from a response
pub fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}

/// Reads a plan out of a raw model response
pub fn plan_from_response(response: &str) -> PlanOutcome {
    match extract_json(response.trim()) {
        Some(json) => PlanNormalizer::from_json_str(json),
        None => PlanOutcome::Default(DefaultReason::NoJsonObject),
    }
}

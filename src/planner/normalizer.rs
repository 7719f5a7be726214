//! Plan normalization
//!
//! Plans arrive as untrusted JSON produced by a language model. The
//! normalizer either reads a well-formed [`QueryPlan`] out of the candidate
//! or reports why the default selection must be used instead. It never
//! fails.
//!
//! Field handling:
//! - `operation`: required; missing or falsy selects the default plan,
//!   unknown names read as `include`
//! - `criteria`: a list, anything else reads as empty; malformed entries
//!   become criteria that never match
//! - `sortBy`: falsy reads as absent; `order` is descending only for `"desc"`
//! - `limit`: positive integers (or numeric text) only

use serde_json::{Map, Value};

use super::ast::{Comparison, Criterion, CriterionValue, Operation, QueryPlan, SortOrder, SortSpec};

/// Number of projects returned by the default selection
pub const DEFAULT_LIMIT: usize = 5;

/// Why a candidate could not be used as a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultReason {
    /// No candidate was supplied
    Absent,
    /// The translator call failed
    TranslationFailed,
    /// The response text holds no JSON object
    NoJsonObject,
    /// The JSON object text does not parse
    InvalidJson,
    /// The candidate is not a JSON object
    NotAnObject,
    /// The candidate has no usable `operation`
    MissingOperation,
}

impl DefaultReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultReason::Absent => "absent",
            DefaultReason::TranslationFailed => "translation_failed",
            DefaultReason::NoJsonObject => "no_json_object",
            DefaultReason::InvalidJson => "invalid_json",
            DefaultReason::NotAnObject => "not_an_object",
            DefaultReason::MissingOperation => "missing_operation",
        }
    }
}

/// Result of normalizing a candidate plan
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The candidate was read as a plan
    Valid(QueryPlan),
    /// The default selection applies
    Default(DefaultReason),
}

impl PlanOutcome {
    pub fn is_default(&self) -> bool {
        matches!(self, PlanOutcome::Default(_))
    }

    /// Resolves the outcome to an executable plan
    pub fn into_plan(self, default_limit: usize) -> QueryPlan {
        match self {
            PlanOutcome::Valid(plan) => plan,
            PlanOutcome::Default(_) => QueryPlan::default_selection(default_limit),
        }
    }
}

/// Reads candidate plans
pub struct PlanNormalizer;

impl PlanNormalizer {
    /// Normalizes a candidate plan value
    pub fn normalize(candidate: Option<&Value>) -> PlanOutcome {
        let object = match candidate {
            None | Some(Value::Null) => return PlanOutcome::Default(DefaultReason::Absent),
            Some(Value::Object(object)) => object,
            Some(_) => return PlanOutcome::Default(DefaultReason::NotAnObject),
        };

        let operation = match object.get("operation") {
            Some(value) if is_truthy(value) => {
                Operation::parse(value.as_str().unwrap_or_default())
            }
            _ => return PlanOutcome::Default(DefaultReason::MissingOperation),
        };

        let criteria = match object.get("criteria") {
            Some(Value::Array(items)) => items.iter().map(Self::read_criterion).collect(),
            _ => Vec::new(),
        };

        PlanOutcome::Valid(QueryPlan {
            operation,
            criteria,
            sort: object.get("sortBy").and_then(Self::read_sort),
            limit: object.get("limit").and_then(Self::read_limit),
        })
    }

    /// Parses JSON text and normalizes it
    pub fn from_json_str(text: &str) -> PlanOutcome {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::normalize(Some(&value)),
            Err(_) => PlanOutcome::Default(DefaultReason::InvalidJson),
        }
    }

    fn read_criterion(item: &Value) -> Criterion {
        let empty = Map::new();
        let fields = item.as_object().unwrap_or(&empty);

        let column = fields
            .get("column")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let comparison = match fields.get("comparison").and_then(Value::as_str) {
            Some(name) => Comparison::parse(name),
            None => Comparison::Unknown(String::new()),
        };
        let value = match fields.get("value") {
            Some(Value::String(s)) => CriterionValue::Text(s.clone()),
            Some(Value::Number(n)) => CriterionValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Some(Value::Bool(b)) => CriterionValue::Bool(*b),
            Some(Value::Null) | None => CriterionValue::Null,
            Some(other) => CriterionValue::Text(other.to_string()),
        };

        Criterion::new(column, comparison, value)
    }

    fn read_sort(value: &Value) -> Option<SortSpec> {
        if !is_truthy(value) {
            return None;
        }
        let column = value.get("column").and_then(Value::as_str).unwrap_or_default();
        let order = value
            .get("order")
            .and_then(Value::as_str)
            .map(SortOrder::parse)
            .unwrap_or_default();
        Some(SortSpec {
            column: column.to_string(),
            order,
        })
    }

    fn read_limit(value: &Value) -> Option<usize> {
        let limit = match value {
            Value::Number(n) => match n.as_u64() {
                Some(u) => u as f64,
                None => n.as_f64()?,
            },
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if limit.is_finite() && limit >= 1.0 {
            Some(limit.min(usize::MAX as f64) as usize)
        } else {
            None
        }
    }
}

/// Truthiness of a JSON value as a loosely typed caller would see it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

//! Query plan structures
//!
//! A plan is a conjunction of criteria, an optional sort, an optional
//! limit and an include/exclude flag.

use std::fmt;

use serde_json::{json, Value};

use crate::record::loose_number;

/// What to return from the matched set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Operation {
    /// Return the matched identifiers
    #[default]
    Include,
    /// Return every identifier that was not matched
    Exclude,
}

impl Operation {
    /// Parses an operation name. Anything but `exclude` is `Include`.
    pub fn parse(name: &str) -> Self {
        match name {
            "exclude" => Operation::Exclude,
            _ => Operation::Include,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Include => "include",
            Operation::Exclude => "exclude",
        }
    }
}

/// Comparison kinds understood by the criterion filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Case-insensitive substring
    Contains,
    /// Strictly greater
    GreaterThan,
    /// Strictly less
    LessThan,
    /// Loose equality
    EqualTo,
    /// Unrecognized name, never matches
    Unknown(String),
}

impl Comparison {
    pub fn parse(name: &str) -> Self {
        match name {
            "contains" => Comparison::Contains,
            "greater_than" => Comparison::GreaterThan,
            "less_than" => Comparison::LessThan,
            "equal_to" => Comparison::EqualTo,
            other => Comparison::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Comparison::Contains => "contains",
            Comparison::GreaterThan => "greater_than",
            Comparison::LessThan => "less_than",
            Comparison::EqualTo => "equal_to",
            Comparison::Unknown(name) => name,
        }
    }
}

/// Right-hand side of a criterion
#[derive(Debug, Clone, PartialEq)]
pub enum CriterionValue {
    Text(String),
    Number(f64),
    /// Reads as 1 or 0 in numeric comparisons
    Bool(bool),
    /// Null or absent, never matches
    Null,
}

impl CriterionValue {
    /// Numeric reading of the value, `None` when text is not a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CriterionValue::Number(n) => Some(*n),
            CriterionValue::Text(s) => loose_number(s),
            CriterionValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CriterionValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CriterionValue::Null)
    }

    fn to_json(&self) -> Value {
        match self {
            CriterionValue::Text(s) => json!(s),
            CriterionValue::Number(n) => json!(n),
            CriterionValue::Bool(b) => json!(b),
            CriterionValue::Null => Value::Null,
        }
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionValue::Text(s) => f.write_str(s),
            CriterionValue::Number(n) => write!(f, "{}", n),
            CriterionValue::Bool(b) => write!(f, "{}", b),
            CriterionValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for CriterionValue {
    fn from(s: &str) -> Self {
        CriterionValue::Text(s.to_string())
    }
}

impl From<String> for CriterionValue {
    fn from(s: String) -> Self {
        CriterionValue::Text(s)
    }
}

impl From<bool> for CriterionValue {
    fn from(b: bool) -> Self {
        CriterionValue::Bool(b)
    }
}

impl From<f64> for CriterionValue {
    fn from(n: f64) -> Self {
        CriterionValue::Number(n)
    }
}

impl From<i64> for CriterionValue {
    fn from(n: i64) -> Self {
        CriterionValue::Number(n as f64)
    }
}

/// A single filter over one column
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub column: String,
    pub comparison: Comparison,
    pub value: CriterionValue,
}

impl Criterion {
    pub fn new(
        column: impl Into<String>,
        comparison: Comparison,
        value: impl Into<CriterionValue>,
    ) -> Self {
        Self {
            column: column.into(),
            comparison,
            value: value.into(),
        }
    }

    pub fn contains(column: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        Self::new(column, Comparison::Contains, value)
    }

    pub fn greater_than(column: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        Self::new(column, Comparison::GreaterThan, value)
    }

    pub fn less_than(column: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        Self::new(column, Comparison::LessThan, value)
    }

    pub fn equal_to(column: impl Into<String>, value: impl Into<CriterionValue>) -> Self {
        Self::new(column, Comparison::EqualTo, value)
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact name `desc` sorts descending
    pub fn parse(name: &str) -> Self {
        match name {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort key and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Desc,
        }
    }
}

/// A structured selection request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPlan {
    pub operation: Operation,
    /// Combined with AND
    pub criteria: Vec<Criterion>,
    pub sort: Option<SortSpec>,
    /// Always positive when present
    pub limit: Option<usize>,
}

impl QueryPlan {
    /// An include plan with nothing set
    pub fn include() -> Self {
        Self::default()
    }

    /// An exclude plan with nothing set
    pub fn exclude() -> Self {
        Self {
            operation: Operation::Exclude,
            ..Self::default()
        }
    }

    /// The fallback used when no usable plan was produced
    pub fn default_selection(limit: usize) -> Self {
        Self::include().with_limit(limit)
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the limit; zero clears it
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// True when the plan carries no criteria, no sort and no limit
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.sort.is_none() && self.limit.is_none()
    }

    /// JSON rendering in the wire shape the plan was read from
    pub fn to_json(&self) -> Value {
        let criteria: Vec<Value> = self
            .criteria
            .iter()
            .map(|c| {
                json!({
                    "column": c.column,
                    "comparison": c.comparison.as_str(),
                    "value": c.value.to_json(),
                })
            })
            .collect();

        let mut plan = json!({
            "operation": self.operation.as_str(),
            "criteria": criteria,
        });
        if let Some(sort) = &self.sort {
            plan["sortBy"] = json!({"column": sort.column, "order": sort.order.as_str()});
        }
        if let Some(limit) = self.limit {
            plan["limit"] = json!(limit);
        }
        plan
    }
}

//! Value coercion for comparisons
//!
//! Numeric columns hold currency-formatted text such as `"$1,200,000"`.
//! Coercion keeps only the decimal digits and reads them as an integer, so
//! signs and decimal points are dropped. Every other column is compared as
//! the raw, case-sensitive string.

use std::collections::BTreeSet;
use std::fmt;

use super::BENEFIT_COLUMN;

/// A record value ready for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Digits extracted from a numeric column
    Integer(i64),
    /// Raw string of any other column
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Table of columns that carry numeric semantics.
///
/// Only these columns are eligible for numeric comparison and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericColumns {
    columns: BTreeSet<String>,
}

impl NumericColumns {
    /// Creates a table from column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the column is numeric
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// Resolves the comparison value of a column.
    ///
    /// Numeric columns always resolve, an absent value reads as `0`.
    /// Other columns resolve to their raw text, or `None` when absent.
    pub fn coerce<'a>(&self, column: &str, raw: Option<&'a str>) -> Option<FieldValue<'a>> {
        if self.contains(column) {
            Some(FieldValue::Integer(raw.map(parse_amount).unwrap_or(0)))
        } else {
            raw.map(FieldValue::Text)
        }
    }
}

impl Default for NumericColumns {
    fn default() -> Self {
        Self::new([BENEFIT_COLUMN])
    }
}

/// Parses a currency-formatted amount by keeping only its decimal digits.
///
/// No digits reads as `0`. Digit runs beyond `i64::MAX` saturate.
pub fn parse_amount(raw: &str) -> i64 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .try_fold(0i64, |acc, d| acc.checked_mul(10)?.checked_add(i64::from(d)))
        .unwrap_or(i64::MAX)
}

/// Reads free text as a number the way a loosely typed comparison would.
///
/// Surrounding whitespace is ignored and blank text reads as `0`.
/// Anything that is not a finite decimal number yields `None`.
pub fn loose_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

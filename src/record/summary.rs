//! Dataset summary rendered into the translation prompt

use std::collections::BTreeSet;

use serde::Serialize;

use super::{parse_amount, NumericColumns, Record, BENEFIT_COLUMN, CATEGORY_COLUMN, UNIT_COLUMN};

/// Shape of the dataset the language model is told about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    /// Number of projects
    pub record_count: usize,
    /// Distinct organizational units, sorted
    pub units: Vec<String>,
    /// Distinct strategic categories, sorted
    pub categories: Vec<String>,
    /// Smallest and largest benefit, if any project has one
    pub benefit_range: Option<(i64, i64)>,
}

impl DatasetSummary {
    pub fn from_records(records: &[Record], numeric: &NumericColumns) -> Self {
        let distinct = |column: &str| -> Vec<String> {
            records
                .iter()
                .filter_map(|r| r.get(column))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        };

        let benefit_range = if numeric.contains(BENEFIT_COLUMN) {
            records
                .iter()
                .filter_map(|r| r.get(BENEFIT_COLUMN))
                .filter(|raw| raw.chars().any(|c| c.is_ascii_digit()))
                .map(parse_amount)
                .fold(None, |range, amount| match range {
                    None => Some((amount, amount)),
                    Some((lo, hi)) => Some((amount.min(lo), amount.max(hi))),
                })
        } else {
            None
        };

        Self {
            record_count: records.len(),
            units: distinct(UNIT_COLUMN),
            categories: distinct(CATEGORY_COLUMN),
            benefit_range,
        }
    }

    /// Renders the summary as a bullet list
    pub fn render(&self) -> String {
        let mut lines = vec![format!("- Total projects: {}", self.record_count)];
        if !self.units.is_empty() {
            lines.push(format!("- {} values: {}", UNIT_COLUMN, self.units.join(", ")));
        }
        if !self.categories.is_empty() {
            lines.push(format!(
                "- {} values: {}",
                CATEGORY_COLUMN,
                self.categories.join(", ")
            ));
        }
        if let Some((lo, hi)) = self.benefit_range {
            lines.push(format!(
                "- {} range: {} - {}",
                BENEFIT_COLUMN,
                format_amount(lo),
                format_amount(hi)
            ));
        }
        lines.join("\n")
    }
}

/// Formats an amount as `$1,200,000`
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

//! Project records for portfolio-agent
//!
//! A project portfolio is a flat table: every row is a [`Record`] mapping
//! column names to raw string values, and a [`Dataset`] is the ordered list
//! of rows together with the header they were parsed from.
//!
//! # Recognized columns
//!
//! - `ID` - unique project identifier (assumed unique, not enforced)
//! - `Gerencia` - organizational unit
//! - `Aporte_Estrategico` - strategic category
//! - `Beneficios_Estimados` - estimated benefit, currency formatted
//!
//! Every other column is carried as an opaque string.

mod coercion;
mod dataset;
mod errors;
mod summary;

pub use coercion::{loose_number, parse_amount, FieldValue, NumericColumns};
pub use dataset::Dataset;
pub use errors::{DatasetError, DatasetResult};
pub use summary::{format_amount, DatasetSummary};

/// Identity column
pub const ID_COLUMN: &str = "ID";
/// Organizational unit column
pub const UNIT_COLUMN: &str = "Gerencia";
/// Strategic category column
pub const CATEGORY_COLUMN: &str = "Aporte_Estrategico";
/// Estimated benefit column, the default numeric column
pub const BENEFIT_COLUMN: &str = "Beneficios_Estimados";

/// A single project row.
///
/// Columns keep the order in which they were inserted. Setting a column
/// that already exists replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            record.set(column, value);
        }
        record
    }

    /// Sets a column value
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Returns the raw value of a column, if the record has it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the project identifier, or an empty string when absent
    pub fn id(&self) -> &str {
        self.get(ID_COLUMN).unwrap_or("")
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

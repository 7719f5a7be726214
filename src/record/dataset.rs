//! Ordered project datasets and CSV ingestion
//!
//! CSV text is read with a header row. Blank lines are skipped, rows may be
//! shorter or longer than the header: missing trailing columns are simply
//! absent from the record and extra fields are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::errors::{DatasetError, DatasetResult};
use super::summary::DatasetSummary;
use super::{NumericColumns, Record, ID_COLUMN};

/// An ordered collection of project records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from records, deriving the header from first appearance
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for record in &records {
            for column in record.columns() {
                if seen.insert(column.to_string()) {
                    columns.push(column.to_string());
                }
            }
        }
        Self { columns, records }
    }

    /// Parses CSV text with a header row
    pub fn from_csv_str(text: &str) -> DatasetResult<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Parses a CSV file with a header row
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses CSV from any reader
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if !columns.iter().any(|c| c == ID_COLUMN) {
            return Err(DatasetError::MissingIdColumn(ID_COLUMN.to_string()));
        }

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            if row.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            records.push(Record::from_pairs(
                columns.iter().map(String::as_str).zip(row.iter()),
            ));
        }

        Ok(Self { columns, records })
    }

    /// Header columns in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All identifiers in dataset order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(Record::id).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summarizes the dataset for the translation prompt
    pub fn summary(&self, numeric: &NumericColumns) -> DatasetSummary {
        DatasetSummary::from_records(&self.records, numeric)
    }
}

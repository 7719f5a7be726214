//! Result sorting for intent execution
//!
//! Sorts by numeric columns only. Sorting is stable: records with equal
//! keys keep their relative order in both directions.

use std::cmp::Reverse;

use crate::planner::{SortOrder, SortSpec};
use crate::record::{parse_amount, NumericColumns, Record};

/// Sorts working sets of records
pub struct SelectionSorter;

impl SelectionSorter {
    /// Sorts records by the spec's column.
    ///
    /// Returns false without touching the records when the column is not
    /// numeric.
    pub fn sort(records: &mut [&Record], spec: &SortSpec, numeric: &NumericColumns) -> bool {
        if !numeric.contains(&spec.column) {
            return false;
        }

        let key = |record: &&Record| record.get(&spec.column).map(parse_amount).unwrap_or(0);
        match spec.order {
            SortOrder::Asc => records.sort_by_key(key),
            SortOrder::Desc => records.sort_by_key(|record| Reverse(key(record))),
        }
        true
    }
}

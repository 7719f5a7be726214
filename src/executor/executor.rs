//! Intent executor for portfolio-agent
//!
//! Executes query plans against an in-memory record set, producing
//! deterministic identifier selections.
//!
//! Execution flow (strict order):
//! 1. Empty plan short-circuits to an undetermined selection
//! 2. Filter records by all criteria
//! 3. Apply sort (numeric columns only)
//! 4. Apply limit
//! 5. Project identifiers, complementing against the full set for exclude

use std::collections::HashSet;

use crate::observability::{log_event_with_fields, Event};
use crate::planner::{Operation, QueryPlan};
use crate::record::{NumericColumns, Record};

use super::filters::CriterionFilter;
use super::result::{Selection, SelectionStatus};
use super::sorter::SelectionSorter;

/// Executes plans against record sets
pub struct IntentExecutor<'a> {
    numeric: &'a NumericColumns,
}

impl<'a> IntentExecutor<'a> {
    pub fn new(numeric: &'a NumericColumns) -> Self {
        Self { numeric }
    }

    /// Executes a plan and returns the selected identifiers.
    ///
    /// Deterministic: same records + same plan = same selection.
    pub fn execute(&self, records: &[Record], plan: &QueryPlan) -> Selection {
        // Step 1: No criteria, sort or limit means the request was not understood
        if plan.is_empty() {
            return Selection::undetermined();
        }

        // Step 2: Filter
        let filter = CriterionFilter::new(self.numeric);
        let mut working: Vec<&Record> = records
            .iter()
            .filter(|r| filter.matches(r, &plan.criteria))
            .collect();
        let matched_count = working.len();

        // Step 3: Sort
        let sort_applied = match &plan.sort {
            Some(spec) => {
                let applied = SelectionSorter::sort(&mut working, spec, self.numeric);
                if !applied {
                    log_event_with_fields(
                        Event::SortColumnIgnored,
                        &[("column", spec.column.as_str())],
                    );
                }
                applied
            }
            None => false,
        };

        // Step 4: Limit
        let limit_applied = match plan.limit {
            Some(limit) if working.len() > limit => {
                working.truncate(limit);
                true
            }
            _ => false,
        };

        // Step 5: Project
        let mut target = HashSet::with_capacity(working.len());
        let targeted: Vec<&str> = working
            .iter()
            .map(|r| r.id())
            .filter(|id| target.insert(*id))
            .collect();

        let ids = match plan.operation {
            Operation::Include => targeted.into_iter().map(str::to_string).collect(),
            Operation::Exclude => records
                .iter()
                .map(Record::id)
                .filter(|id| !target.contains(id))
                .map(str::to_string)
                .collect(),
        };

        Selection {
            ids,
            status: SelectionStatus::Selected,
            matched_count,
            sort_applied,
            limit_applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Criterion, SortSpec};

    fn project(id: &str, unit: &str, benefit: &str) -> Record {
        Record::from_pairs([
            ("ID", id),
            ("Gerencia", unit),
            ("Beneficios_Estimados", benefit),
        ])
    }

    fn portfolio() -> Vec<Record> {
        vec![
            project("1", "Operaciones", "$250,000"),
            project("2", "Marketing", "$90,000"),
            project("3", "Operaciones", "$1,200,000"),
            project("4", "Finanzas", "$25,000"),
            project("5", "Operaciones", "$400,000"),
        ]
    }

    fn run(plan: &QueryPlan) -> Selection {
        let numeric = NumericColumns::default();
        IntentExecutor::new(&numeric).execute(&portfolio(), plan)
    }

    #[test]
    fn test_empty_plan_selects_nothing() {
        let selection = run(&QueryPlan::include());
        assert!(selection.is_empty());
        assert!(selection.is_undetermined());

        let selection = run(&QueryPlan::exclude());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_top_operations_by_benefit() {
        let plan = QueryPlan::include()
            .with_criterion(Criterion::contains("Gerencia", "operaciones"))
            .with_sort(SortSpec::desc("Beneficios_Estimados"))
            .with_limit(2);

        let selection = run(&plan);
        assert_eq!(selection.ids, vec!["3", "5"]);
        assert_eq!(selection.matched_count, 3);
        assert!(selection.sort_applied);
        assert!(selection.limit_applied);
    }

    #[test]
    fn test_lowest_benefit_without_criteria() {
        let plan = QueryPlan::include()
            .with_sort(SortSpec::asc("Beneficios_Estimados"))
            .with_limit(2);
        assert_eq!(run(&plan).ids, vec!["4", "2"]);
    }

    #[test]
    fn test_exclude_keeps_dataset_order() {
        let plan = QueryPlan::exclude()
            .with_criterion(Criterion::contains("Gerencia", "Operaciones"));
        assert_eq!(run(&plan).ids, vec!["2", "4"]);
    }

    #[test]
    fn test_exclude_after_sort_and_limit() {
        let plan = QueryPlan::exclude()
            .with_sort(SortSpec::desc("Beneficios_Estimados"))
            .with_limit(1);
        assert_eq!(run(&plan).ids, vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_limit_larger_than_set() {
        let plan = QueryPlan::include()
            .with_criterion(Criterion::contains("Gerencia", "Finanzas"))
            .with_limit(10);
        let selection = run(&plan);
        assert_eq!(selection.ids, vec!["4"]);
        assert!(!selection.limit_applied);
    }

    #[test]
    fn test_non_numeric_sort_is_ignored() {
        let plan = QueryPlan::include()
            .with_sort(SortSpec::asc("Gerencia"))
            .with_limit(3);
        let selection = run(&plan);
        assert_eq!(selection.ids, vec!["1", "2", "3"]);
        assert!(!selection.sort_applied);
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let records = vec![project("7", "Personas", "$1"), project("7", "Personas", "$2")];
        let numeric = NumericColumns::default();
        let plan = QueryPlan::include().with_limit(5);

        let selection = IntentExecutor::new(&numeric).execute(&records, &plan);
        assert_eq!(selection.ids, vec!["7"]);
    }

    #[test]
    fn test_deterministic() {
        let plan = QueryPlan::include()
            .with_criterion(Criterion::greater_than("Beneficios_Estimados", 50_000i64))
            .with_sort(SortSpec::desc("Beneficios_Estimados"));
        assert_eq!(run(&plan), run(&plan));
    }
}

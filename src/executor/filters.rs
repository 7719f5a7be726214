//! Criterion filtering for intent execution
//!
//! Evaluates criteria against records. Values of numeric columns are
//! coerced to integers, everything else is compared as text. Comparisons
//! that cannot be decided evaluate to false.

use std::cmp::Ordering;

use crate::planner::{Comparison, Criterion, CriterionValue};
use crate::record::{loose_number, FieldValue, NumericColumns, Record};

/// Evaluates criteria against records
pub struct CriterionFilter<'a> {
    numeric: &'a NumericColumns,
}

impl<'a> CriterionFilter<'a> {
    pub fn new(numeric: &'a NumericColumns) -> Self {
        Self { numeric }
    }

    /// Checks if a record satisfies every criterion (AND semantics)
    pub fn matches(&self, record: &Record, criteria: &[Criterion]) -> bool {
        criteria.iter().all(|c| self.evaluate(record, c))
    }

    /// Evaluates a single criterion against a record
    pub fn evaluate(&self, record: &Record, criterion: &Criterion) -> bool {
        let actual = match self
            .numeric
            .coerce(&criterion.column, record.get(&criterion.column))
        {
            Some(v) => v,
            None => return false, // Missing column = no match
        };

        match &criterion.comparison {
            Comparison::LessThan => {
                Self::compare(actual, &criterion.value) == Some(Ordering::Less)
            }
            Comparison::GreaterThan => {
                Self::compare(actual, &criterion.value) == Some(Ordering::Greater)
            }
            Comparison::EqualTo => Self::loose_eq(actual, &criterion.value),
            Comparison::Contains => Self::contains(actual, &criterion.value),
            Comparison::Unknown(_) => false,
        }
    }

    /// Orders a record value against a criterion value.
    ///
    /// Numeric unless both sides are text, lexicographic when they are.
    /// `None` when a side has no numeric reading.
    fn compare(actual: FieldValue<'_>, expected: &CriterionValue) -> Option<Ordering> {
        match (actual, expected) {
            (FieldValue::Text(a), CriterionValue::Text(b)) => Some(a.cmp(b.as_str())),
            (FieldValue::Integer(a), _) => (a as f64).partial_cmp(&expected.as_number()?),
            (FieldValue::Text(a), _) => loose_number(a)?.partial_cmp(&expected.as_number()?),
        }
    }

    /// Loose equality: numeric if either side is a number, exact text otherwise
    fn loose_eq(actual: FieldValue<'_>, expected: &CriterionValue) -> bool {
        match (actual, expected) {
            (_, CriterionValue::Null) => false,
            (FieldValue::Text(a), CriterionValue::Text(b)) => a == b,
            _ => Self::compare(actual, expected) == Some(Ordering::Equal),
        }
    }

    /// Case-insensitive substring match
    fn contains(actual: FieldValue<'_>, expected: &CriterionValue) -> bool {
        if expected.is_null() {
            return false;
        }
        let haystack = actual.to_string().to_lowercase();
        let needle = expected.to_string().to_lowercase();
        haystack.contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, unit: &str, benefit: &str) -> Record {
        Record::from_pairs([
            ("ID", id),
            ("Gerencia", unit),
            ("Aporte_Estrategico", "Sistémico"),
            ("Beneficios_Estimados", benefit),
        ])
    }

    fn eval(record: &Record, criterion: Criterion) -> bool {
        let numeric = NumericColumns::default();
        CriterionFilter::new(&numeric).evaluate(record, &criterion)
    }

    #[test]
    fn test_currency_greater_than_number() {
        let record = project("1", "Operaciones", "$250,000");
        assert!(eval(&record, Criterion::greater_than("Beneficios_Estimados", 200_000i64)));
        assert!(!eval(&record, Criterion::less_than("Beneficios_Estimados", 200_000i64)));
    }

    #[test]
    fn test_currency_against_numeric_text() {
        let record = project("1", "Operaciones", "$250,000");
        assert!(eval(&record, Criterion::greater_than("Beneficios_Estimados", "200000")));
        assert!(!eval(&record, Criterion::greater_than("Beneficios_Estimados", "mucho")));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let record = project("1", "Operaciones", "$1");
        assert!(eval(&record, Criterion::contains("Gerencia", "operaciones")));
        assert!(eval(&record, Criterion::contains("Gerencia", "RACION")));
        assert!(!eval(&record, Criterion::contains("Gerencia", "finanzas")));
    }

    #[test]
    fn test_contains_on_numeric_column_uses_digits() {
        let record = project("1", "Operaciones", "$1,200,000");
        assert!(eval(&record, Criterion::contains("Beneficios_Estimados", "1200")));
        assert!(!eval(&record, Criterion::contains("Beneficios_Estimados", "1,200")));
    }

    #[test]
    fn test_equal_to_loose() {
        let record = project("42", "Finanzas", "$90,000");
        assert!(eval(&record, Criterion::equal_to("Beneficios_Estimados", 90_000i64)));
        assert!(eval(&record, Criterion::equal_to("Beneficios_Estimados", "90000")));
        assert!(eval(&record, Criterion::equal_to("ID", 42i64)));
        assert!(eval(&record, Criterion::equal_to("Gerencia", "Finanzas")));
        assert!(!eval(&record, Criterion::equal_to("Gerencia", "finanzas")));
    }

    #[test]
    fn test_text_ordering_is_lexicographic() {
        let record = project("1", "Marketing", "$1");
        assert!(eval(&record, Criterion::less_than("Gerencia", "Operaciones")));
        assert!(eval(&record, Criterion::greater_than("Gerencia", "Finanzas")));
    }

    #[test]
    fn test_missing_column_never_matches() {
        let record = project("1", "Marketing", "$1");
        assert!(!eval(&record, Criterion::contains("Keywords", "")));
        assert!(!eval(&record, Criterion::less_than("Keywords", "z")));
        assert!(!eval(&record, Criterion::equal_to("Keywords", "")));
    }

    #[test]
    fn test_missing_numeric_column_reads_zero() {
        let record = Record::from_pairs([("ID", "1")]);
        assert!(eval(&record, Criterion::less_than("Beneficios_Estimados", 1i64)));
        assert!(eval(&record, Criterion::equal_to("Beneficios_Estimados", 0i64)));
    }

    #[test]
    fn test_null_value_never_matches() {
        let record = project("1", "Marketing", "");
        assert!(!eval(&record, Criterion::contains("Gerencia", CriterionValue::Null)));
        assert!(!eval(&record, Criterion::equal_to("Beneficios_Estimados", CriterionValue::Null)));
        assert!(!eval(&record, Criterion::less_than("Beneficios_Estimados", CriterionValue::Null)));
        assert!(!eval(&record, Criterion::greater_than("Gerencia", CriterionValue::Null)));
    }

    #[test]
    fn test_bool_value_reads_as_one_or_zero() {
        let record = project("1", "Marketing", "$250,000");
        assert!(eval(&record, Criterion::greater_than("Beneficios_Estimados", true)));
        assert!(!eval(&record, Criterion::less_than("Beneficios_Estimados", false)));
        assert!(eval(&record, Criterion::equal_to("ID", true)));
        assert!(!eval(&record, Criterion::equal_to("Gerencia", true)));
        assert!(!eval(&record, Criterion::greater_than("Gerencia", false)));

        let empty = project("2", "Finanzas", "");
        assert!(eval(&empty, Criterion::equal_to("Beneficios_Estimados", false)));
    }

    #[test]
    fn test_unknown_comparison_fails_closed() {
        let record = project("1", "Marketing", "$1");
        let criterion = Criterion::new("Gerencia", Comparison::Unknown("like".into()), "Marketing");
        assert!(!eval(&record, criterion));
    }

    #[test]
    fn test_all_criteria_must_match() {
        let numeric = NumericColumns::default();
        let filter = CriterionFilter::new(&numeric);
        let record = project("1", "Operaciones", "$250,000");

        let both = vec![
            Criterion::contains("Aporte_Estrategico", "sistémico"),
            Criterion::greater_than("Beneficios_Estimados", 200_000i64),
        ];
        assert!(filter.matches(&record, &both));

        let one_fails = vec![
            Criterion::contains("Aporte_Estrategico", "sistémico"),
            Criterion::greater_than("Beneficios_Estimados", 300_000i64),
        ];
        assert!(!filter.matches(&record, &one_fails));
        assert!(filter.matches(&record, &[]));
    }
}

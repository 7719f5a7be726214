//! Selection Scenario Tests
//!
//! End-to-end scenarios from raw model text to selected IDs:
//! - Currency-formatted amounts compare as integers
//! - Sorting is stable for equal keys
//! - `contains` ignores case
//! - A limit larger than the selection is harmless
//! - Malformed model output falls back to the default selection

use portfolio_agent::executor::IntentExecutor;
use portfolio_agent::planner::{DefaultReason, PlanOutcome, DEFAULT_LIMIT};
use portfolio_agent::record::{Dataset, NumericColumns};
use portfolio_agent::translate::plan_from_response;

// =============================================================================
// Helper Functions
// =============================================================================

const PORTFOLIO: &str = "\
ID,Gerencia,Aporte_Estrategico,Beneficios_Estimados,Nombre
1,Operaciones,Sistémico,\"$250,000\",Planta solar
2,Finanzas,Táctico,\"$90,000\",Cierre contable
3,OPERACIONES,Táctico,\"$1,200,000\",Mantenimiento predictivo
4,Tecnología,Sistémico,,Mesa de ayuda
5,Finanzas,Sistémico,\"$250,000\",Tesorería digital
";

fn run(response: &str) -> Vec<String> {
    let dataset = Dataset::from_csv_str(PORTFOLIO).unwrap();
    let numeric = NumericColumns::default();
    let plan = plan_from_response(response).into_plan(DEFAULT_LIMIT);
    IntentExecutor::new(&numeric)
        .execute(dataset.records(), &plan)
        .into_ids()
}

// =============================================================================
// Scenarios
// =============================================================================

/// "$250,000" is greater than 200000.
#[test]
fn test_currency_amount_compares_numerically() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Beneficios_Estimados", "comparison": "greater_than", "value": 200000}]}"#,
    );
    assert_eq!(ids, vec!["1", "3", "5"]);
}

/// Numeric values given as strings behave the same.
#[test]
fn test_numeric_string_value() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Beneficios_Estimados", "comparison": "less_than", "value": "100000"}]}"#,
    );
    assert_eq!(ids, vec!["2", "4"]);
}

/// Equal benefits keep dataset order under a descending sort.
#[test]
fn test_stable_sort_with_limit() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Beneficios_Estimados", "comparison": "less_than", "value": 1000000}], "sortBy": {"column": "Beneficios_Estimados", "order": "desc"}, "limit": 2}"#,
    );
    assert_eq!(ids, vec!["1", "5"]);
}

/// "operaciones" matches "Operaciones" and "OPERACIONES".
#[test]
fn test_contains_is_case_insensitive() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Gerencia", "comparison": "contains", "value": "operaciones"}]}"#,
    );
    assert_eq!(ids, vec!["1", "3"]);
}

/// A limit above the selection size returns the whole selection.
#[test]
fn test_limit_larger_than_selection() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Aporte_Estrategico", "comparison": "contains", "value": "sistémico"}], "limit": 50}"#,
    );
    assert_eq!(ids, vec!["1", "4", "5"]);
}

/// Exclude returns everything the filter did not match, in dataset order.
#[test]
fn test_exclude_systemic() {
    let ids = run(
        r#"Sure! ```{"operation": "exclude", "criteria": [{"column": "Aporte_Estrategico", "comparison": "contains", "value": "Sistémico"}]}```"#,
    );
    assert_eq!(ids, vec!["2", "3"]);
}

/// Sorting on a text column is ignored, the limit still applies.
#[test]
fn test_sort_on_text_column_is_ignored() {
    let ids = run(
        r#"{"operation": "include", "sortBy": {"column": "Nombre", "order": "asc"}, "limit": 3}"#,
    );
    assert_eq!(ids, vec!["1", "2", "3"]);
}

/// An unknown comparison never matches.
#[test]
fn test_unknown_comparison_matches_nothing() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Gerencia", "comparison": "starts_with", "value": "O"}]}"#,
    );
    assert!(ids.is_empty());
}

/// A null or missing value matches no record.
#[test]
fn test_null_value_matches_nothing() {
    assert!(run(
        r#"{"operation": "include", "criteria": [{"column": "Gerencia", "comparison": "contains", "value": null}]}"#
    )
    .is_empty());
    assert!(run(
        r#"{"operation": "include", "criteria": [{"column": "Nombre", "comparison": "contains"}]}"#
    )
    .is_empty());
    assert!(run(
        r#"{"operation": "include", "criteria": [{"column": "Beneficios_Estimados", "comparison": "equal_to", "value": null}]}"#
    )
    .is_empty());
}

/// A boolean value compares as 1 or 0.
#[test]
fn test_bool_value_compares_as_number() {
    let ids = run(
        r#"{"operation": "include", "criteria": [{"column": "Beneficios_Estimados", "comparison": "greater_than", "value": true}]}"#,
    );
    assert_eq!(ids, vec!["1", "2", "3", "5"]);
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Prose without JSON falls back to the first five projects.
#[test]
fn test_no_json_falls_back_to_default() {
    assert_eq!(
        plan_from_response("I am not sure what you mean."),
        PlanOutcome::Default(DefaultReason::NoJsonObject)
    );
    assert_eq!(run("I am not sure what you mean."), vec!["1", "2", "3", "4", "5"]);
}

/// A plan without an operation falls back too.
#[test]
fn test_missing_operation_falls_back_to_default() {
    let ids = run(r#"{"criteria": [{"column": "Gerencia", "comparison": "contains", "value": "Finanzas"}], "limit": 1}"#);
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

/// A recognized operation with nothing else selects nothing.
#[test]
fn test_bare_operation_is_undetermined() {
    assert!(run(r#"{"operation": "exclude"}"#).is_empty());
}

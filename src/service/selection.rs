//! Selection service
//!
//! Runs one chat request end to end: parse the dataset, ask the translator
//! for a plan, normalize it, execute it.

use std::sync::Arc;

use tokio::sync::Semaphore;
use uuid::Uuid;

use crate::executor::{IntentExecutor, Selection};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::planner::{DefaultReason, PlanOutcome, QueryPlan, DEFAULT_LIMIT};
use crate::record::{Dataset, DatasetResult, DatasetSummary, NumericColumns};
use crate::translate::{
    plan_from_response, IntentTranslator, TranslateError, TranslateResult,
    DEFAULT_MAX_CONCURRENT_REQUESTS,
};

/// Shared, read-only selection state
pub struct SelectionService {
    translator: Arc<dyn IntentTranslator>,
    numeric: NumericColumns,
    default_limit: usize,
    metrics: Arc<MetricsRegistry>,
    limiter: Semaphore,
}

impl SelectionService {
    /// Creates a service with default numeric columns and limits
    pub fn new(translator: Arc<dyn IntentTranslator>) -> Self {
        Self {
            translator,
            numeric: NumericColumns::default(),
            default_limit: DEFAULT_LIMIT,
            metrics: Arc::new(MetricsRegistry::new()),
            limiter: Semaphore::new(DEFAULT_MAX_CONCURRENT_REQUESTS),
        }
    }

    pub fn with_numeric_columns(mut self, numeric: NumericColumns) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    /// Caps simultaneous language model calls
    pub fn with_max_concurrent_requests(mut self, permits: usize) -> Self {
        self.limiter = Semaphore::new(permits.max(1));
        self
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Selects project identifiers for a prompt over a CSV dataset.
    ///
    /// Only dataset failures are returned as errors. Translation failures
    /// fall back to the default plan.
    pub async fn select(&self, prompt: &str, projects_csv: &str) -> DatasetResult<Selection> {
        let request_id = Uuid::new_v4().to_string();

        let dataset = match Dataset::from_csv_str(projects_csv) {
            Ok(dataset) => dataset,
            Err(err) => {
                self.metrics.increment_selections_failed();
                log_event_with_fields(
                    Event::SelectionFailed,
                    &[
                        ("request_id", request_id.as_str()),
                        ("code", err.code()),
                        ("error", err.to_string().as_str()),
                    ],
                );
                return Err(err);
            }
        };
        log_event_with_fields(
            Event::DatasetLoaded,
            &[
                ("request_id", request_id.as_str()),
                ("records", dataset.len().to_string().as_str()),
            ],
        );

        let summary = dataset.summary(&self.numeric);
        let plan = self.plan_for(prompt, &summary, &request_id).await;
        let selection = self.select_with_plan(&dataset, &plan);

        self.metrics.increment_selections_completed();
        log_event_with_fields(
            Event::SelectionComplete,
            &[
                ("request_id", request_id.as_str()),
                ("selected", selection.len().to_string().as_str()),
                ("matched", selection.matched_count.to_string().as_str()),
            ],
        );
        Ok(selection)
    }

    /// Asks the translator for a plan, substituting the default on failure
    pub async fn plan_for(
        &self,
        prompt: &str,
        summary: &DatasetSummary,
        request_id: &str,
    ) -> QueryPlan {
        let outcome = match self.translate(prompt, summary).await {
            Ok(text) => plan_from_response(&text),
            Err(err) => {
                self.metrics.increment_llm_failures();
                log_event_with_fields(
                    Event::LlmRequestFailed,
                    &[
                        ("request_id", request_id),
                        ("code", err.code()),
                        ("error", err.to_string().as_str()),
                    ],
                );
                PlanOutcome::Default(DefaultReason::TranslationFailed)
            }
        };

        match &outcome {
            PlanOutcome::Valid(plan) => {
                self.metrics.increment_plans_translated();
                log_event_with_fields(
                    Event::PlanTranslated,
                    &[
                        ("request_id", request_id),
                        ("plan", plan.to_json().to_string().as_str()),
                    ],
                );
            }
            PlanOutcome::Default(reason) => {
                self.metrics.increment_plans_defaulted();
                log_event_with_fields(
                    Event::PlanDefaulted,
                    &[("request_id", request_id), ("reason", reason.as_str())],
                );
            }
        }

        let plan = outcome.into_plan(self.default_limit);
        if plan.is_empty() {
            self.metrics.increment_plans_empty();
            log_event_with_fields(Event::PlanEmpty, &[("request_id", request_id)]);
        }
        plan
    }

    /// Executes an already normalized plan over a dataset
    pub fn select_with_plan(&self, dataset: &Dataset, plan: &QueryPlan) -> Selection {
        IntentExecutor::new(&self.numeric).execute(dataset.records(), plan)
    }

    async fn translate(&self, prompt: &str, summary: &DatasetSummary) -> TranslateResult<String> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| TranslateError::LimiterClosed)?;
        self.translator.translate(prompt, summary).await
    }
}

//! Observable events for portfolio-agent
//!
//! Events are explicit and typed; each one has a fixed severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP server bound and serving
    ServerStart,

    // Selection requests
    /// Chat request received
    RequestReceived,
    /// Dataset parsed from the request
    DatasetLoaded,
    /// Language model returned a usable plan
    PlanTranslated,
    /// Default plan substituted
    PlanDefaulted,
    /// Plan carried no criteria, sort or limit
    PlanEmpty,
    /// Sort requested on a column without numeric semantics
    SortColumnIgnored,
    /// Selection returned to the caller
    SelectionComplete,
    /// Selection could not be computed
    SelectionFailed,

    // Translation
    /// Language model call failed
    LlmRequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::RequestReceived => "REQUEST_RECEIVED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::PlanTranslated => "PLAN_TRANSLATED",
            Event::PlanDefaulted => "PLAN_DEFAULTED",
            Event::PlanEmpty => "PLAN_EMPTY",
            Event::SortColumnIgnored => "SORT_COLUMN_IGNORED",
            Event::SelectionComplete => "SELECTION_COMPLETE",
            Event::SelectionFailed => "SELECTION_FAILED",
            Event::LlmRequestFailed => "LLM_REQUEST_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::DatasetLoaded => Severity::Trace,
            Event::PlanDefaulted | Event::PlanEmpty | Event::SortColumnIgnored => Severity::Warn,
            Event::SelectionFailed | Event::LlmRequestFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

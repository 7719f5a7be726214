//! Observability subsystem for portfolio-agent
//!
//! - Structured JSON logging, one line per event
//! - Typed lifecycle and request events
//! - Lock-free counters exposed at `/metrics`
//!
//! Observability is read-only: it never changes a selection and a failure
//! to log never fails a request.
//!
//! # Usage
//!
//! ```ignore
//! use portfolio_agent::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::SelectionComplete, &[("count", "3")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_selections_completed();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a typed event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a typed event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

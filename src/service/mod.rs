//! Request orchestration for portfolio-agent
//!
//! Dataset parsing, translation, normalization and execution are
//! independent modules; this layer sequences them for one request and
//! records what happened.

mod selection;

pub use selection::SelectionService;

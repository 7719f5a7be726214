//! Query planning for portfolio-agent
//!
//! Turns the loosely typed intent produced by a language model into a
//! [`QueryPlan`] the executor can run.
//!
//! # Design Principles
//!
//! - Untrusted input: every candidate is validated or replaced by the
//!   default selection, never rejected
//! - Explicit outcome: [`PlanOutcome`] says whether the candidate was used
//! - No side effects: normalization is pure

mod ast;
mod normalizer;

pub use ast::{
    Comparison, Criterion, CriterionValue, Operation, QueryPlan, SortOrder, SortSpec,
};
pub use normalizer::{DefaultReason, PlanNormalizer, PlanOutcome, DEFAULT_LIMIT};

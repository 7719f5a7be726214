//! Intent executor subsystem for portfolio-agent
//!
//! The executor consumes normalized plans and produces deterministic
//! identifier selections over an in-memory record set.
//!
//! # Execution Flow (strict order)
//!
//! 1. Empty plan short-circuit
//! 2. Filter records by all criteria
//! 3. Apply sort (numeric columns only, stable)
//! 4. Apply limit
//! 5. Include or exclude projection over the full dataset
//!
//! # Invariants
//!
//! - Deterministic and side-effect free
//! - Every returned identifier is present in the input records
//! - Include and exclude of the same plan partition the identifier set

mod executor;
mod filters;
mod result;
mod sorter;

pub use executor::IntentExecutor;
pub use filters::CriterionFilter;
pub use result::{Selection, SelectionStatus};
pub use sorter::SelectionSorter;

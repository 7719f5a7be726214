//! CLI module for portfolio-agent
//!
//! Provides command-line interface for:
//! - serve: Host the chat endpoint
//! - select: Run a JSON plan against a CSV file
//! - ask: One-shot prompt translation and selection

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{ask, run, run_command, select, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_plan_text, write_response};

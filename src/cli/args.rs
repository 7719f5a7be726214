//! CLI argument definitions using clap
//!
//! Commands:
//! - portfolio-agent serve [--config <path>]
//! - portfolio-agent select --csv <path> [--plan <path>]
//! - portfolio-agent ask [--config <path>] --csv <path> --prompt <text>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// portfolio-agent - natural-language project portfolio selection
#[derive(Parser, Debug)]
#[command(name = "portfolio-agent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the chat endpoint over HTTP
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Execute a JSON plan against a CSV portfolio and exit
    Select {
        /// Path to the projects CSV file
        #[arg(long)]
        csv: PathBuf,

        /// Path to the plan JSON (read from stdin when omitted)
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Translate a prompt with the language model, select, and exit
    Ask {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to the projects CSV file
        #[arg(long)]
        csv: PathBuf,

        /// Natural-language request
        #[arg(long)]
        prompt: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

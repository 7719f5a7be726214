//! CLI command implementations
//!
//! `serve` hosts the chat endpoint. `select` and `ask` are one-shot: they
//! print a single JSON envelope and exit.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::config::AgentConfig;
use crate::executor::{IntentExecutor, Selection};
use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event};
use crate::planner::{PlanNormalizer, PlanOutcome, DEFAULT_LIMIT};
use crate::record::{Dataset, NumericColumns};
use crate::service::SelectionService;
use crate::translate::LlmClient;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_plan_text, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Select { csv, plan } => select(&csv, plan.as_deref()),
        Command::Ask {
            config,
            csv,
            prompt,
        } => ask(config.as_deref(), &csv, &prompt),
    }
}

/// Serve the chat endpoint until the process is stopped
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let service = Arc::new(build_service(&config)?);
    let server = HttpServer::with_config(config.server.clone(), service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Execute a plan against a CSV file, with no language model involved
pub fn select(csv_path: &Path, plan_path: Option<&Path>) -> CliResult<()> {
    let dataset = Dataset::from_path(csv_path)?;
    let plan_text = read_plan_text(plan_path)?;

    let selection = select_from_text(&dataset, &plan_text, &NumericColumns::default());
    write_response(json!({ "ids": selection.into_ids() }))
}

/// Translate a prompt, select, and print the identifiers
pub fn ask(config_path: Option<&Path>, csv_path: &Path, prompt: &str) -> CliResult<()> {
    let config = load_config(config_path)?;
    let service = build_service(&config)?;
    let projects = fs::read_to_string(csv_path).map_err(|e| {
        CliError::io_error(format!("Failed to read '{}': {}", csv_path.display(), e))
    })?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;
    let selection = rt.block_on(service.select(prompt, &projects))?;

    write_response(json!({ "ids": selection.into_ids() }))
}

fn load_config(path: Option<&Path>) -> CliResult<AgentConfig> {
    let config = AgentConfig::load_or_default(path)?;
    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", source.as_str())]);
    Ok(config)
}

fn build_service(config: &AgentConfig) -> CliResult<SelectionService> {
    let client = LlmClient::from_config(&config.llm)?;
    Ok(SelectionService::new(Arc::new(client))
        .with_numeric_columns(config.numeric())
        .with_default_limit(config.default_limit)
        .with_max_concurrent_requests(config.llm.max_concurrent_requests))
}

/// Normalize raw plan JSON and execute it
fn select_from_text(dataset: &Dataset, plan_text: &str, numeric: &NumericColumns) -> Selection {
    let outcome = PlanNormalizer::from_json_str(plan_text);
    if let PlanOutcome::Default(reason) = &outcome {
        log_event_with_fields(Event::PlanDefaulted, &[("reason", reason.as_str())]);
    }
    let plan = outcome.into_plan(DEFAULT_LIMIT);
    IntentExecutor::new(numeric).execute(dataset.records(), &plan)
}

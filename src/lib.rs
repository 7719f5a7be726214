//! portfolio-agent - natural-language selection over a project portfolio
//!
//! A user asks for projects in free text; a language model turns the request
//! into a structured plan; the plan is normalized and executed over the
//! portfolio to produce an ordered list of project IDs.

pub mod cli;
pub mod config;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod planner;
pub mod record;
pub mod service;
pub mod translate;

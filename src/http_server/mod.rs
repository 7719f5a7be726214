//! # HTTP Server Module
//!
//! Axum front for the selection service.
//!
//! # Endpoints
//!
//! - `POST /api/chat` - Prompt + CSV portfolio to selected project IDs
//! - `GET /health` - Health check
//! - `GET /metrics` - Request counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod selection_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;

//! Selection HTTP Routes
//!
//! `POST /api/chat` turns a prompt and a CSV portfolio into a comma-separated
//! list of project identifiers.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};
use crate::service::SelectionService;

use super::errors::ApiError;

/// Chat request body; both fields are required but checked by hand so the
/// client gets the fixed 400 message instead of a deserializer error
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub projects: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Selected identifiers joined with commas
    pub response: String,
}

/// Create selection routes
pub fn selection_routes(service: Arc<SelectionService>) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .with_state(service)
}

async fn chat_handler(
    State(service): State<Arc<SelectionService>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    service.metrics().increment_requests_received();

    let (prompt, projects) = match (request.prompt, request.projects) {
        (Some(prompt), Some(projects)) if !prompt.is_empty() && !projects.is_empty() => {
            (prompt, projects)
        }
        _ => {
            service.metrics().increment_requests_rejected();
            return Err(ApiError::MissingFields);
        }
    };

    log_event_with_fields(
        Event::RequestReceived,
        &[("prompt_chars", prompt.chars().count().to_string().as_str())],
    );

    let selection = service
        .select(&prompt, &projects)
        .await
        .map_err(|_| ApiError::SelectionFailed)?;

    Ok(Json(ChatResponse {
        response: selection.joined(),
    }))
}

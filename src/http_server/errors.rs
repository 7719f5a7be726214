//! # HTTP API Errors
//!
//! Client-facing messages are fixed strings in the front end's language;
//! details go to the log, never to the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Chat endpoint errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `prompt` or `projects` missing or empty
    #[error("El prompt y la lista de proyectos son requeridos.")]
    MissingFields,

    /// Selection could not be computed
    #[error("Error al ejecutar la selección de proyectos.")]
    SelectionFailed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::SelectionFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

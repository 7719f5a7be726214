//! Translation error types
//!
//! Every translation error is recovered by the caller with the default
//! selection; these errors are only logged.

use thiserror::Error;

/// Errors raised while asking the language model for a plan
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The configured API key variable is unset
    #[error("API key environment variable '{0}' is not set")]
    MissingApiKey(String),

    /// Request could not be sent or the response could not be read
    #[error("LLM transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("LLM API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered without any completion text
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// Too many translations already in flight and the limiter was closed
    #[error("Translation limiter closed")]
    LimiterClosed,
}

impl TranslateError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::MissingApiKey(_) => "PORTFOLIO_LLM_MISSING_API_KEY",
            TranslateError::Transport(_) => "PORTFOLIO_LLM_TRANSPORT",
            TranslateError::Api { .. } => "PORTFOLIO_LLM_API",
            TranslateError::EmptyResponse => "PORTFOLIO_LLM_EMPTY_RESPONSE",
            TranslateError::LimiterClosed => "PORTFOLIO_LLM_LIMITER_CLOSED",
        }
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = TranslateError::Api {
            status: 429,
            body: "rate limited".into(),
        };
        assert_eq!(err.code(), "PORTFOLIO_LLM_API");
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_missing_key_display() {
        let err = TranslateError::MissingApiKey("LLM_API_KEY".into());
        assert!(err.to_string().contains("LLM_API_KEY"));
    }
}

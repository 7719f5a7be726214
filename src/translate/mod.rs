//! Intent translation for portfolio-agent
//!
//! A language model turns the user's free text into a JSON plan. The model
//! is a black box behind [`IntentTranslator`]: it returns raw text, and the
//! caller extracts and normalizes whatever plan it can find.

mod client;
mod config;
mod errors;
mod extract;
mod prompt;

use std::future::Future;
use std::pin::Pin;

use crate::record::DatasetSummary;

pub use client::LlmClient;
pub use config::{LlmConfig, DEFAULT_MAX_CONCURRENT_REQUESTS};
pub use errors::{TranslateError, TranslateResult};
pub use extract::{extract_json, plan_from_response};
pub use prompt::build_system_prompt;

/// Turns a natural-language request into raw model text
pub trait IntentTranslator: Send + Sync {
    fn translate<'a>(
        &'a self,
        prompt: &'a str,
        summary: &'a DatasetSummary,
    ) -> Pin<Box<dyn Future<Output = TranslateResult<String>> + Send + 'a>>;
}

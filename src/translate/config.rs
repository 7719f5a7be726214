//! Language model client configuration

use serde::{Deserialize, Serialize};

/// Language model endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Chat completions URL (OpenAI-compatible or Azure OpenAI deployment)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model name sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cap on simultaneous outstanding requests
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "LLM_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Simultaneous language model calls allowed when nothing is configured
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 8;

fn default_max_concurrent_requests() -> usize {
    DEFAULT_MAX_CONCURRENT_REQUESTS
}

fn default_max_tokens() -> u32 {
    512
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl LlmConfig {
    /// True when the URL points at an Azure OpenAI deployment
    pub fn is_azure(&self) -> bool {
        self.api_url.contains(".openai.azure.com")
    }
}

//! Async language model client
//!
//! Speaks the OpenAI chat completions format. Azure OpenAI deployments use
//! the same body with an `api-key` header instead of a bearer token.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::record::DatasetSummary;

use super::config::LlmConfig;
use super::errors::{TranslateError, TranslateResult};
use super::prompt::build_system_prompt;
use super::IntentTranslator;

/// How the API key is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthStyle {
    Bearer,
    AzureKey,
}

/// Chat completions client
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    auth: AuthStyle,
}

impl LlmClient {
    /// Creates a client with default timeout and token budget
    pub fn new(api_key: String, api_url: String, model: String) -> TranslateResult<Self> {
        let config = LlmConfig {
            api_url,
            model,
            ..LlmConfig::default()
        };
        let client = Self::http_client(&config)?;
        Ok(Self::with_key(&config, api_key, client))
    }

    /// Creates a client from configuration, reading the key from the environment
    pub fn from_config(config: &LlmConfig) -> TranslateResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| TranslateError::MissingApiKey(config.api_key_env.clone()))?;
        let client = Self::http_client(config)?;
        Ok(Self::with_key(config, api_key, client))
    }

    fn http_client(config: &LlmConfig) -> TranslateResult<Client> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?)
    }

    fn with_key(config: &LlmConfig, api_key: String, client: Client) -> Self {
        let auth = if config.is_azure() {
            AuthStyle::AzureKey
        } else {
            AuthStyle::Bearer
        };
        Self {
            client,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            auth,
        }
    }

    /// Sends one system + user exchange and returns the completion text
    pub async fn complete(&self, system: &str, user: &str) -> TranslateResult<String> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: 0.0,
            messages: [
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        let builder = self.client.post(&self.api_url).json(&request);
        let builder = match self.auth {
            AuthStyle::Bearer => builder.bearer_auth(&self.api_key),
            AuthStyle::AzureKey => builder.header("api-key", &self.api_key),
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(TranslateError::EmptyResponse)
    }
}

impl IntentTranslator for LlmClient {
    fn translate<'a>(
        &'a self,
        prompt: &'a str,
        summary: &'a DatasetSummary,
    ) -> Pin<Box<dyn Future<Output = TranslateResult<String>> + Send + 'a>> {
        Box::pin(async move {
            let system = build_system_prompt(summary);
            self.complete(&system, prompt).await
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: [Message<'a>; 2],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

//! Agent configuration
//!
//! A single JSON file. Every field has a default, so `{}` is a valid
//! configuration and a missing path means "use the defaults".

mod errors;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::planner::DEFAULT_LIMIT;
use crate::record::{NumericColumns, BENEFIT_COLUMN};
use crate::translate::LlmConfig;

pub use errors::{ConfigError, ConfigResult};

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Language model endpoint
    #[serde(default)]
    pub llm: LlmConfig,

    /// Limit of the default plan (must be > 0)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Columns compared and sorted as integers (must be non-empty)
    #[serde(default = "default_numeric_columns")]
    pub numeric_columns: Vec<String>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_numeric_columns() -> Vec<String> {
    vec![BENEFIT_COLUMN.to_string()]
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            llm: LlmConfig::default(),
            default_limit: default_limit(),
            numeric_columns: default_numeric_columns(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: AgentConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::invalid("default_limit must be > 0"));
        }

        if self.numeric_columns.iter().all(|c| c.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "numeric_columns must name at least one column",
            ));
        }

        if self.llm.api_url.trim().is_empty() {
            return Err(ConfigError::invalid("llm.api_url must not be empty"));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::invalid("llm.timeout_secs must be > 0"));
        }

        if self.llm.max_concurrent_requests == 0 {
            return Err(ConfigError::invalid(
                "llm.max_concurrent_requests must be > 0",
            ));
        }

        Ok(())
    }

    /// Numeric column table for the executor
    pub fn numeric(&self) -> NumericColumns {
        NumericColumns::new(
            self.numeric_columns
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty()),
        )
    }
}

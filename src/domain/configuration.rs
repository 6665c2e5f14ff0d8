//! Client configuration domain model.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Connection settings loaded from a TOML file and environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the orchestration service HTTP API.
    #[serde(default = "default_address")]
    pub address: Url,
    /// Namespace every request is scoped to.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Request deadline in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Bearer token; only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            namespace: default_namespace(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.namespace.trim().is_empty() {
            return Err(AppError::InvalidConfig("namespace must not be empty".to_string()));
        }
        if self.address.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "address must be a base URL: {}",
                self.address
            )));
        }
        Ok(())
    }
}

fn default_address() -> Url {
    Url::parse("http://localhost:7243").expect("Default address must be valid")
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_timeout() -> u64 {
    30
}

//! Client configuration loading from a TOML file and the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::domain::{AppError, ClientConfig};

pub const CONFIG_ENV: &str = "WFCTL_CONFIG";
pub const ADDRESS_ENV: &str = "WFCTL_ADDRESS";
pub const NAMESPACE_ENV: &str = "WFCTL_NAMESPACE";
pub const API_KEY_ENV: &str = "WFCTL_API_KEY";

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub address: Option<Url>,
    pub namespace: Option<String>,
}

/// Load the client configuration.
///
/// Precedence, lowest first: built-in defaults, the TOML file (`config_path`
/// or `$WFCTL_CONFIG`), `WFCTL_*` environment variables, command-line flags.
pub fn load_client_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ClientConfig, AppError> {
    let path =
        config_path.map(Path::to_path_buf).or_else(|| env_value(CONFIG_ENV).map(PathBuf::from));

    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading client config");
            let content = fs::read_to_string(&path).map_err(|e| {
                AppError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
            })?;
            toml::from_str(&content)?
        }
        None => ClientConfig::default(),
    };

    if let Some(address) = env_value(ADDRESS_ENV) {
        config.address = Url::parse(&address).map_err(|e| {
            AppError::InvalidConfig(format!("{} is not a valid URL: {}", ADDRESS_ENV, e))
        })?;
    }
    if let Some(namespace) = env_value(NAMESPACE_ENV) {
        config.namespace = namespace;
    }
    config.api_key = env_value(API_KEY_ENV);

    if let Some(address) = &overrides.address {
        config.address = address.clone();
    }
    if let Some(namespace) = &overrides.namespace {
        config.namespace = namespace.clone();
    }

    config.validate()?;
    Ok(config)
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

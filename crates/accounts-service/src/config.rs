//! # Configuration
//!
//! [`AccountsConfig`] is read from YAML. The file in `config/accounts.yaml` is
//! compiled in as the default; `ACCOUNTS_CONFIG` points at a replacement.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "ACCOUNTS_CONFIG";

const EMBEDDED: &str = include_str!("../config/accounts.yaml");

/// Placeholder replaced in legal statement templates.
pub const PERIOD_END_PLACEHOLDER: &str = "{period_end_on}";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountsConfig {
    pub collection_buffer_size: usize,
    /// Statement name → template.
    pub legal_statements: BTreeMap<String, String>,
}

impl AccountsConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.collection_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "collection_buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    /// The compiled-in defaults.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(EMBEDDED)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Loads the file named by `ACCOUNTS_CONFIG`, or the embedded defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                info!(path = %Path::new(&path).display(), "Loading configuration");
                Self::load(path)
            }
            None => Self::embedded(),
        }
    }
}

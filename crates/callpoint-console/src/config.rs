/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed console configuration
[POS]:    Configuration layer - backend and session setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

/// Top-level configuration for the operator console
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Backend connection settings
    pub backend: BackendConfig,
    /// Callback to bind on startup when not given on the command line
    #[serde(default)]
    pub callback_id: Option<i64>,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the tasking server
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API token for authenticated requests
    pub api_token: String,
    /// Operator name attached to submitted tasks
    #[serde(default = "default_operator")]
    pub operator: String,
}

fn default_base_url() -> String {
    "https://127.0.0.1:7443".to_string()
}

fn default_operator() -> String {
    "operator".to_string()
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

//! Reporter configuration

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};

/// SDK-level reporting settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Turn every exposure entry point into a no-op
    pub disable_report: bool,

    /// Environment label written into row records (e.g. `prod`, `test`)
    pub env_type: String,
}

impl ReporterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable_report(mut self, disable: bool) -> Self {
        self.disable_report = disable;
        self
    }

    pub fn with_env_type(mut self, env_type: impl Into<String>) -> Self {
        self.env_type = env_type.into();
        self
    }

    /// Parse from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("Failed to parse reporter config: {}", e)))
    }

    /// Load from `config/reporter.*` and `BEACON_*` environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/reporter").required(false))
            .add_source(config::Environment::with_prefix("BEACON"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize reporter config: {}", e)),
            Err(_) => {
                tracing::info!("No reporter config found, using default configuration");
                Ok(Self::default())
            }
        }
    }
}

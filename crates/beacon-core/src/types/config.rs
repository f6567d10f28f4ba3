//! Remote config and feature flag results

use super::user::UserContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Remote config definition carried with a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Scenes to report into, in priority order
    #[serde(default)]
    pub scene_id_list: Vec<i64>,
}

/// One resolved remote config value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub key: String,
    /// Raw config value
    pub data: Vec<u8>,
    pub unit_id_type: i32,
    pub user_ctx: Arc<UserContext>,
    pub remote_config: RemoteConfig,
}

impl ConfigResult {
    pub fn new(user_ctx: Arc<UserContext>, key: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            data: data.into(),
            unit_id_type: 0,
            user_ctx,
            remote_config: RemoteConfig::default(),
        }
    }

    pub fn with_unit_id_type(mut self, unit_id_type: i32) -> Self {
        self.unit_id_type = unit_id_type;
        self
    }

    pub fn with_scene_ids(mut self, scene_ids: Vec<i64>) -> Self {
        self.remote_config.scene_id_list = scene_ids;
        self
    }

    pub fn scene_ids(&self) -> &[i64] {
        &self.remote_config.scene_id_list
    }

    /// Config value rendered as text, lossy for non UTF-8 bytes
    pub fn data_string(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// A feature flag is a remote config reported against its own sinks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlag {
    pub config_result: Option<ConfigResult>,
}

impl FeatureFlag {
    pub fn new(config_result: ConfigResult) -> Self {
        Self {
            config_result: Some(config_result),
        }
    }
}

impl From<ConfigResult> for FeatureFlag {
    fn from(config_result: ConfigResult) -> Self {
        Self::new(config_result)
    }
}

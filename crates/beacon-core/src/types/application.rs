//! Per-project routing snapshot
//!
//! An `Application` is resolved and cached outside this crate. Routing code only
//! reads it, and treats one snapshot as immutable for the duration of a call.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sink table identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsMetadata {
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub token: String,
}

/// Routing policy of one sink
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub is_enable: bool,

    /// Name of the metrics plugin that owns the sink
    #[serde(default)]
    pub plugin_name: String,

    /// 1-in-N sampling applied to successful calls
    #[serde(default = "default_interval")]
    pub sampling_interval: u32,

    /// 1-in-N sampling applied to failed calls
    #[serde(default = "default_interval")]
    pub err_sampling_interval: u32,

    #[serde(default)]
    pub metadata: Option<MetricsMetadata>,
}

fn default_interval() -> u32 {
    1
}

impl MetricsConfig {
    pub fn new(plugin_name: impl Into<String>, metadata: MetricsMetadata) -> Self {
        Self {
            is_enable: true,
            plugin_name: plugin_name.into(),
            sampling_interval: 1,
            err_sampling_interval: 1,
            metadata: Some(metadata),
        }
    }

    pub fn with_enabled(mut self, is_enable: bool) -> Self {
        self.is_enable = is_enable;
        self
    }

    pub fn with_sampling_interval(mut self, interval: u32) -> Self {
        self.sampling_interval = interval;
        self
    }

    pub fn with_err_sampling_interval(mut self, interval: u32) -> Self {
        self.err_sampling_interval = interval;
        self
    }

    pub fn without_metadata(mut self) -> Self {
        self.metadata = None;
        self
    }

    /// Metadata of an enabled sink; `None` when the config cannot receive data
    pub fn active_metadata(&self) -> Option<&MetricsMetadata> {
        if self.is_enable {
            self.metadata.as_ref()
        } else {
            None
        }
    }
}

/// Scene-scoped sinks plus the fallback sink of one record category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRouting {
    #[serde(default)]
    pub scenes: BTreeMap<i64, MetricsConfig>,
    #[serde(default)]
    pub default: Option<MetricsConfig>,
}

impl CategoryRouting {
    pub fn with_scene(mut self, scene_id: i64, config: MetricsConfig) -> Self {
        self.scenes.insert(scene_id, config);
        self
    }

    pub fn with_default(mut self, config: MetricsConfig) -> Self {
        self.default = Some(config);
        self
    }

    pub fn scene(&self, scene_id: i64) -> Option<&MetricsConfig> {
        self.scenes.get(&scene_id)
    }

    /// True when the category has no reporting configuration at all
    pub fn is_unconfigured(&self) -> bool {
        self.scenes.is_empty() && self.default.is_none()
    }
}

/// Reporting control data of a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlData {
    /// Disables every exposure path of the project
    #[serde(default)]
    pub disable_report: bool,

    #[serde(default)]
    pub experiment: CategoryRouting,

    #[serde(default)]
    pub remote_config: CategoryRouting,

    #[serde(default)]
    pub feature_flag: CategoryRouting,

    /// Monitoring events; only `default` is consulted
    #[serde(default)]
    pub event: CategoryRouting,

    /// Group ids never reported, when mapped to `true`
    #[serde(default)]
    pub ignore_report_group_id: HashMap<i64, bool>,
}

impl ControlData {
    pub fn is_group_ignored(&self, group_id: i64) -> bool {
        self.ignore_report_group_id
            .get(&group_id)
            .copied()
            .unwrap_or(false)
    }

    /// Config used for monitoring events
    pub fn event_metrics_config(&self) -> Option<&MetricsConfig> {
        self.event.default.as_ref()
    }
}

/// Cached configuration of one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub project_id: String,
    #[serde(default)]
    pub control_data: ControlData,
}

impl Application {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            control_data: ControlData::default(),
        }
    }

    pub fn with_control_data(mut self, control_data: ControlData) -> Self {
        self.control_data = control_data;
        self
    }

    /// Parse from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let application: Self = serde_json::from_str(content)?;
        application.validate()
    }

    /// Parse from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let application: Self = serde_yaml::from_str(content)?;
        application.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.project_id.is_empty() {
            return Err(CoreError::InvalidConfig(
                "application is missing project_id".to_string(),
            ));
        }
        Ok(self)
    }
}

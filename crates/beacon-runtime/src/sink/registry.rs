//! Plugin registry sink
//!
//! Routes each dispatch to the sink registered under `SinkMetadata::plugin_name`.

use super::{MetricsSink, SinkMetadata};
use crate::error::{Result, RuntimeError};
use beacon_core::{ExposureGroup, MonitorEventGroup};
use std::collections::HashMap;
use std::sync::Arc;

/// Sinks keyed by metrics plugin name
#[derive(Default)]
pub struct SinkRegistry {
    sinks: HashMap<String, Arc<dyn MetricsSink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sink` under `plugin_name`, replacing any previous registration
    pub fn register(&mut self, plugin_name: impl Into<String>, sink: Arc<dyn MetricsSink>) {
        self.sinks.insert(plugin_name.into(), sink);
    }

    pub fn with_sink(mut self, plugin_name: impl Into<String>, sink: Arc<dyn MetricsSink>) -> Self {
        self.register(plugin_name, sink);
        self
    }

    pub fn plugin_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sinks.keys().cloned().collect();
        names.sort();
        names
    }

    fn resolve(&self, metadata: &SinkMetadata) -> Result<&Arc<dyn MetricsSink>> {
        self.sinks
            .get(&metadata.plugin_name)
            .ok_or_else(|| RuntimeError::PluginNotFound(metadata.plugin_name.clone()))
    }
}

#[async_trait::async_trait]
impl MetricsSink for SinkRegistry {
    async fn send_exposures(&self, metadata: &SinkMetadata, batch: &ExposureGroup) -> Result<()> {
        self.resolve(metadata)?.send_exposures(metadata, batch).await
    }

    async fn send_rows(&self, metadata: &SinkMetadata, rows: &[Vec<String>]) -> Result<()> {
        self.resolve(metadata)?.send_rows(metadata, rows).await
    }

    async fn send_monitor_events(
        &self,
        metadata: &SinkMetadata,
        events: &MonitorEventGroup,
    ) -> Result<()> {
        self.resolve(metadata)?
            .send_monitor_events(metadata, events)
            .await
    }
}

//! Metrics sinks
//!
//! A sink receives already-routed batches. It owns transport and any sampling of
//! exposures by `SinkMetadata::sampling_interval`; the reporter only decides what
//! goes where.

mod memory;
mod registry;
mod trace;

pub use memory::{MemorySink, SinkCall};
pub use registry::SinkRegistry;
pub use trace::TracingSink;

use crate::error::Result;
use beacon_core::{ExposureGroup, MetricsConfig, MetricsMetadata, MonitorEventGroup};

/// Destination of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkMetadata {
    pub plugin_name: String,
    pub table_name: String,
    pub table_id: String,
    pub token: String,
    pub sampling_interval: u32,
}

impl SinkMetadata {
    /// Destination described by `config`, sampled at `sampling_interval`
    pub fn new(config: &MetricsConfig, metadata: &MetricsMetadata, sampling_interval: u32) -> Self {
        Self {
            plugin_name: config.plugin_name.clone(),
            table_name: metadata.name.clone(),
            table_id: metadata.id.clone(),
            token: metadata.token.clone(),
            sampling_interval,
        }
    }
}

/// Reporting destination
#[async_trait::async_trait]
pub trait MetricsSink: Send + Sync {
    /// Send a batch of structured exposures
    async fn send_exposures(&self, metadata: &SinkMetadata, batch: &ExposureGroup) -> Result<()>;

    /// Send row-oriented records
    async fn send_rows(&self, metadata: &SinkMetadata, rows: &[Vec<String>]) -> Result<()>;

    /// Send monitoring events
    async fn send_monitor_events(
        &self,
        metadata: &SinkMetadata,
        events: &MonitorEventGroup,
    ) -> Result<()>;
}

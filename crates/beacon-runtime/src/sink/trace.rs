//! Sink that writes records to the tracing log

use super::{MetricsSink, SinkMetadata};
use crate::error::Result;
use beacon_core::{ExposureGroup, MonitorEventGroup};

/// Emits every record as a structured `tracing` event at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait::async_trait]
impl MetricsSink for TracingSink {
    async fn send_exposures(&self, metadata: &SinkMetadata, batch: &ExposureGroup) -> Result<()> {
        for exposure in &batch.exposures {
            let record = serde_json::to_string(exposure)?;
            tracing::info!(
                table = %metadata.table_name,
                plugin = %metadata.plugin_name,
                sampling_interval = metadata.sampling_interval,
                "exposure {}",
                record
            );
        }
        Ok(())
    }

    async fn send_rows(&self, metadata: &SinkMetadata, rows: &[Vec<String>]) -> Result<()> {
        for row in rows {
            tracing::info!(
                table = %metadata.table_name,
                plugin = %metadata.plugin_name,
                sampling_interval = metadata.sampling_interval,
                "row {}",
                row.join("|")
            );
        }
        Ok(())
    }

    async fn send_monitor_events(
        &self,
        metadata: &SinkMetadata,
        events: &MonitorEventGroup,
    ) -> Result<()> {
        for event in &events.events {
            let record = serde_json::to_string(event)?;
            tracing::info!(
                table = %metadata.table_name,
                plugin = %metadata.plugin_name,
                "monitor event {}",
                record
            );
        }
        Ok(())
    }
}

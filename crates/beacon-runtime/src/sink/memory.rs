//! In-memory sink
//!
//! Records every call for inspection. Suitable for tests and local development.

use super::{MetricsSink, SinkMetadata};
use crate::error::{Result, RuntimeError};
use beacon_core::{ExposureGroup, MonitorEventGroup};
use std::collections::HashSet;
use tokio::sync::RwLock;

/// One recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Exposures {
        metadata: SinkMetadata,
        batch: ExposureGroup,
    },
    Rows {
        metadata: SinkMetadata,
        rows: Vec<Vec<String>>,
    },
    MonitorEvents {
        metadata: SinkMetadata,
        events: MonitorEventGroup,
    },
}

impl SinkCall {
    pub fn metadata(&self) -> &SinkMetadata {
        match self {
            SinkCall::Exposures { metadata, .. }
            | SinkCall::Rows { metadata, .. }
            | SinkCall::MonitorEvents { metadata, .. } => metadata,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.metadata().table_name
    }
}

/// Sink that keeps every call in memory
///
/// Calls to a table registered with [`MemorySink::with_failing_table`] are recorded
/// and then rejected.
#[derive(Debug, Default)]
pub struct MemorySink {
    calls: RwLock<Vec<SinkCall>>,
    failing_tables: HashSet<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every call addressed to `table_name`
    pub fn with_failing_table(mut self, table_name: impl Into<String>) -> Self {
        self.failing_tables.insert(table_name.into());
        self
    }

    /// All calls in arrival order, failed attempts included
    pub async fn calls(&self) -> Vec<SinkCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Calls addressed to `table_name`
    pub async fn calls_to(&self, table_name: &str) -> Vec<SinkCall> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|call| call.table_name() == table_name)
            .cloned()
            .collect()
    }

    pub async fn clear(&self) {
        self.calls.write().await.clear();
    }

    async fn record(&self, call: SinkCall) -> Result<()> {
        let metadata = call.metadata().clone();
        self.calls.write().await.push(call);

        if self.failing_tables.contains(&metadata.table_name) {
            return Err(RuntimeError::sink(
                metadata.plugin_name,
                format!("table {} rejected the batch", metadata.table_name),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MetricsSink for MemorySink {
    async fn send_exposures(&self, metadata: &SinkMetadata, batch: &ExposureGroup) -> Result<()> {
        self.record(SinkCall::Exposures {
            metadata: metadata.clone(),
            batch: batch.clone(),
        })
        .await
    }

    async fn send_rows(&self, metadata: &SinkMetadata, rows: &[Vec<String>]) -> Result<()> {
        self.record(SinkCall::Rows {
            metadata: metadata.clone(),
            rows: rows.to_vec(),
        })
        .await
    }

    async fn send_monitor_events(
        &self,
        metadata: &SinkMetadata,
        events: &MonitorEventGroup,
    ) -> Result<()> {
        self.record(SinkCall::MonitorEvents {
            metadata: metadata.clone(),
            events: events.clone(),
        })
        .await
    }
}

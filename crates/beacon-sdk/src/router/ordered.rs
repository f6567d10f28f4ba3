//! Ordered routing of remote config and feature flag rows
//!
//! The row is offered to every scene in the given order and sent to each one with
//! an enabled sink. Any scene dispatch suppresses the default sink.

use super::destination;
use crate::error::Result;
use beacon_core::CategoryRouting;
use beacon_runtime::MetricsSink;

/// Where a row was sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedReport {
    /// Scenes that received the row, in dispatch order
    pub dispatched: Vec<i64>,
    pub default_sent: bool,
}

impl OrderedReport {
    pub fn sent_to_scene(&self) -> bool {
        !self.dispatched.is_empty()
    }
}

/// Dispatch `row` to the scenes of `scene_ids`, falling back to the default sink
pub async fn route(
    sink: &dyn MetricsSink,
    routing: &CategoryRouting,
    scene_ids: &[i64],
    row: Vec<String>,
) -> Result<OrderedReport> {
    let rows = [row];
    let mut report = OrderedReport::default();

    for scene_id in scene_ids {
        let Some(metadata) = routing.scene(*scene_id).and_then(destination) else {
            continue;
        };
        if let Err(e) = sink.send_rows(&metadata, &rows).await {
            tracing::error!("Failed to send row to scene {}: {}", scene_id, e);
            return Err(e.into());
        }
        report.dispatched.push(*scene_id);
    }

    if report.sent_to_scene() {
        return Ok(report);
    }
    let Some(metadata) = routing.default.as_ref().and_then(destination) else {
        return Ok(report);
    };

    if let Err(e) = sink.send_rows(&metadata, &rows).await {
        tracing::error!("Failed to send row to default sink: {}", e);
        return Err(e.into());
    }
    report.default_sent = true;
    Ok(report)
}

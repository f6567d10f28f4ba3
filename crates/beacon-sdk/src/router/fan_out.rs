//! Fan-out routing of experiment exposures
//!
//! Scenes are resolved in ascending scene id, which fixes the order of dispatches and
//! therefore which sink error is returned when several would fail.

use super::destination;
use crate::error::Result;
use crate::exposure::experiment_exposure;
use beacon_core::{CategoryRouting, ControlData, ExperimentList, ExposureGroup, ExposureType};
use beacon_runtime::MetricsSink;
use std::collections::BTreeMap;

/// Exposures of one call grouped by destination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneBuckets {
    /// Per-scene batches keyed by scene id
    pub scenes: BTreeMap<i64, ExposureGroup>,
    /// Exposures of groups without scenes
    pub default: ExposureGroup,
}

impl SceneBuckets {
    /// Build and bucket the exposures of `list`
    ///
    /// Ignored groups are skipped. A group with N scene ids yields N identical
    /// exposures, one per scene bucket.
    pub fn collect(
        project_id: &str,
        list: &ExperimentList,
        exposure_type: ExposureType,
        control: &ControlData,
        upload_time: i64,
    ) -> Self {
        let mut buckets = SceneBuckets::default();

        for group in list.data.values() {
            if control.is_group_ignored(group.id) {
                continue;
            }
            if group.scene_ids.is_empty() {
                buckets.default.push(experiment_exposure(
                    project_id,
                    group,
                    &list.user_ctx,
                    exposure_type,
                    upload_time,
                ));
                continue;
            }
            for scene_id in &group.scene_ids {
                buckets
                    .scenes
                    .entry(*scene_id)
                    .or_default()
                    .push(experiment_exposure(
                        project_id,
                        group,
                        &list.user_ctx,
                        exposure_type,
                        upload_time,
                    ));
            }
        }

        buckets
    }

    pub fn total(&self) -> usize {
        self.default.len() + self.scenes.values().map(ExposureGroup::len).sum::<usize>()
    }
}

/// What happened to each bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOutReport {
    /// Scenes sent to their own sink
    pub dispatched: Vec<i64>,
    /// Scenes without config, merged into the default batch
    pub merged: Vec<i64>,
    /// Scenes whose config is disabled or has no metadata
    pub dropped: Vec<i64>,
    /// Size of the default batch handed to the default sink, if it was sent
    pub default_sent: Option<usize>,
}

/// Dispatch `buckets` according to `routing`
pub async fn route(
    sink: &dyn MetricsSink,
    routing: &CategoryRouting,
    buckets: SceneBuckets,
) -> Result<FanOutReport> {
    let SceneBuckets {
        scenes,
        default: mut default_batch,
    } = buckets;
    let mut report = FanOutReport::default();

    for (scene_id, mut batch) in scenes {
        let Some(config) = routing.scene(scene_id) else {
            default_batch.append(&mut batch);
            report.merged.push(scene_id);
            continue;
        };
        let Some(metadata) = destination(config) else {
            tracing::debug!(
                "Dropping {} exposures of scene {}: sink disabled or incomplete",
                batch.len(),
                scene_id
            );
            report.dropped.push(scene_id);
            continue;
        };

        if let Err(e) = sink.send_exposures(&metadata, &batch).await {
            tracing::error!("Failed to send exposures of scene {}: {}", scene_id, e);
            return Err(e.into());
        }
        report.dispatched.push(scene_id);
    }

    let Some(metadata) = routing.default.as_ref().and_then(destination) else {
        if !default_batch.is_empty() {
            tracing::debug!(
                "Dropping {} default exposures: no usable default sink",
                default_batch.len()
            );
        }
        return Ok(report);
    };
    if default_batch.is_empty() {
        return Ok(report);
    }

    if let Err(e) = sink.send_exposures(&metadata, &default_batch).await {
        tracing::error!("Failed to send default exposures: {}", e);
        return Err(e.into());
    }
    report.default_sent = Some(default_batch.len());
    Ok(report)
}

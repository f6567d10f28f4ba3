//! Monitoring events
//!
//! Operational telemetry about SDK calls, separate from exposure reporting. Events
//! go to the project's event sink, are sampled before they are built, and never
//! fail the call they describe.

use beacon_core::{Application, MetricsConfig, MonitorEvent, MonitorEventGroup, MonitorStatus};
use beacon_runtime::{Environment, MetricsSink, SinkMetadata, SDK_TYPE, SDK_VERSION};
use std::collections::HashMap;
use std::error::Error;
use std::time::Duration;

/// Call-stack frames skipped when recording the invoke path
pub const INVOKE_PATH_SKIP: usize = 4;

/// The SDK call a monitoring event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Init,
    Experiment,
    RemoteConfig,
}

impl EventKind {
    /// Event name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Init => "init",
            EventKind::Experiment => "exp",
            EventKind::RemoteConfig => "rc",
        }
    }
}

/// Status code and message of a call outcome
pub fn event_status(err: Option<&(dyn Error + Send + Sync)>) -> (MonitorStatus, String) {
    match err {
        None => (MonitorStatus::Success, String::new()),
        Some(e) => (MonitorStatus::Failure, e.to_string()),
    }
}

/// Enabled event config of a project and the destination its events go to
///
/// The destination carries interval 1: events are sampled before they are built.
pub(crate) fn event_target(application: &Application) -> Option<(&MetricsConfig, SinkMetadata)> {
    let config = application.control_data.event_metrics_config()?;
    let metadata = config.active_metadata()?;
    Some((config, SinkMetadata::new(config, metadata, 1)))
}

/// Sampling interval of an event
///
/// Only init events use the error interval for failed calls.
pub fn sampling_interval(config: &MetricsConfig, kind: EventKind, failed: bool) -> u32 {
    if kind == EventKind::Init && failed {
        config.err_sampling_interval
    } else {
        config.sampling_interval
    }
}

/// Inputs of one monitoring event
#[derive(Debug, Clone, Copy)]
pub struct EventInput<'a> {
    pub project_id: &'a str,
    pub kind: EventKind,
    pub latency: Duration,
    pub err: Option<&'a (dyn Error + Send + Sync)>,
    pub input_data: &'a str,
    pub output_data: &'a str,
}

pub fn build_event(env: &dyn Environment, input: EventInput<'_>) -> MonitorEvent {
    let (status, message) = event_status(input.err);
    MonitorEvent {
        time: env.now().timestamp(),
        ip: env.local_ip(),
        project_id: input.project_id.to_string(),
        event_name: input.kind.name().to_string(),
        latency: input.latency.as_micros() as f32,
        status_code: status.code(),
        message,
        sdk_type: SDK_TYPE.to_string(),
        sdk_version: SDK_VERSION.to_string(),
        invoke_path: env.invoke_path(INVOKE_PATH_SKIP),
        input_data: input.input_data.to_string(),
        output_data: input.output_data.to_string(),
        ext_info: HashMap::new(),
    }
}

/// Send one event, logging instead of returning failures
pub(crate) async fn emit(sink: &dyn MetricsSink, metadata: &SinkMetadata, event: MonitorEvent) {
    let project_id = event.project_id.clone();
    let event_name = event.event_name.clone();
    let events = MonitorEventGroup::single(event);

    if let Err(e) = sink.send_monitor_events(metadata, &events).await {
        tracing::error!(
            "Failed to send {} monitor event for project {}: {}",
            event_name,
            project_id,
            e
        );
    }
}

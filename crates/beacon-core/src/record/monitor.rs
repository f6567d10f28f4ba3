//! Operational monitoring events

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of the call a monitoring event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum MonitorStatus {
    Success = 0,
    Failure = 1,
}

impl MonitorStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// One monitoring event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorEvent {
    /// Unix seconds
    pub time: i64,
    pub ip: String,
    pub project_id: String,
    /// `init`, `exp` or `rc`
    pub event_name: String,
    /// Microseconds
    pub latency: f32,
    pub status_code: i32,
    pub message: String,
    pub sdk_type: String,
    pub sdk_version: String,
    pub invoke_path: String,
    pub input_data: String,
    pub output_data: String,
    #[serde(default)]
    pub ext_info: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorEventGroup {
    pub events: Vec<MonitorEvent>,
}

impl MonitorEventGroup {
    pub fn single(event: MonitorEvent) -> Self {
        Self {
            events: vec![event],
        }
    }
}

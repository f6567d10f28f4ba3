//! Canonical record shapes handed to sinks
//!
//! Field order of each struct matches the wire order expected by reporting backends.

mod exposure;
mod monitor;

pub use exposure::{Exposure, ExposureGroup, ExposureType};
pub use monitor::{MonitorEvent, MonitorEventGroup, MonitorStatus};

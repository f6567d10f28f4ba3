//! Beacon Core - Core types for the Beacon exposure reporter
//!
//! This crate provides the fundamental types shared by the runtime and the SDK:
//! - Reporting subjects and evaluation results (experiments, remote configs, feature flags)
//! - The per-project routing snapshot (`Application`)
//! - Canonical exposure and monitoring record shapes
//! - Extra-data canonicalization
//! - Error types

pub mod error;
pub mod extra_data;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use record::{
    Exposure, ExposureGroup, ExposureType, MonitorEvent, MonitorEventGroup, MonitorStatus,
};
pub use types::{
    Application, CategoryRouting, ConfigResult, ControlData, ExperimentList, ExperimentResult,
    FeatureFlag, Group, MetricsConfig, MetricsMetadata, RemoteConfig, UserContext,
};

//! Beacon SDK
//!
//! Turns experiment assignments, remote config values and feature flags into
//! exposure records, routes them to the sinks a project configures per scene, and
//! emits sampled monitoring events about SDK calls.

pub mod builder;
pub mod config;
pub mod error;
pub mod exposure;
pub mod logging;
pub mod monitor;
pub mod reporter;
pub mod router;

// Re-export main types
pub use builder::ExposureReporterBuilder;
pub use config::ReporterConfig;
pub use error::{Result, SdkError};
pub use monitor::EventKind;
pub use reporter::ExposureReporter;

// Re-export commonly used types from dependencies
pub use beacon_core::{
    Application, CategoryRouting, ConfigResult, ControlData, ExperimentList, ExperimentResult,
    ExposureType, FeatureFlag, Group, MetricsConfig, MetricsMetadata, UserContext,
};
pub use beacon_runtime::{
    ApplicationCache, Environment, InMemoryApplicationCache, MetricsSink, Sampler,
};

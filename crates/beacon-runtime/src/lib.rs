//! Beacon Runtime - Collaborators of the exposure reporter
//!
//! This crate provides the capabilities the routing engine consumes:
//! - Metrics sinks (`MetricsSink`) and concrete destinations
//! - Sampling decisions (`Sampler`)
//! - Environment facts (`Environment`)
//! - The per-project configuration cache (`ApplicationCache`)

pub mod cache;
pub mod environment;
pub mod error;
pub mod sampling;
pub mod sink;

// Re-export main types
pub use cache::{ApplicationCache, InMemoryApplicationCache};
pub use environment::{Environment, FixedEnvironment, SystemEnvironment, SDK_TYPE, SDK_VERSION};
pub use error::{Result, RuntimeError};
pub use sampling::{FixedSampler, RandomSampler, Sampler};
pub use sink::{MemorySink, MetricsSink, SinkCall, SinkMetadata, SinkRegistry, TracingSink};

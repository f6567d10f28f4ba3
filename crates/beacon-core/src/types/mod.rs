//! Reporting inputs and the routing snapshot
//!
//! This module contains:
//! - `UserContext`: the reporting subject
//! - Experiment assignment results (`Group`, `ExperimentList`, `ExperimentResult`)
//! - Remote config and feature flag results (`ConfigResult`, `FeatureFlag`)
//! - The per-project routing snapshot (`Application`)

pub mod application;
pub mod config;
pub mod experiment;
pub mod user;

pub use application::{Application, CategoryRouting, ControlData, MetricsConfig, MetricsMetadata};
pub use config::{ConfigResult, FeatureFlag, RemoteConfig};
pub use experiment::{ExperimentList, ExperimentResult, Group};
pub use user::UserContext;

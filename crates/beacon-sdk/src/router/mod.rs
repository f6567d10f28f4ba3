//! Scene routing
//!
//! Two routing strategies with different fallback rules:
//!
//! - [`fan_out`]: experiment exposures. Every group is copied into each scene it
//!   names. A scene without any config falls back into the default batch, a scene
//!   whose config is disabled is dropped.
//! - [`ordered`]: remote config and feature flag exposures. One row is offered to
//!   each scene in order, and the default sink is used only when no scene sink
//!   received it.
//!
//! Both stop at the first sink error and return it; batches already sent stay sent.

pub mod fan_out;
pub mod ordered;

use beacon_core::MetricsConfig;
use beacon_runtime::SinkMetadata;

/// Sink destination of an enabled config with metadata
pub(crate) fn destination(config: &MetricsConfig) -> Option<SinkMetadata> {
    config
        .active_metadata()
        .map(|metadata| SinkMetadata::new(config, metadata, config.sampling_interval))
}

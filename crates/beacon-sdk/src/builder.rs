//! Builder pattern for ExposureReporter

use crate::config::ReporterConfig;
use crate::error::{Result, SdkError};
use crate::reporter::ExposureReporter;
use beacon_runtime::{
    ApplicationCache, Environment, MetricsSink, RandomSampler, Sampler, SystemEnvironment,
};
use std::sync::Arc;

/// Builder for ExposureReporter
///
/// # Example
///
/// ```rust,ignore
/// use beacon_sdk::{ExposureReporterBuilder, InMemoryApplicationCache, ReporterConfig};
/// use beacon_runtime::SinkRegistry;
///
/// let reporter = ExposureReporterBuilder::new()
///     .with_cache(Arc::new(InMemoryApplicationCache::new()))
///     .with_sink(Arc::new(SinkRegistry::new().with_sink("kafka", kafka_sink)))
///     .with_config(ReporterConfig::load()?)
///     .build()?;
/// ```
#[derive(Default)]
pub struct ExposureReporterBuilder {
    config: ReporterConfig,
    cache: Option<Arc<dyn ApplicationCache>>,
    sink: Option<Arc<dyn MetricsSink>>,
    sampler: Option<Arc<dyn Sampler>>,
    environment: Option<Arc<dyn Environment>>,
}

impl ExposureReporterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reporter configuration
    pub fn with_config(mut self, config: ReporterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the application cache (required)
    pub fn with_cache(mut self, cache: Arc<dyn ApplicationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the metrics sink (required)
    pub fn with_sink(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the sampler, defaults to [`RandomSampler`]
    pub fn with_sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = Some(sampler);
        self
    }

    /// Set the environment, defaults to [`SystemEnvironment`]
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Build the reporter
    pub fn build(self) -> Result<ExposureReporter> {
        let cache = self
            .cache
            .ok_or(SdkError::MissingComponent("application cache"))?;
        let sink = self.sink.ok_or(SdkError::MissingComponent("metrics sink"))?;
        let sampler = self
            .sampler
            .unwrap_or_else(|| Arc::new(RandomSampler) as Arc<dyn Sampler>);
        let environment = self
            .environment
            .unwrap_or_else(|| Arc::new(SystemEnvironment::new()) as Arc<dyn Environment>);

        tracing::debug!(
            disable_report = self.config.disable_report,
            env_type = %self.config.env_type,
            "ExposureReporter built"
        );

        Ok(ExposureReporter {
            config: self.config,
            cache,
            sink,
            sampler,
            environment,
        })
    }
}

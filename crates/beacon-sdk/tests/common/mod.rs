//! Common test utilities for reporter integration tests

#![allow(dead_code)]

use beacon_core::{Application, ControlData, MetricsConfig, MetricsMetadata, UserContext};
use beacon_runtime::{FixedEnvironment, FixedSampler, InMemoryApplicationCache, MemorySink, Sampler};
use beacon_sdk::{ExposureReporter, ExposureReporterBuilder, ReporterConfig};
use chrono::{DateTime, Local, TimeZone};
use std::sync::{Arc, Mutex};

pub const PROJECT: &str = "project-1";

/// Wall clock every fixture reports
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 1, 12, 30, 45).unwrap()
}

/// Enabled sink config writing to `table`
pub fn sink_config(table: &str) -> MetricsConfig {
    MetricsConfig::new(
        "memory",
        MetricsMetadata {
            name: table.to_string(),
            id: format!("{}-id", table),
            token: "token".to_string(),
        },
    )
}

pub fn user() -> Arc<UserContext> {
    Arc::new(
        UserContext::new("unit-1")
            .with_decision_id("decision-1")
            .with_expanded("country", "de"),
    )
}

/// Sampler that remembers every interval it was asked about
pub struct RecordingSampler {
    pub answer: bool,
    pub intervals: Mutex<Vec<u32>>,
}

impl RecordingSampler {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            intervals: Mutex::new(Vec::new()),
        }
    }

    pub fn intervals(&self) -> Vec<u32> {
        self.intervals.lock().unwrap().clone()
    }
}

impl Sampler for RecordingSampler {
    fn sample(&self, interval: u32) -> bool {
        self.intervals.lock().unwrap().push(interval);
        self.answer
    }
}

/// Reporter wired to in-memory collaborators
pub struct TestReporter {
    pub sink: Arc<MemorySink>,
    pub cache: Arc<InMemoryApplicationCache>,
    pub reporter: ExposureReporter,
}

pub struct TestReporterBuilder {
    applications: Vec<Application>,
    sink: MemorySink,
    sampler: Arc<dyn Sampler>,
    config: ReporterConfig,
}

impl TestReporterBuilder {
    pub fn new() -> Self {
        Self {
            applications: Vec::new(),
            sink: MemorySink::new(),
            sampler: Arc::new(FixedSampler(true)),
            config: ReporterConfig::new().with_env_type("test"),
        }
    }

    /// Cache `control` under [`PROJECT`]
    pub fn with_control(self, control: ControlData) -> Self {
        self.with_application(Application::new(PROJECT).with_control_data(control))
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.applications.push(application);
        self
    }

    pub fn with_sink(mut self, sink: MemorySink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_config(mut self, config: ReporterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> TestReporter {
        let cache = Arc::new(InMemoryApplicationCache::new());
        for application in self.applications {
            cache.insert(application);
        }
        let sink = Arc::new(self.sink);
        let environment = FixedEnvironment::new(fixed_now())
            .with_local_ip("192.168.0.10")
            .with_invoke_path("tests::caller");

        let reporter = ExposureReporterBuilder::new()
            .with_cache(cache.clone())
            .with_sink(sink.clone())
            .with_sampler(self.sampler)
            .with_environment(Arc::new(environment))
            .with_config(self.config)
            .build()
            .expect("reporter should build");

        TestReporter {
            sink,
            cache,
            reporter,
        }
    }
}

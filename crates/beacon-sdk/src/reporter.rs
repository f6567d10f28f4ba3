//! ExposureReporter - entry points for exposure and monitoring reporting
//!
//! Every entry point accepts absent input and treats it as nothing to report.
//! Missing project or sink configuration is not an error either; only sink
//! failures on the exposure paths reach the caller.

use crate::config::ReporterConfig;
use crate::error::Result;
use crate::exposure::{join_ids, remote_config_row};
use crate::monitor::{self, EventInput, EventKind};
use crate::router::{fan_out, ordered};
use beacon_core::{
    CategoryRouting, ConfigResult, ControlData, ExperimentList, ExperimentResult, ExposureType,
    FeatureFlag,
};
use beacon_runtime::{ApplicationCache, Environment, MetricsSink, Sampler};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

/// Record category of a row exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowCategory {
    RemoteConfig,
    FeatureFlag,
}

impl RowCategory {
    fn routing<'a>(&self, control: &'a ControlData) -> &'a CategoryRouting {
        match self {
            RowCategory::RemoteConfig => &control.remote_config,
            RowCategory::FeatureFlag => &control.feature_flag,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RowCategory::RemoteConfig => "remote config",
            RowCategory::FeatureFlag => "feature flag",
        }
    }
}

/// Routes exposures and monitoring events of evaluation results to sinks
pub struct ExposureReporter {
    pub(crate) config: ReporterConfig,
    pub(crate) cache: Arc<dyn ApplicationCache>,
    pub(crate) sink: Arc<dyn MetricsSink>,
    pub(crate) sampler: Arc<dyn Sampler>,
    pub(crate) environment: Arc<dyn Environment>,
}

impl ExposureReporter {
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    // ========== Exposure ==========

    /// Manually log the exposures of a list of experiment assignments
    pub async fn log_experiments_exposure(
        &self,
        project_id: &str,
        list: Option<&ExperimentList>,
    ) -> Result<()> {
        match list {
            Some(list) => {
                self.report_experiments(project_id, list, ExposureType::Manual)
                    .await
            }
            None => Ok(()),
        }
    }

    /// Manually log the exposure of a single layer assignment
    pub async fn log_experiment_exposure(
        &self,
        project_id: &str,
        result: Option<&ExperimentResult>,
    ) -> Result<()> {
        let Some(list) = result.and_then(ExperimentResult::to_list) else {
            return Ok(());
        };
        self.report_experiments(project_id, &list, ExposureType::Manual)
            .await
    }

    /// Manually log the exposure of a feature flag
    pub async fn log_feature_flag_exposure(
        &self,
        project_id: &str,
        flag: Option<&FeatureFlag>,
    ) -> Result<()> {
        match flag {
            Some(flag) => {
                self.report_feature_flag(project_id, flag, ExposureType::Manual)
                    .await
            }
            None => Ok(()),
        }
    }

    /// Manually log the exposure of a remote config value
    pub async fn log_remote_config_exposure(
        &self,
        project_id: &str,
        config: Option<&ConfigResult>,
    ) -> Result<()> {
        match config {
            Some(config) => {
                self.report_remote_config(project_id, config, ExposureType::Manual)
                    .await
            }
            None => Ok(()),
        }
    }

    /// Route experiment exposures with scene fan-out
    pub async fn report_experiments(
        &self,
        project_id: &str,
        list: &ExperimentList,
        exposure_type: ExposureType,
    ) -> Result<()> {
        if self.config.disable_report || list.is_empty() {
            return Ok(());
        }
        let Some(application) = self.cache.get(project_id) else {
            tracing::debug!("No application cached for project {}", project_id);
            return Ok(());
        };
        let control = &application.control_data;
        if control.disable_report || control.experiment.is_unconfigured() {
            return Ok(());
        }

        let upload_time = self.environment.now().timestamp();
        let buckets =
            fan_out::SceneBuckets::collect(project_id, list, exposure_type, control, upload_time);
        let exposures = buckets.total();
        let report = fan_out::route(self.sink.as_ref(), &control.experiment, buckets).await?;

        tracing::debug!(
            project_id,
            exposures,
            dispatched = ?report.dispatched,
            merged = ?report.merged,
            dropped = ?report.dropped,
            default_sent = ?report.default_sent,
            "Experiment exposures routed"
        );
        Ok(())
    }

    /// Route a feature flag exposure with ordered scene fallback
    pub async fn report_feature_flag(
        &self,
        project_id: &str,
        flag: &FeatureFlag,
        exposure_type: ExposureType,
    ) -> Result<()> {
        let Some(config) = &flag.config_result else {
            return Ok(());
        };
        self.report_row(project_id, config, RowCategory::FeatureFlag, exposure_type)
            .await
    }

    /// Route a remote config exposure with ordered scene fallback
    pub async fn report_remote_config(
        &self,
        project_id: &str,
        config: &ConfigResult,
        exposure_type: ExposureType,
    ) -> Result<()> {
        self.report_row(project_id, config, RowCategory::RemoteConfig, exposure_type)
            .await
    }

    async fn report_row(
        &self,
        project_id: &str,
        config: &ConfigResult,
        category: RowCategory,
        exposure_type: ExposureType,
    ) -> Result<()> {
        if self.config.disable_report {
            return Ok(());
        }
        let Some(application) = self.cache.get(project_id) else {
            tracing::debug!("No application cached for project {}", project_id);
            return Ok(());
        };
        let control = &application.control_data;
        let routing = category.routing(control);
        if control.disable_report || routing.is_unconfigured() {
            return Ok(());
        }

        // Feature flags share the remote config row layout
        let row = remote_config_row(
            project_id,
            config,
            exposure_type,
            &self.config.env_type,
            self.environment.now(),
        );
        let report = ordered::route(self.sink.as_ref(), routing, config.scene_ids(), row).await?;

        tracing::debug!(
            project_id,
            key = %config.key,
            dispatched = ?report.dispatched,
            default_sent = report.default_sent,
            "{} exposure routed",
            category.label()
        );
        Ok(())
    }

    // ========== Monitoring ==========

    /// Emit the monitoring event of an experiment call
    pub async fn log_experiment_event(
        &self,
        project_id: &str,
        list: Option<&ExperimentList>,
        latency: Duration,
        input_data: &str,
        err: Option<&(dyn Error + Send + Sync)>,
    ) {
        let output_data = list
            .map(|list| join_ids(&list.group_ids(), ";"))
            .unwrap_or_default();
        self.emit_event(EventInput {
            project_id,
            kind: EventKind::Experiment,
            latency,
            err,
            input_data,
            output_data: &output_data,
        })
        .await;
    }

    /// Emit the monitoring event of a remote config call
    pub async fn log_remote_config_event(
        &self,
        project_id: &str,
        config: Option<&ConfigResult>,
        latency: Duration,
        input_data: &str,
        err: Option<&(dyn Error + Send + Sync)>,
    ) {
        let output_data = config.map(ConfigResult::data_string).unwrap_or_default();
        self.emit_event(EventInput {
            project_id,
            kind: EventKind::RemoteConfig,
            latency,
            err,
            input_data,
            output_data: &output_data,
        })
        .await;
    }

    /// Emit one init event per project
    ///
    /// Projects are handled independently; a failing sink only loses its own event.
    pub async fn log_init_event(
        &self,
        project_ids: &[String],
        latency: Duration,
        err: Option<&(dyn Error + Send + Sync)>,
    ) {
        for project_id in project_ids {
            self.emit_event(EventInput {
                project_id,
                kind: EventKind::Init,
                latency,
                err,
                input_data: "",
                output_data: "",
            })
            .await;
        }
    }

    async fn emit_event(&self, input: EventInput<'_>) {
        let Some(application) = self.cache.get(input.project_id) else {
            return;
        };
        let Some((config, metadata)) = monitor::event_target(&application) else {
            return;
        };

        let interval = monitor::sampling_interval(config, input.kind, input.err.is_some());
        if !self.sampler.sample(interval) {
            return;
        }

        let event = monitor::build_event(self.environment.as_ref(), input);
        monitor::emit(self.sink.as_ref(), &metadata, event).await;
    }
}

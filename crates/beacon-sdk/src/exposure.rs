//! Exposure record builder
//!
//! Pure conversions from evaluation results to the records sinks receive.

use beacon_core::extra_data::{encode_extra_data, extra_data_map};
use beacon_core::{ConfigResult, Exposure, ExposureType, FeatureFlag, Group, UserContext};
use beacon_runtime::{SDK_TYPE, SDK_VERSION};
use chrono::{DateTime, Local};

/// Upload time format of row records
pub const ROW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of fields in a row record
pub const ROW_LEN: usize = 11;

/// Structured exposure of one group
///
/// `upload_time` is unix seconds, shared by every record of one call.
pub fn experiment_exposure(
    project_id: &str,
    group: &Group,
    user: &UserContext,
    exposure_type: ExposureType,
    upload_time: i64,
) -> Exposure {
    Exposure {
        unit_id: user.unit_id.clone(),
        group_id: group.id,
        project_id: project_id.to_string(),
        time: upload_time,
        layer_key: group.layer_key.clone(),
        exp_key: group.experiment_key.clone(),
        unit_type: group.unit_id_type.to_string(),
        cluster_id: user.decision_id.clone(),
        sdk_type: SDK_TYPE.to_string(),
        sdk_version: SDK_VERSION.to_string(),
        exposure_type,
        extra_data: extra_data_map(user),
    }
}

/// Row record of a remote config exposure
///
/// Field positions are part of the sink contract:
/// unit id, project id, config key, SDK version, value, upload time, env type,
/// unit id type, `#`-joined scene ids, exposure type, extra data.
pub fn remote_config_row(
    project_id: &str,
    config: &ConfigResult,
    exposure_type: ExposureType,
    env_type: &str,
    uploaded_at: DateTime<Local>,
) -> Vec<String> {
    vec![
        config.user_ctx.unit_id.clone(),
        project_id.to_string(),
        config.key.clone(),
        SDK_VERSION.to_string(),
        config.data_string(),
        uploaded_at.format(ROW_TIME_FORMAT).to_string(),
        env_type.to_string(),
        config.unit_id_type.to_string(),
        join_ids(config.scene_ids(), "#"),
        exposure_type.to_string(),
        encode_extra_data(&config.user_ctx),
    ]
}

/// Row record of a feature flag exposure, `None` when the flag wraps no config
pub fn feature_flag_row(
    project_id: &str,
    flag: &FeatureFlag,
    exposure_type: ExposureType,
    env_type: &str,
    uploaded_at: DateTime<Local>,
) -> Option<Vec<String>> {
    flag.config_result
        .as_ref()
        .map(|config| remote_config_row(project_id, config, exposure_type, env_type, uploaded_at))
}

/// Decimal ids joined with `sep`
pub fn join_ids(ids: &[i64], sep: &str) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

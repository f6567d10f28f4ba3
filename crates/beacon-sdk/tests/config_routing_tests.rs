//! Remote config and feature flag exposure routing tests

mod common;

use beacon_core::{CategoryRouting, ConfigResult, ControlData, FeatureFlag, UserContext};
use beacon_runtime::{MemorySink, SinkCall, SDK_VERSION};
use beacon_sdk::ReporterConfig;
use common::*;
use std::sync::Arc;

fn remote_config_control(routing: CategoryRouting) -> ControlData {
    ControlData {
        remote_config: routing,
        ..Default::default()
    }
}

fn config_result(scene_ids: Vec<i64>) -> ConfigResult {
    ConfigResult::new(user(), "banner", "{\"color\":\"red\"}")
        .with_unit_id_type(1)
        .with_scene_ids(scene_ids)
}

async fn tables(sink: &MemorySink) -> Vec<String> {
    sink.calls()
        .await
        .iter()
        .map(|call| call.table_name().to_string())
        .collect()
}

#[tokio::test]
async fn test_scene_match_suppresses_default() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5"))
        .with_scene(6, sink_config("scene6"))
        .with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![5, 6])))
        .await
        .unwrap();

    assert_eq!(tables(&test.sink).await, vec!["scene5", "scene6"]);
}

#[tokio::test]
async fn test_scenes_follow_given_order() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5"))
        .with_scene(6, sink_config("scene6"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![6, 5])))
        .await
        .unwrap();

    assert_eq!(tables(&test.sink).await, vec!["scene6", "scene5"]);
}

#[tokio::test]
async fn test_default_used_when_no_scene_matches() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5").with_enabled(false))
        .with_scene(6, sink_config("scene6").without_metadata())
        .with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![5, 6, 7])))
        .await
        .unwrap();

    assert_eq!(tables(&test.sink).await, vec!["default"]);
}

#[tokio::test]
async fn test_no_scenes_go_to_default() {
    let routing = CategoryRouting::default().with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(Vec::new())))
        .await
        .unwrap();

    assert_eq!(tables(&test.sink).await, vec!["default"]);
}

#[tokio::test]
async fn test_unusable_default_sends_nothing() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5"))
        .with_default(sink_config("default").with_enabled(false));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();

    let result = test
        .reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![9])))
        .await;

    assert!(result.is_ok());
    assert_eq!(test.sink.call_count().await, 0);
}

#[tokio::test]
async fn test_row_contents() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5").with_sampling_interval(3));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .build();
    let user = Arc::new(
        UserContext::new("unit-9")
            .with_new_unit_id("alias")
            .with_expanded("k", "v"),
    );
    let config = ConfigResult::new(user, "banner", "blue")
        .with_unit_id_type(4)
        .with_scene_ids(vec![5, 8]);

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config))
        .await
        .unwrap();

    let calls = test.sink.calls().await;
    let SinkCall::Rows { metadata, rows } = &calls[0] else {
        panic!("expected a row batch");
    };
    assert_eq!(metadata.sampling_interval, 3);
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            "unit-9",
            PROJECT,
            "banner",
            SDK_VERSION,
            "blue",
            "2024-06-01 12:30:45",
            "test",
            "4",
            "5#8",
            "EXPOSURE_TYPE_MANUAL",
            "k=v;new_id=alias",
        ]
    );
}

#[tokio::test]
async fn test_scene_error_aborts_remaining_scenes() {
    let routing = CategoryRouting::default()
        .with_scene(5, sink_config("scene5"))
        .with_scene(6, sink_config("scene6"))
        .with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .with_sink(MemorySink::new().with_failing_table("scene5"))
        .build();

    let result = test
        .reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![5, 6])))
        .await;

    assert!(result.is_err());
    assert_eq!(tables(&test.sink).await, vec!["scene5"]);
}

#[tokio::test]
async fn test_default_error_is_returned() {
    let routing = CategoryRouting::default().with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .with_sink(MemorySink::new().with_failing_table("default"))
        .build();

    let err = test
        .reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![1])))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("default"));
}

#[tokio::test]
async fn test_absent_config_and_unconfigured_project() {
    let test = TestReporterBuilder::new()
        .with_control(ControlData::default())
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, None)
        .await
        .unwrap();
    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![1])))
        .await
        .unwrap();
    test.reporter
        .log_remote_config_exposure("missing", Some(&config_result(vec![1])))
        .await
        .unwrap();

    assert_eq!(test.sink.call_count().await, 0);
}

#[tokio::test]
async fn test_disable_report_skips_rows() {
    let routing = CategoryRouting::default().with_default(sink_config("default"));
    let test = TestReporterBuilder::new()
        .with_control(remote_config_control(routing))
        .with_config(ReporterConfig::new().disable_report(true))
        .build();

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config_result(vec![])))
        .await
        .unwrap();

    assert_eq!(test.sink.call_count().await, 0);
}

#[tokio::test]
async fn test_feature_flag_uses_its_own_category() {
    let control = ControlData {
        remote_config: CategoryRouting::default().with_default(sink_config("rc_default")),
        feature_flag: CategoryRouting::default()
            .with_scene(5, sink_config("flag5"))
            .with_default(sink_config("flag_default")),
        ..Default::default()
    };
    let test = TestReporterBuilder::new().with_control(control).build();

    let flag = FeatureFlag::new(config_result(vec![5]));
    test.reporter
        .log_feature_flag_exposure(PROJECT, Some(&flag))
        .await
        .unwrap();

    let other = FeatureFlag::new(config_result(vec![42]));
    test.reporter
        .log_feature_flag_exposure(PROJECT, Some(&other))
        .await
        .unwrap();

    assert_eq!(tables(&test.sink).await, vec!["flag5", "flag_default"]);
}

#[tokio::test]
async fn test_feature_flag_row_matches_remote_config_row() {
    let control = ControlData {
        remote_config: CategoryRouting::default().with_default(sink_config("rc")),
        feature_flag: CategoryRouting::default().with_default(sink_config("flag")),
        ..Default::default()
    };
    let test = TestReporterBuilder::new().with_control(control).build();
    let config = config_result(vec![3]);

    test.reporter
        .log_remote_config_exposure(PROJECT, Some(&config))
        .await
        .unwrap();
    test.reporter
        .log_feature_flag_exposure(PROJECT, Some(&FeatureFlag::new(config)))
        .await
        .unwrap();

    let calls = test.sink.calls().await;
    let rows: Vec<_> = calls
        .iter()
        .map(|call| match call {
            SinkCall::Rows { rows, .. } => rows.clone(),
            other => panic!("unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(rows[0], rows[1]);
}

#[tokio::test]
async fn test_empty_feature_flag_is_a_no_op() {
    let control = ControlData {
        feature_flag: CategoryRouting::default().with_default(sink_config("flag")),
        ..Default::default()
    };
    let test = TestReporterBuilder::new().with_control(control).build();

    test.reporter
        .log_feature_flag_exposure(PROJECT, Some(&FeatureFlag { config_result: None }))
        .await
        .unwrap();
    test.reporter
        .log_feature_flag_exposure(PROJECT, None)
        .await
        .unwrap();

    assert_eq!(test.sink.call_count().await, 0);
}

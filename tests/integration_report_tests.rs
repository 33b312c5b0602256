//! # Reporting Integration Tests / 报告集成测试
//!
//! This module tests the full reporting entry point: the gating on the
//! builder name, the file logging step, and the best-effort dashboard
//! forwarding, using recording and failing uploader doubles.
//!
//! 此模块测试完整的报告入口：对构建器名称的开关、文件记录步骤，
//! 以及使用记录型和失败型上传器替身的尽力而为仪表板转发。

mod common;

use anyhow::{Result, bail};
use result_reporter::config::{BuildEnvironment, ReportOptions};
use result_reporter::models::TestRunResults;
use result_reporter::reporting::dashboard::{JsonlUploader, Uploader, log_to_dashboard};
use result_reporter::reporting::{file_log, log_full};
use std::cell::RefCell;
use tempfile::TempDir;

/// Records every upload it receives.
#[derive(Default)]
struct RecordingUploader {
    calls: RefCell<Vec<(String, String)>>,
}

impl Uploader for RecordingUploader {
    fn upload(
        &self,
        _results: &TestRunResults,
        flakiness_server: &str,
        dashboard_test_type: &str,
    ) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((flakiness_server.to_string(), dashboard_test_type.to_string()));
        Ok(())
    }
}

/// Fails every upload, like an unreachable dashboard.
struct UnreachableUploader;

impl Uploader for UnreachableUploader {
    fn upload(&self, _: &TestRunResults, server: &str, _: &str) -> Result<()> {
        bail!("connection to {server} refused");
    }
}

fn gtest_options(flakiness_server: Option<&str>) -> ReportOptions {
    ReportOptions {
        test_type: "gtest".to_string(),
        test_package: "ipc_tests".to_string(),
        annotations: Vec::new(),
        flakiness_server: flakiness_server.map(str::to_string),
    }
}

#[test]
fn test_without_a_builder_name_only_the_console_reporter_runs() {
    let temp_dir = TempDir::new().unwrap();
    let env = BuildEnvironment::local(temp_dir.path());
    let uploader = RecordingUploader::default();

    log_full(
        &common::failing_results(),
        &gtest_options(Some("dashboard.example.com")),
        &env,
        &uploader,
    )
    .unwrap();

    assert!(!temp_dir.path().join(file_log::LOG_DIR_NAME).exists());
    assert!(uploader.calls.borrow().is_empty());
}

#[test]
fn test_on_a_bot_the_summary_line_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let env = common::bot_environment(temp_dir.path());
    let uploader = RecordingUploader::default();

    log_full(&common::passing_results(), &gtest_options(None), &env, &uploader).unwrap();

    let content =
        std::fs::read_to_string(file_log::log_file_path(&env, "gtest")).unwrap();
    assert!(content.contains("ipc_tests"));
    assert!(uploader.calls.borrow().is_empty());
}

#[test]
fn test_a_configured_server_receives_the_classified_upload() {
    let temp_dir = TempDir::new().unwrap();
    let env = common::bot_environment(temp_dir.path());
    let uploader = RecordingUploader::default();

    log_full(
        &common::passing_results(),
        &gtest_options(Some("dashboard.example.com")),
        &env,
        &uploader,
    )
    .unwrap();

    assert_eq!(
        uploader.calls.borrow().as_slice(),
        [(
            "dashboard.example.com".to_string(),
            "ipc_tests".to_string()
        )]
    );
}

#[test]
fn test_a_single_annotation_names_the_suite_in_the_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let env = common::bot_environment(temp_dir.path());
    let uploader = RecordingUploader::default();
    let mut options = ReportOptions::new("instrumentation", "ContentShellTest");
    options.annotations = vec!["SmallTest".to_string()];

    log_full(&common::passing_results(), &options, &env, &uploader).unwrap();

    let content =
        std::fs::read_to_string(file_log::log_file_path(&env, "instrumentation")).unwrap();
    assert!(content.lines().nth(2).unwrap().starts_with("SmallTest"));
}

#[test]
fn test_an_unreachable_dashboard_never_fails_the_report() {
    let temp_dir = TempDir::new().unwrap();
    let env = common::bot_environment(temp_dir.path());

    let outcome = log_full(
        &common::failing_results(),
        &gtest_options(Some("dashboard.example.com")),
        &env,
        &UnreachableUploader,
    );

    assert!(outcome.is_ok());
    // The file logging step still ran.
    assert!(file_log::log_file_path(&env, "gtest").exists());
}

#[test]
fn test_an_unclassifiable_test_type_skips_the_upload() {
    let uploader = RecordingUploader::default();

    log_to_dashboard(
        &common::passing_results(),
        "junit",
        "SomeSuite",
        "dashboard.example.com",
        &uploader,
    );

    assert!(uploader.calls.borrow().is_empty());
}

#[test]
fn test_jsonl_uploader_spools_one_record_per_upload() {
    let temp_dir = TempDir::new().unwrap();
    let spool_path = temp_dir.path().join("test_logs").join("uploads.jsonl");
    let uploader = JsonlUploader::new(&spool_path);
    let results = common::passing_results();

    uploader
        .upload(&results, "dashboard.example.com", "ipc_tests")
        .unwrap();
    uploader
        .upload(&results, "dashboard.example.com", "base_unittests")
        .unwrap();

    let content = std::fs::read_to_string(&spool_path).unwrap();
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["dashboard_test_type"], "ipc_tests");
    assert_eq!(records[1]["dashboard_test_type"], "base_unittests");
    assert_eq!(records[0]["results"]["results"][0]["result"], "pass");
}

#[test]
fn test_upload_failure_reports_are_best_effort_per_attempt() {
    // A failing first attempt does not poison later attempts.
    let temp_dir = TempDir::new().unwrap();
    let env = common::bot_environment(temp_dir.path());
    let results = common::passing_results();

    log_full(
        &results,
        &gtest_options(Some("dashboard.example.com")),
        &env,
        &UnreachableUploader,
    )
    .unwrap();

    let uploader = RecordingUploader::default();
    log_full(
        &results,
        &gtest_options(Some("dashboard.example.com")),
        &env,
        &uploader,
    )
    .unwrap();
    assert_eq!(uploader.calls.borrow().len(), 1);
}

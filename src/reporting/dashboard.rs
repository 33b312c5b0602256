//! # Dashboard Forwarding Module / 仪表板转发模块
//!
//! This module forwards a run's results to the flakiness dashboard. The
//! forwarder is strictly best-effort: an unreachable or misbehaving dashboard
//! is logged and otherwise ignored, because it must never fail the build.
//! The actual transport lives behind the [`Uploader`] trait.
//!
//! 此模块将一次运行的结果转发到不稳定性仪表板。转发器严格遵循尽力而为：
//! 无法访问或行为异常的仪表板会被记录日志，但在其他方面被忽略，
//! 因为它绝不能使构建失败。实际的传输位于 [`Uploader`] trait 之后。

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::core::classify;
use crate::core::models::TestRunResults;

/// Transport collaborator delivering classified results to a dashboard
/// server. Implementations own their retry and timeout behavior; the
/// forwarder treats any error as fatal to the attempt but not to the caller.
///
/// 将分类后的结果传送到仪表板服务器的传输协作者。
/// 实现拥有自己的重试和超时行为；转发器将任何错误视为对本次尝试致命，
/// 但对调用者无害。
pub trait Uploader {
    fn upload(
        &self,
        results: &TestRunResults,
        flakiness_server: &str,
        dashboard_test_type: &str,
    ) -> Result<()>;
}

/// Classifies a run and hands it to the uploader. Never returns an error:
/// unclassifiable test types are skipped with a warning, and upload failures
/// are logged with full detail and suppressed.
///
/// 对一次运行进行分类并交给上传器。永远不返回错误：
/// 无法分类的测试类型会在警告后跳过，上传失败会被完整记录并被抑制。
pub fn log_to_dashboard(
    results: &TestRunResults,
    test_type: &str,
    test_package: &str,
    flakiness_server: &str,
    uploader: &dyn Uploader,
) {
    info!(
        "Upload results for test type \"{}\", test package \"{}\" to {}",
        test_type, test_package, flakiness_server
    );

    match classify::dashboard_test_type(test_type, test_package, flakiness_server) {
        Some(dashboard_test_type) => {
            if let Err(e) = uploader.upload(results, flakiness_server, &dashboard_test_type) {
                error!("Failure while logging to {}: {:#}", flakiness_server, e);
            }
        }
        None => warn!("Invalid test type"),
    }
}

/// One spooled upload record.
/// 一条假脱机的上传记录。
#[derive(Debug, Serialize)]
struct SpoolRecord<'a> {
    uploaded_at: String,
    flakiness_server: &'a str,
    dashboard_test_type: &'a str,
    results: &'a TestRunResults,
}

/// An [`Uploader`] that appends each upload as one JSON line to a spool file.
/// The spool is the handoff point for the out-of-band transport that actually
/// talks to the dashboard service.
///
/// 一个将每次上传作为一行 JSON 追加到假脱机文件的 [`Uploader`]。
/// 假脱机文件是真正与仪表板服务通信的带外传输的交接点。
#[derive(Debug, Clone)]
pub struct JsonlUploader {
    spool_path: PathBuf,
}

impl JsonlUploader {
    pub fn new(spool_path: impl Into<PathBuf>) -> Self {
        Self {
            spool_path: spool_path.into(),
        }
    }
}

impl Uploader for JsonlUploader {
    fn upload(
        &self,
        results: &TestRunResults,
        flakiness_server: &str,
        dashboard_test_type: &str,
    ) -> Result<()> {
        let record = SpoolRecord {
            uploaded_at: Utc::now().to_rfc3339(),
            flakiness_server,
            dashboard_test_type,
            results,
        };
        let mut line = serde_json::to_string(&record).context("Failed to serialize upload record")?;
        line.push('\n');

        if let Some(dir) = self.spool_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create spool directory: {}", dir.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.spool_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .with_context(|| format!("Failed to append to spool file: {}", self.spool_path.display()))?;

        Ok(())
    }
}

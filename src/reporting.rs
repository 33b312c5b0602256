//! # Reporting Module / 报告模块
//!
//! This module publishes the results of one completed test run through three
//! sequential channels: the console log, the per-suite summary files, and the
//! flakiness dashboard.
//!
//! 此模块通过三个顺序通道发布一次完整测试运行的结果：
//! 控制台日志、按套件划分的摘要文件和不稳定性仪表板。

pub mod console;
pub mod dashboard;
pub mod file_log;

// Re-export common reporting entry points
pub use self::dashboard::{JsonlUploader, Uploader};

use anyhow::Result;

use crate::core::config::{BuildEnvironment, ReportOptions};
use crate::core::models::TestRunResults;

/// Publishes the results of one test run.
///
/// The console report is always printed. When the environment carries a
/// builder name (the step runs on a bot), a summary line is appended to the
/// per-test-type log file, and, if a flakiness server was configured, the
/// results are forwarded to the dashboard. Console and file failures are
/// build-fatal and propagate; dashboard failures never do.
///
/// 发布一次测试运行的结果。
///
/// 控制台报告总是被打印。当环境携带构建器名称（即该步骤在机器人上运行）时，
/// 会向按测试类型划分的日志文件追加一行摘要；如果配置了不稳定性服务器，
/// 结果还会被转发到仪表板。控制台和文件故障对构建是致命的并会传播；
/// 仪表板故障则永远不会。
pub fn log_full(
    results: &TestRunResults,
    options: &ReportOptions,
    env: &BuildEnvironment,
    uploader: &dyn Uploader,
) -> Result<()> {
    console::print_full_results(results);

    if env.on_bot() {
        file_log::log_to_file(results, &options.test_type, options.suite_name(), env)?;

        if let Some(flakiness_server) = &options.flakiness_server {
            dashboard::log_to_dashboard(
                results,
                &options.test_type,
                &options.test_package,
                flakiness_server,
                uploader,
            );
        }
    }

    Ok(())
}

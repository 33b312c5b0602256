//! # File Logging Module / 文件日志模块
//!
//! This module appends one summary line per test suite to a per-test-type
//! log file under the build output directory, so results from multiple test
//! steps can be aggregated later. The file gets a one-time header naming the
//! builder and build number when it is first created; it is never truncated.
//!
//! 此模块将每个测试套件的一行摘要追加到构建输出目录下按测试类型划分的
//! 日志文件中，以便以后聚合多个测试步骤的结果。文件在首次创建时写入一次性的
//! 标题，命名构建器和构建编号；它永远不会被截断。

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::core::config::BuildEnvironment;
use crate::core::models::TestRunResults;

/// Directory under the build output directory holding the per-type log files.
/// 构建输出目录下保存按类型划分的日志文件的目录。
pub const LOG_DIR_NAME: &str = "test_logs";

/// Column width of the suite name field in data lines.
/// 数据行中套件名称字段的列宽。
const SUITE_NAME_COLUMN: usize = 30;

/// Longest suite name written without truncation.
/// 不经截断写入的最长套件名称。
const SUITE_NAME_MAX: usize = 25;

/// Maps a test type to its log file name: every character outside letters,
/// digits, and `_` becomes `_`, then the whole name is lowercased. Distinct
/// test types map to distinct files.
///
/// 将测试类型映射为其日志文件名：字母、数字和 `_` 之外的每个字符都变为 `_`，
/// 然后整个名称转为小写。不同的测试类型映射到不同的文件。
pub fn normalized_log_name(test_type: &str) -> String {
    let sanitized: String = test_type
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("{}.log", sanitized.to_lowercase())
}

/// Shortens a suite display name for the fixed-width name column. Names of
/// up to 25 characters pass through unchanged; longer names keep their first
/// 25 characters and gain a `...` marker.
///
/// 为固定宽度的名称列缩短套件显示名称。不超过 25 个字符的名称原样通过；
/// 更长的名称保留前 25 个字符并加上 `...` 标记。
pub fn shorten_suite_name(suite_name: &str) -> String {
    let mut shortened: String = suite_name.chars().take(SUITE_NAME_MAX).collect();
    if suite_name.chars().count() > SUITE_NAME_MAX {
        shortened.push_str("...");
    }
    shortened
}

/// Computes the log file path for a test type under the given environment.
/// 计算给定环境下某测试类型的日志文件路径。
pub fn log_file_path(env: &BuildEnvironment, test_type: &str) -> PathBuf {
    env.output_dir
        .join(LOG_DIR_NAME)
        .join(normalized_log_name(test_type))
}

/// Appends one summary line for a test suite to the per-type log file,
/// creating the `test_logs` directory and the file header on first use.
/// Filesystem failures are build-fatal and propagate to the caller.
///
/// 将一个测试套件的一行摘要追加到按类型划分的日志文件中，
/// 首次使用时创建 `test_logs` 目录和文件标题。
/// 文件系统故障对构建是致命的，会传播给调用者。
pub fn log_to_file(
    results: &TestRunResults,
    test_type: &str,
    suite_name: &str,
    env: &BuildEnvironment,
) -> Result<()> {
    let log_dir = env.output_dir.join(LOG_DIR_NAME);
    if !log_dir.exists() {
        fs::create_dir(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    let path = log_file_path(env, test_type);
    if !path.exists() {
        let header = format!(
            "\n{} results for {} build {}:\n",
            test_type,
            env.builder_name.as_deref().unwrap_or(""),
            env.build_number.as_deref().unwrap_or("")
        );
        fs::write(&path, header)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    }

    info!("Writing results to {}.", path.display());
    let line = format!(
        "{:<width$}{}\n",
        shorten_suite_name(suite_name),
        results.short_form(),
        width = SUITE_NAME_COLUMN
    );
    OpenOptions::new()
        .append(true)
        .open(&path)
        .and_then(|mut file| file.write_all(line.as_bytes()))
        .with_context(|| format!("Failed to append to log file: {}", path.display()))?;

    Ok(())
}

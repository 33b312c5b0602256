//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the high-visibility result blocks to the console log.
//! A failing run gets a detailed-logs block followed by the summary block; a
//! passing run gets only the summary. Lines are styled through the scoped
//! style override so buildbot log scrapers and humans both pick them out.
//!
//! 此模块将高可见性的结果块打印到控制台日志。
//! 失败的运行会得到一个详细日志块，随后是摘要块；通过的运行只得到摘要。
//! 行通过作用域样式覆盖进行着色，使 buildbot 日志抓取器和人都能识别它们。

use crate::core::models::TestRunResults;
use crate::infra::style::{self, Style, StyleOverride};

/// Width of the `*` delimiter lines framing each block.
/// 框住每个块的 `*` 分隔行的宽度。
const DELIMITER_WIDTH: usize = 80;

/// Builds the delimiter line framing report blocks.
pub fn delimiter() -> String {
    "*".repeat(DELIMITER_WIDTH)
}

/// Emits one critical-severity console line, styled with the scheme currently
/// in effect. Critical lines go to stderr so they survive stdout redirection
/// on the bots.
///
/// 发出一行 critical 级别的控制台行，使用当前生效的方案着色。
/// critical 行输出到 stderr，以便在机器人上的 stdout 重定向后仍然保留。
pub fn critical(line: &str) {
    match style::current() {
        Some(scheme) => eprintln!("{}", scheme.apply(line)),
        None => eprintln!("{}", line),
    }
}

/// Picks the scheme for one summary line. Failure and pass verdict lines get
/// their own schemes; everything else keeps the block default.
/// 为一行摘要选择方案。失败和通过判定行有自己的方案；其余保持块默认方案。
pub fn summary_style(line: &str) -> Style {
    if line.contains("FAILED") {
        Style::FAILURE
    } else if line.contains("PASSED") {
        Style::SUCCESS
    } else {
        Style::BLACK_ON_WHITE
    }
}

/// Builds the detailed-logs block for a failing run: delimiter, header,
/// delimiter, then every raw log line verbatim.
/// 为失败的运行构建详细日志块：分隔行、标题、分隔行，然后逐行原样输出原始日志。
pub fn detail_block(results: &TestRunResults) -> Vec<String> {
    let mut lines = vec![delimiter(), "Detailed Logs".to_string(), delimiter()];
    lines.extend(results.logs().lines().map(str::to_string));
    lines
}

/// Prints the full console report for one run: the detailed-logs block when
/// the run failed, then the summary block with per-line verdict coloring.
///
/// 打印一次运行的完整控制台报告：运行失败时打印详细日志块，
/// 然后打印带有逐行判定着色的摘要块。
pub fn print_full_results(results: &TestRunResults) {
    let _block_scheme = StyleOverride::new(Style::BLACK_ON_WHITE);

    if !results.did_run_pass() {
        for line in detail_block(results) {
            critical(&line);
        }
    }

    critical(&delimiter());
    critical("Summary");
    critical(&delimiter());
    for line in results.gtest_form().lines() {
        let _line_scheme = StyleOverride::new(summary_style(line));
        critical(line);
    }
    critical(&delimiter());
}

//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the result
//! reporter. It includes the per-test outcome record and the aggregated
//! results of one completed test run, together with the textual renderings
//! consumed by the reporting pipeline.
//!
//! 此模块定义了整个结果报告器中使用的核心数据结构。
//! 它包括单个测试的结果记录和一次完整测试运行的聚合结果，
//! 以及报告管线所消费的文本渲染。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column width of one segment in the short-form summary line.
/// 短格式摘要行中单个片段的列宽。
const SHORT_FORM_COLUMN: usize = 15;

/// Enumerates the possible outcomes of a single test.
/// This helps in categorizing results for reporting and aggregation.
/// 枚举单个测试的可能结果。
/// 这有助于对结果进行分类，以便报告和聚合。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// The test ran to completion and passed.
    /// 测试运行完成并通过。
    Pass,
    /// The test was skipped and did not run.
    /// 测试被跳过，未运行。
    Skip,
    /// The test ran to completion and failed.
    /// 测试运行完成但失败。
    Fail,
    /// The test process crashed before producing a verdict.
    /// 测试进程在产生结果之前崩溃。
    Crash,
    /// The test exceeded its time limit.
    /// 测试超出了其时间限制。
    Timeout,
    /// The test produced no recognizable verdict.
    /// 测试未产生可识别的结果。
    Unknown,
}

impl ResultType {
    /// All result types, in the order they appear in summary lines.
    /// 所有结果类型，按它们在摘要行中出现的顺序排列。
    pub const ALL: [ResultType; 6] = [
        ResultType::Pass,
        ResultType::Fail,
        ResultType::Crash,
        ResultType::Timeout,
        ResultType::Skip,
        ResultType::Unknown,
    ];

    /// Gets the upper-case label used in summary lines.
    /// 获取摘要行中使用的大写标签。
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Pass => "PASS",
            ResultType::Skip => "SKIP",
            ResultType::Fail => "FAIL",
            ResultType::Crash => "CRASH",
            ResultType::Timeout => "TIMEOUT",
            ResultType::Unknown => "UNKNOWN",
        }
    }

    /// Returns `true` for every outcome that counts against the run.
    /// Skipped tests do not count against the run.
    /// 对于所有计入运行失败的结果返回 `true`。
    /// 被跳过的测试不计入运行失败。
    pub fn is_failing(&self) -> bool {
        matches!(
            self,
            ResultType::Fail | ResultType::Crash | ResultType::Timeout | ResultType::Unknown
        )
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The recorded outcome of a single test.
/// 单个测试的记录结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Fully qualified test name, e.g. `IPCChannelTest.ChannelTest`.
    /// 完全限定的测试名称，例如 `IPCChannelTest.ChannelTest`。
    pub name: String,
    /// The outcome of the test.
    /// 测试的结果。
    pub result: ResultType,
    /// Captured output for the test. Usually only populated on failure.
    /// 测试的捕获输出。通常仅在失败时填充。
    #[serde(default)]
    pub log: String,
    /// Wall-clock duration of the test in milliseconds.
    /// 测试的实际运行时长（毫秒）。
    #[serde(default)]
    pub duration_ms: u64,
}

impl TestOutcome {
    /// Creates an outcome with no log and zero duration.
    pub fn new(name: impl Into<String>, result: ResultType) -> Self {
        Self {
            name: name.into(),
            result,
            log: String::new(),
            duration_ms: 0,
        }
    }

    /// Creates an outcome carrying captured log output.
    pub fn with_log(name: impl Into<String>, result: ResultType, log: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result,
            log: log.into(),
            duration_ms: 0,
        }
    }
}

/// The aggregated results of one completed test run.
/// This is the object the reporting pipeline consumes: it answers the overall
/// pass/fail question and renders the short-form, gtest-style, and raw-log
/// views of the run.
///
/// 一次完整测试运行的聚合结果。
/// 这是报告管线所消费的对象：它回答整体通过/失败的问题，
/// 并渲染运行的短格式、gtest 风格和原始日志视图。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestRunResults {
    /// The individual test outcomes of this run.
    /// 本次运行的各个测试结果。
    pub results: Vec<TestOutcome>,
}

impl TestRunResults {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result set from a list of outcomes.
    pub fn from_results(results: Vec<TestOutcome>) -> Self {
        Self { results }
    }

    /// Records one more test outcome.
    /// 记录一个新的测试结果。
    pub fn add_result(&mut self, outcome: TestOutcome) {
        self.results.push(outcome);
    }

    /// Iterates over the outcomes of a given type, in recorded order.
    /// 按记录顺序迭代给定类型的结果。
    pub fn of_type(&self, result_type: ResultType) -> impl Iterator<Item = &TestOutcome> {
        self.results.iter().filter(move |o| o.result == result_type)
    }

    fn count_of(&self, result_type: ResultType) -> usize {
        self.of_type(result_type).count()
    }

    /// Whether the run passed overall: no failed, crashed, timed-out, or
    /// unknown outcomes. An empty run passes.
    /// 运行是否整体通过：没有失败、崩溃、超时或未知的结果。
    /// 空运行视为通过。
    pub fn did_run_pass(&self) -> bool {
        !self.results.iter().any(|o| o.result.is_failing())
    }

    /// Renders the compact one-line summary of the run, e.g.
    /// `ALL: 3         PASS: 2        FAIL: 1        ...`.
    /// Each segment is left-justified to a 15-column field so that lines
    /// from successive runs align in aggregated log files.
    ///
    /// 渲染运行的紧凑单行摘要。
    /// 每个片段左对齐到 15 列宽，使连续运行的行在聚合日志文件中对齐。
    pub fn short_form(&self) -> String {
        let mut segments = vec![format!("ALL: {}", self.results.len())];
        for result_type in ResultType::ALL {
            segments.push(format!("{}: {}", result_type.label(), self.count_of(result_type)));
        }
        let joined: String = segments
            .iter()
            .map(|s| format!("{:<width$}", s, width = SHORT_FORM_COLUMN))
            .collect();
        joined.trim_end().to_string()
    }

    /// Renders the multi-line, gtest-style report of the run.
    /// Failing outcomes other than plain failures carry a parenthesized
    /// cause so crashes and timeouts remain distinguishable in the listing.
    ///
    /// 渲染运行的多行 gtest 风格报告。
    /// 普通失败以外的失败结果带有括号注明的原因，
    /// 使崩溃和超时在列表中保持可区分。
    pub fn gtest_form(&self) -> String {
        fn plural(n: usize, singular: &str, plural: &str) -> String {
            format!("{} {}", n, if n == 1 { singular } else { plural })
        }
        fn tests(n: usize) -> String {
            plural(n, "test", "tests")
        }

        let mut lines = Vec::new();
        lines.push(format!("[==========] {} ran.", tests(self.results.len())));
        lines.push(format!("[  PASSED  ] {}.", tests(self.count_of(ResultType::Pass))));

        let skipped: Vec<&TestOutcome> = self.of_type(ResultType::Skip).collect();
        if !skipped.is_empty() {
            lines.push(format!("[  SKIPPED ] {}, listed below:", tests(skipped.len())));
            for outcome in &skipped {
                lines.push(format!("[  SKIPPED ] {}", outcome.name));
            }
        }

        let failures: Vec<&TestOutcome> = self
            .results
            .iter()
            .filter(|o| o.result.is_failing())
            .collect();
        if !failures.is_empty() {
            lines.push(format!("[  FAILED  ] {}, listed below:", tests(failures.len())));
            for outcome in &failures {
                match outcome.result {
                    ResultType::Fail => lines.push(format!("[  FAILED  ] {}", outcome.name)),
                    cause => lines.push(format!("[  FAILED  ] {} ({})", outcome.name, cause.label())),
                }
            }
            lines.push(String::new());
            lines.push(plural(failures.len(), "FAILED TEST", "FAILED TESTS"));
        }

        lines.join("\n")
    }

    /// Gets the raw captured logs of every failing outcome, newline-separated.
    /// Passing and skipped tests contribute nothing.
    /// 获取所有失败结果的原始捕获日志，以换行符分隔。
    /// 通过和跳过的测试不产生任何内容。
    pub fn logs(&self) -> String {
        let logs: Vec<&str> = self
            .results
            .iter()
            .filter(|o| o.result.is_failing() && !o.log.is_empty())
            .map(|o| o.log.as_str())
            .collect();
        logs.join("\n")
    }
}

//! # Dashboard Classification Module / 仪表板分类模块
//!
//! This module derives the dashboard category a test run is grouped under on
//! the flakiness dashboard, from the run's test type, package, and target
//! server. Classification is a pure function; it performs no I/O.
//!
//! 此模块从测试运行的类型、包和目标服务器推导出该运行在不稳定性仪表板上
//! 所归属的类别。分类是一个纯函数，不执行任何 I/O。

/// The canonical upstream flakiness dashboard endpoint. Results sent anywhere
/// else are treated as going to a downstream mirror.
/// 规范的上游不稳定性仪表板端点。发送到其他任何地方的结果都被视为发送到下游镜像。
pub const UPSTREAM_FLAKINESS_SERVER: &str = "test-results.appspot.com";

/// Instrumentation packages known to the upstream dashboard. Reporting any
/// other package upstream would create a stray dashboard category, so it is
/// rejected as an internal consistency violation.
/// 上游仪表板已知的 instrumentation 包。向上游报告任何其他包都会产生一个
/// 游离的仪表板类别，因此会被作为内部一致性违规而拒绝。
pub const UPSTREAM_INSTRUMENTATION_PACKAGES: [&str; 5] = [
    "ContentShellTest",
    "ChromePublicTest",
    "ChromeSyncShellTest",
    "SystemWebViewShellLayoutTest",
    "WebViewInstrumentationTest",
];

/// Category used for instrumentation runs reported to downstream servers,
/// regardless of package.
/// 报告到下游服务器的 instrumentation 运行所使用的类别，与包无关。
const DOWNSTREAM_INSTRUMENTATION_CATEGORY: &str = "Chromium_Android_Instrumentation";

/// Derives the dashboard category for a test run.
///
/// - instrumentation runs (case-insensitive) aimed at the upstream server map
///   to `<package'>_instrumentation_tests`, where `<package'>` is the
///   lowercased package with every trailing `test` occurrence stripped; the
///   package must be one of [`UPSTREAM_INSTRUMENTATION_PACKAGES`].
/// - instrumentation runs aimed at any other server share one fixed category.
/// - `gtest` runs use the package name verbatim.
/// - any other test type is not classifiable; `None` tells the caller to skip
///   the upload.
///
/// 推导测试运行的仪表板类别。无法分类的测试类型返回 `None`，
/// 告知调用者跳过上传。
///
/// # Panics
/// Panics when an instrumentation run aimed at the upstream server names a
/// package outside [`UPSTREAM_INSTRUMENTATION_PACKAGES`]. That is a
/// misconfiguration of the reporting step, not a runtime condition.
///
/// 当针对上游服务器的 instrumentation 运行命名了
/// [`UPSTREAM_INSTRUMENTATION_PACKAGES`] 之外的包时会 panic。
/// 这是报告步骤的配置错误，而不是运行时状况。
pub fn dashboard_test_type(
    test_type: &str,
    test_package: &str,
    flakiness_server: &str,
) -> Option<String> {
    if test_type.eq_ignore_ascii_case("instrumentation") {
        if flakiness_server == UPSTREAM_FLAKINESS_SERVER {
            assert!(
                UPSTREAM_INSTRUMENTATION_PACKAGES.contains(&test_package),
                "unknown instrumentation package {:?} for the upstream dashboard",
                test_package
            );
            Some(format!(
                "{}_instrumentation_tests",
                strip_trailing_test(&test_package.to_lowercase())
            ))
        } else {
            Some(DOWNSTREAM_INSTRUMENTATION_CATEGORY.to_string())
        }
    } else if test_type == "gtest" {
        Some(test_package.to_string())
    } else {
        None
    }
}

/// Removes every trailing occurrence of the literal substring `test`.
/// 移除末尾每一个字面子串 `test`。
fn strip_trailing_test(name: &str) -> &str {
    let mut stripped = name;
    while let Some(rest) = stripped.strip_suffix("test") {
        stripped = rest;
    }
    stripped
}

// Shared test helpers for integration tests
#![allow(dead_code)]

use result_reporter::config::BuildEnvironment;
use result_reporter::models::{ResultType, TestOutcome, TestRunResults};
use std::path::Path;

/// A run where every test passed.
pub fn passing_results() -> TestRunResults {
    TestRunResults::from_results(vec![
        TestOutcome::new("IPCChannelTest.ChannelTest", ResultType::Pass),
        TestOutcome::new("IPCChannelTest.SendMessage", ResultType::Pass),
    ])
}

/// A run with one failure carrying a multi-line log.
pub fn failing_results() -> TestRunResults {
    TestRunResults::from_results(vec![
        TestOutcome::new("IPCChannelTest.ChannelTest", ResultType::Pass),
        TestOutcome::with_log(
            "IPCChannelTest.SendMessage",
            ResultType::Fail,
            "ipc_channel.cc:42: Failure\nExpected: sent == received",
        ),
    ])
}

/// An environment as seen on a buildbot slave.
pub fn bot_environment(output_dir: &Path) -> BuildEnvironment {
    BuildEnvironment {
        output_dir: output_dir.to_path_buf(),
        builder_name: Some("android-builder".to_string()),
        build_number: Some("1024".to_string()),
    }
}

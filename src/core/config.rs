use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Buildbot variable naming the builder a step runs on. Its presence is the
/// gate for file and dashboard logging.
/// Buildbot 变量，命名步骤所运行的构建器。它的存在是文件和仪表板日志记录的开关。
pub const BUILDER_NAME_VAR: &str = "BUILDBOT_BUILDERNAME";

/// Buildbot variable carrying the build number, used only in log file headers.
/// Buildbot 变量，携带构建编号，仅用于日志文件头。
pub const BUILD_NUMBER_VAR: &str = "BUILDBOT_BUILDNUMBER";

/// Describes the identity of one reported test run and where its results
/// should be forwarded. This is the explicit configuration surface of the
/// reporting entry point.
/// 描述一次报告的测试运行的身份以及其结果应转发到的位置。
/// 这是报告入口的显式配置接口。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportOptions {
    /// Free-form test type label, e.g. "gtest" or "instrumentation".
    /// It selects the console formatting and dashboard classification branch,
    /// and names the per-type log file.
    /// 自由格式的测试类型标签，例如 "gtest" 或 "instrumentation"。
    /// 它选择控制台格式化和仪表板分类分支，并命名按类型划分的日志文件。
    pub test_type: String,
    /// Test package name, e.g. "ipc_tests" for gtests or "ContentShellTest"
    /// for instrumentation tests.
    /// 测试包名称，例如 gtest 的 "ipc_tests" 或 instrumentation 测试的
    /// "ContentShellTest"。
    pub test_package: String,
    /// Annotations narrowing the run. When exactly one annotation is present
    /// it is used as the suite display name in log files.
    /// 缩小运行范围的注解。当恰好存在一个注解时，它被用作日志文件中的套件显示名称。
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Flakiness dashboard URL. When set, results are forwarded there after
    /// file logging.
    /// 不稳定性仪表板的 URL。设置后，结果会在文件记录之后转发到那里。
    #[serde(default)]
    pub flakiness_server: Option<String>,
}

impl ReportOptions {
    /// Creates options with no annotations and no dashboard server.
    pub fn new(test_type: impl Into<String>, test_package: impl Into<String>) -> Self {
        Self {
            test_type: test_type.into(),
            test_package: test_package.into(),
            annotations: Vec::new(),
            flakiness_server: None,
        }
    }

    /// Picks the suite display name for log files. Multiple buildbot steps can
    /// report the same package under different annotations, so a single
    /// annotation takes precedence over the package name.
    ///
    /// 为日志文件选择套件显示名称。多个 buildbot 步骤可以在不同的注解下
    /// 报告同一个包，因此单个注解优先于包名称。
    pub fn suite_name(&self) -> &str {
        match self.annotations.as_slice() {
            [single] => single,
            _ => &self.test_package,
        }
    }
}

/// The build environment a report runs in: the build output directory plus
/// the optional builder identity. Passed explicitly so that the gating
/// condition for file and dashboard logging is a testable parameter rather
/// than hidden global state.
///
/// 报告运行所在的构建环境：构建输出目录加上可选的构建器身份。
/// 显式传递，使文件和仪表板日志记录的开关条件成为可测试的参数，
/// 而不是隐藏的全局状态。
#[derive(Debug, Clone)]
pub struct BuildEnvironment {
    /// The build output directory. The `test_logs` directory is created
    /// directly beneath it.
    /// 构建输出目录。`test_logs` 目录直接创建在其下。
    pub output_dir: PathBuf,
    /// Name of the builder this step runs on, when running on a bot.
    /// 此步骤所运行的构建器的名称（在机器人上运行时）。
    pub builder_name: Option<String>,
    /// Build number of this run, when running on a bot.
    /// 本次运行的构建编号（在机器人上运行时）。
    pub build_number: Option<String>,
}

impl BuildEnvironment {
    /// Creates an environment for local use: no builder identity, so only
    /// the console reporter runs.
    /// 创建用于本地使用的环境：没有构建器身份，因此只运行控制台报告器。
    pub fn local(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            builder_name: None,
            build_number: None,
        }
    }

    /// Reads the builder identity from the ambient buildbot variables.
    /// Empty values are treated as absent.
    /// 从环境中的 buildbot 变量读取构建器身份。空值被视为不存在。
    pub fn from_env(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            builder_name: non_empty_var(BUILDER_NAME_VAR),
            build_number: non_empty_var(BUILD_NUMBER_VAR),
        }
    }

    /// Whether this run is on a bot, i.e. the builder name is present.
    /// File and dashboard logging only happen on bots.
    /// 此次运行是否在机器人上，即构建器名称是否存在。
    /// 文件和仪表板日志记录只在机器人上发生。
    pub fn on_bot(&self) -> bool {
        self.builder_name.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the report configuration surface:
//! suite display name selection and the bot gating condition.
//!
//! 此模块包含报告配置接口的单元测试：
//! 套件显示名称的选择和机器人开关条件。

use result_reporter::config::{BuildEnvironment, ReportOptions};

#[cfg(test)]
mod suite_name_tests {
    use super::*;

    #[test]
    fn test_defaults_to_the_test_package() {
        let options = ReportOptions::new("instrumentation", "ContentShellTest");
        assert_eq!(options.suite_name(), "ContentShellTest");
    }

    #[test]
    fn test_a_single_annotation_becomes_the_suite_name() {
        let mut options = ReportOptions::new("instrumentation", "ContentShellTest");
        options.annotations = vec!["SmallTest".to_string()];
        assert_eq!(options.suite_name(), "SmallTest");
    }

    #[test]
    fn test_multiple_annotations_fall_back_to_the_package() {
        let mut options = ReportOptions::new("instrumentation", "ContentShellTest");
        options.annotations = vec!["Feature".to_string(), "SmallTest".to_string()];
        assert_eq!(options.suite_name(), "ContentShellTest");
    }
}

#[cfg(test)]
mod environment_tests {
    use super::*;

    #[test]
    fn test_local_environment_is_not_a_bot() {
        let env = BuildEnvironment::local("out");
        assert!(!env.on_bot());
        assert_eq!(env.builder_name, None);
        assert_eq!(env.build_number, None);
    }

    #[test]
    fn test_builder_name_presence_makes_a_bot() {
        let env = BuildEnvironment {
            output_dir: "out".into(),
            builder_name: Some("android-builder".to_string()),
            build_number: None,
        };
        assert!(env.on_bot());
    }
}

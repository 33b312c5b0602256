//! # Result Reporter Library / Result Reporter 库
//!
//! This library provides the core functionality of the Result Reporter tool,
//! which formats and publishes test-run results for a build pipeline.
//!
//! 此库为 Result Reporter 工具提供核心功能，
//! 该工具为构建管线格式化并发布测试运行结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Results data model, report configuration, and dashboard classification
//! - `infra` - Infrastructure services like the scoped console style state
//! - `reporting` - Console, file, and dashboard publication of results
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 结果数据模型、报告配置和仪表板分类
//! - `infra` - 基础设施服务，如作用域控制台样式状态
//! - `reporting` - 结果的控制台、文件和仪表板发布
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::models;
pub use self::reporting::log_full;

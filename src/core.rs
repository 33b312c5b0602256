//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the result reporter,
//! including the results data model, report configuration, and dashboard
//! classification logic.
//!
//! 此模块包含结果报告器的核心功能，
//! 包括结果数据模型、报告配置和仪表板分类逻辑。

pub mod classify;
pub mod config;
pub mod models;

// Re-exports
pub use self::config::{BuildEnvironment, ReportOptions};
pub use self::models::TestRunResults;

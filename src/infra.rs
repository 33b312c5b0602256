//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the result reporter,
//! currently the scoped console style state used by high-visibility output.
//!
//! 此模块为结果报告器提供基础设施服务，
//! 目前是高可见性输出所使用的作用域控制台样式状态。

pub mod style;

// Re-export the style guard for easier access
pub use self::style::{Style, StyleOverride};

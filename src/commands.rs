//! # Commands Module / 命令模块
//!
//! This module contains the implementations of the CLI commands.
//! 此模块包含 CLI 命令的实现。

pub mod report;

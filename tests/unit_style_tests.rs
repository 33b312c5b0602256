//! # Style Module Unit Tests / Style 模块单元测试
//!
//! This module contains unit tests for the scoped console style override,
//! in particular that the previous scheme is restored on every exit path,
//! including unwinding.
//!
//! 此模块包含作用域控制台样式覆盖的单元测试，
//! 特别是之前的方案在每条退出路径上（包括 unwinding）都会被恢复。

use result_reporter::infra::style::{self, Style, StyleOverride};
use std::panic;

#[test]
fn test_no_override_by_default() {
    assert_eq!(style::current(), None);
}

#[test]
fn test_override_applies_for_guard_lifetime() {
    {
        let _guard = StyleOverride::new(Style::BLACK_ON_WHITE);
        assert_eq!(style::current(), Some(Style::BLACK_ON_WHITE));
    }
    assert_eq!(style::current(), None);
}

#[test]
fn test_nested_override_restores_the_outer_scheme() {
    let _block = StyleOverride::new(Style::BLACK_ON_WHITE);
    {
        let _line = StyleOverride::new(Style::FAILURE);
        assert_eq!(style::current(), Some(Style::FAILURE));
    }
    assert_eq!(style::current(), Some(Style::BLACK_ON_WHITE));
}

#[test]
fn test_override_is_restored_on_unwind() {
    let outcome = panic::catch_unwind(|| {
        let _guard = StyleOverride::new(Style::SUCCESS);
        panic!("log call failed");
    });
    assert!(outcome.is_err());
    assert_eq!(style::current(), None);
}

#[test]
fn test_apply_preserves_the_text() {
    // With coloring forced off the applied line is exactly the input text.
    colored::control::set_override(false);
    let applied = Style::FAILURE.apply("[  FAILED  ] Suite.case");
    assert_eq!(applied.to_string(), "[  FAILED  ] Suite.case");
    colored::control::unset_override();
}

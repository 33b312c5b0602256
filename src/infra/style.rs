//! # Console Style Module / 控制台样式模块
//!
//! This module holds the style state for high-visibility console lines. The
//! active color scheme is a thread-local stack; [`StyleOverride`] is an RAII
//! guard that pushes a scheme on construction and pops it on drop, so the
//! previous scheme is restored on every exit path, including unwinding.
//!
//! 此模块保存高可见性控制台行的样式状态。当前配色方案是一个线程局部栈；
//! [`StyleOverride`] 是一个 RAII guard，在构造时压入一个方案并在 drop 时
//! 弹出，因此在每条退出路径上（包括 unwinding）都会恢复之前的方案。

use colored::{Color, ColoredString, Colorize};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static STYLE_STACK: RefCell<Vec<Style>> = const { RefCell::new(Vec::new()) };
}

/// A console color scheme: foreground, background, and an optional dim
/// attribute.
/// 一个控制台配色方案：前景色、背景色和可选的暗淡属性。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fore: Color,
    pub back: Color,
    pub dim: bool,
}

impl Style {
    /// High-visibility default for report blocks.
    /// 报告块的高可见性默认方案。
    pub const BLACK_ON_WHITE: Style = Style::new(Color::Black, Color::White);

    /// Scheme for lines reporting failures.
    /// 报告失败的行的配色方案。
    pub const FAILURE: Style = Style::new(Color::Red, Color::White).dimmed();

    /// Scheme for lines reporting passes.
    /// 报告通过的行的配色方案。
    pub const SUCCESS: Style = Style::new(Color::Green, Color::White).dimmed();

    pub const fn new(fore: Color, back: Color) -> Self {
        Self {
            fore,
            back,
            dim: false,
        }
    }

    pub const fn dimmed(self) -> Self {
        Self {
            fore: self.fore,
            back: self.back,
            dim: true,
        }
    }

    /// Applies this scheme to a line of text.
    /// 将此方案应用于一行文本。
    pub fn apply(&self, text: &str) -> ColoredString {
        let colored = text.color(self.fore).on_color(self.back);
        if self.dim { colored.dimmed() } else { colored }
    }
}

/// Gets the scheme currently in effect on this thread, if any override is
/// active.
/// 获取当前线程上生效的方案（如果有任何覆盖处于活动状态）。
pub fn current() -> Option<Style> {
    STYLE_STACK.with(|stack| stack.borrow().last().copied())
}

/// Scoped override of the active console scheme. The scheme applies for the
/// guard's lifetime; dropping the guard restores whatever was active before,
/// even when the scope is left by a panic.
///
/// 对当前控制台方案的作用域覆盖。方案在 guard 的生命周期内生效；
/// drop guard 会恢复之前生效的方案，即使作用域因 panic 而退出。
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct StyleOverride {
    // Ties the guard to the thread whose stack it pushed onto.
    // 将 guard 绑定到其压栈所在的线程。
    _not_send: PhantomData<*const ()>,
}

impl StyleOverride {
    pub fn new(style: Style) -> Self {
        STYLE_STACK.with(|stack| stack.borrow_mut().push(style));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for StyleOverride {
    fn drop(&mut self) {
        STYLE_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

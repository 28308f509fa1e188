//! # Test Outcome Module / 测试结果模块
//!
//! This module defines the host-facing model of a finished test: the closed
//! outcome vocabulary and the completion event the hook consumes.
//!
//! 此模块定义面向宿主的已完成测试模型：封闭的结果词汇表
//! 和钩子消费的完成事件。

use serde::{Deserialize, Serialize};

/// The final outcome of a single test method.
///
/// The vocabulary is closed on purpose: the status mapping is a total match
/// over these three variants, so no "unsupported outcome" can reach the
/// reporter at runtime.
///
/// 单个测试方法的最终结果。
/// 词汇表是刻意封闭的：状态映射是对这三个变体的全覆盖匹配，
/// 因此运行时不会有“不支持的结果”到达报告器。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    /// The test passed. / 测试通过。
    Passed,
    /// The test failed. / 测试失败。
    Failed {
        /// Rendered failure cause, typically the panic or assertion message.
        /// 渲染后的失败原因，通常是 panic 或断言消息。
        cause: String,
    },
    /// The test was skipped. / 测试被跳过。
    Skipped {
        /// Rendered cause attached to the skip, if any.
        /// 附加在跳过上的原因（如有）。
        cause: String,
        /// What caused the skip, e.g. a failed upstream test the host
        /// harness depends on.
        /// 导致跳过的原因，例如宿主框架所依赖的上游测试失败。
        caused_by: String,
    },
}

/// One finished test method, as delivered by the host harness.
///
/// A test without a `case_id` is excluded from reporting (logged, not an
/// error). Callers guarantee `end_ms >= start_ms`; the elapsed value is not
/// sanitized downstream.
///
/// 宿主框架交付的一个已完成测试方法。
/// 没有 `case_id` 的测试被排除在报告之外（记录日志，不是错误）。
/// 调用方保证 `end_ms >= start_ms`；经过时间在下游不会被修正。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTest {
    /// Qualified name of the test method, used in logs.
    /// 测试方法的限定名，用于日志。
    pub name: String,
    /// The TestRail case ID attached to the test method, if any.
    /// 附加到测试方法的 TestRail case ID（如有）。
    #[serde(default)]
    pub case_id: Option<u32>,
    /// `true` for setup/teardown methods, which the hook ignores.
    /// 对于 setup/teardown 方法为 `true`，钩子会忽略它们。
    #[serde(default)]
    pub is_fixture: bool,
    /// `true` when the underlying failure is the host's programmatic skip
    /// signal; the hook then forces the outcome to [`TestOutcome::Skipped`].
    /// 当底层失败是宿主的程序化跳过信号时为 `true`；
    /// 此时钩子会将结果强制为 [`TestOutcome::Skipped`]。
    #[serde(default)]
    pub skip_requested: bool,
    /// The outcome the host harness reported.
    /// 宿主框架报告的结果。
    pub outcome: TestOutcome,
    /// Start of the test, wall-clock milliseconds.
    pub start_ms: u64,
    /// End of the test, wall-clock milliseconds.
    pub end_ms: u64,
    /// Stringified parameter values of a data-driven test, in their original
    /// order. Empty if the test took none.
    /// 数据驱动测试的参数值字符串，按原始顺序排列。测试无参数时为空。
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl CompletedTest {
    /// Milliseconds the test took. Callers guarantee `end_ms >= start_ms`.
    pub fn elapsed_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

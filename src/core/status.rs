//! # Status Mapping Module / 状态映射模块
//!
//! Pure mapping from a finished test's outcome, elapsed time and parameter
//! label to the TestRail result payload. Same inputs always yield the same
//! payload.
//!
//! 从已完成测试的结果、经过时间和参数标签到 TestRail 结果负载的纯映射。
//! 相同输入总是产生相同负载。

use crate::core::outcome::TestOutcome;
use serde_json::{Value, json};

/// The TestRail status vocabulary.
///
/// `Blocked` and `Untested` exist for compatibility with the external enum
/// and are never produced by the mapping.
///
/// TestRail 状态词汇表。
/// `Blocked` 和 `Untested` 是为了与外部枚举兼容而存在，映射从不产生它们。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Blocked,
    Untested,
    /// TestRail calls this "Retest"; skipped tests are reported with it.
    /// TestRail 称之为 "Retest"；跳过的测试用它报告。
    Retest,
    Failed,
}

impl Status {
    /// The numeric status ID in the TestRail API.
    /// TestRail API 中的数字状态 ID。
    pub fn value(self) -> u8 {
        match self {
            Status::Passed => 1,
            Status::Blocked => 2,
            Status::Untested => 3,
            Status::Retest => 4,
            Status::Failed => 5,
        }
    }

    /// The label used in posted comments.
    /// 提交评论中使用的标签。
    pub fn label(self) -> &'static str {
        match self {
            Status::Passed => "PASSED",
            Status::Blocked => "BLOCKED",
            Status::Untested => "UNTESTED",
            Status::Retest => "SKIPPED",
            Status::Failed => "FAILED",
        }
    }
}

/// The result payload posted for one test case. Produced fresh per report,
/// immutable, never persisted.
/// 为单个测试用例提交的结果负载。每次报告都新建，不可变，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub status: Status,
    pub comment: String,
    pub elapsed: String,
}

impl ReportPayload {
    /// Renders the key-value body the TestRail API expects.
    /// 渲染 TestRail API 期望的键值体。
    pub fn to_body(&self) -> Value {
        json!({
            "status_id": self.status.value(),
            "comment": self.comment,
            "elapsed": self.elapsed,
        })
    }
}

/// Builds the payload for one finished test. Total over the outcome
/// vocabulary.
///
/// 为一个已完成的测试构建负载。对结果词汇表全覆盖。
pub fn build_payload(outcome: &TestOutcome, elapsed_ms: u64, parameters: &str) -> ReportPayload {
    let elapsed = format_elapsed(elapsed_ms);
    match outcome {
        TestOutcome::Passed => ReportPayload {
            status: Status::Passed,
            comment: format!("{} with parameters: {}", Status::Passed.label(), parameters),
            elapsed,
        },
        TestOutcome::Failed { cause } => ReportPayload {
            status: Status::Failed,
            comment: format!(
                "{} with parameters: {}\n{}",
                Status::Failed.label(),
                parameters,
                cause
            ),
            elapsed,
        },
        TestOutcome::Skipped { cause, caused_by } => ReportPayload {
            status: Status::Retest,
            comment: format!(
                "{} with parameters: {}\n{}\n{}",
                Status::Retest.label(),
                parameters,
                cause,
                caused_by
            ),
            elapsed,
        },
    }
}

/// Formats an elapsed time as `{minutes}m{seconds}s`, omitting the minutes
/// segment entirely when it is 0. The seconds segment is never omitted, so
/// "0s" is a valid output. The value is not sanitized; callers guarantee
/// end >= start.
///
/// 将经过时间格式化为 `{minutes}m{seconds}s`，分钟为 0 时完全省略分钟段。
/// 秒段从不省略，因此 "0s" 是有效输出。该值不会被修正；调用方保证 end >= start。
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let minutes = elapsed_ms / 60_000;
    let seconds = elapsed_ms / 1_000 - minutes * 60;
    if minutes == 0 {
        format!("{seconds}s")
    } else {
        format!("{minutes}m{seconds}s")
    }
}

/// Renders the parameter values of a data-driven test as a bracketed,
/// comma-joined list in their original order. A test without parameters
/// renders the literal token "empty.", a fixed placeholder that is
/// externally visible in posted comments, trailing period included.
///
/// 将数据驱动测试的参数值渲染为按原始顺序、逗号连接的方括号列表。
/// 无参数的测试渲染字面标记 "empty."，即在提交的评论中对外可见的固定占位符，
/// 包括结尾的句点。
pub fn render_parameters(values: &[String]) -> String {
    if values.is_empty() {
        "empty.".to_string()
    } else {
        format!("[{}]", values.join(", "))
    }
}

//! # Hook Module / 钩子模块
//!
//! The host-harness integration point. Receives one completion event per
//! finished test method, filters out fixtures and tests without a TestRail
//! case ID, classifies programmatic skips and delegates to the reporter.
//!
//! 宿主框架的集成点。每个完成的测试方法接收一个完成事件，
//! 过滤掉 fixture 和没有 TestRail case ID 的测试，
//! 对程序化跳过进行归类，然后委托给报告器。

use crate::core::outcome::{CompletedTest, TestOutcome};
use crate::core::status::render_parameters;
use crate::infra::transport::Transport;
use crate::reporting::reporter::Reporter;
use tracing::warn;

/// Post-execution hook a host test harness calls once per finished test.
/// 宿主测试框架在每个测试完成后调用一次的执行后钩子。
pub struct ReportingHook<T: Transport> {
    reporter: Reporter<T>,
}

impl<T: Transport> ReportingHook<T> {
    pub fn new(reporter: Reporter<T>) -> Self {
        Self { reporter }
    }

    /// Handles one completion event.
    ///
    /// Setup/teardown methods are ignored. A test without a case ID is
    /// excluded from reporting with a warning; this is not an error. When the host
    /// signalled a programmatic skip, the outcome is forced to
    /// [`TestOutcome::Skipped`] regardless of its originally reported state.
    ///
    /// 处理一个完成事件。
    /// Setup/teardown 方法被忽略。没有 case ID 的测试以警告方式排除在报告之外，
    /// 这不是错误。当宿主发出程序化跳过信号时，无论最初报告的状态如何，
    /// 结果都会被强制为 [`TestOutcome::Skipped`]。
    pub fn on_test_finished(&self, test: &CompletedTest) {
        if test.is_fixture {
            return;
        }
        let Some(case_id) = test.case_id else {
            warn!(test = %test.name, "no TestRail case ID given; result not reported");
            return;
        };
        let parameters = render_parameters(&test.parameters);
        let outcome = classify(test);
        self.reporter
            .report(case_id, &outcome, test.elapsed_ms(), &parameters);
    }
}

/// Forces the outcome to `Skipped` when the underlying failure is the host's
/// skip signal, keeping the original cause in the skip comment.
/// 当底层失败是宿主的跳过信号时，将结果强制为 `Skipped`，
/// 并在跳过评论中保留原始原因。
fn classify(test: &CompletedTest) -> TestOutcome {
    if !test.skip_requested || matches!(test.outcome, TestOutcome::Skipped { .. }) {
        return test.outcome.clone();
    }
    let cause = match &test.outcome {
        TestOutcome::Failed { cause } => cause.clone(),
        _ => String::new(),
    };
    TestOutcome::Skipped {
        cause,
        caused_by: String::new(),
    }
}

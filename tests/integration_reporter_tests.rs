//! # Reporter Integration Tests / Reporter 集成测试
//!
//! End-to-end tests of the reporting pipeline over mock transports: the
//! disabled-run no-op, the posted path and payload, the log-and-continue
//! failure policy and the host-harness hook filtering.
//!
//! 基于模拟传输层的报告流水线端到端测试：禁用运行时的空操作、
//! 提交的路径和负载、记录日志并继续的失败策略以及宿主框架钩子的过滤。

mod common;

use common::{FailingTransport, RecordingTransport};
use std::sync::Arc;
use testrail_reporter::{CompletedTest, ConfigStore, Reporter, ReportingHook, TestOutcome};

/// A store with the given run ID and no file behind it.
/// 具有给定 run ID 且背后没有文件的存储。
fn store_with_run(run_id: u32) -> Arc<ConfigStore> {
    let store = Arc::new(ConfigStore::new());
    store.set_run_id(run_id);
    store
}

fn completed(case_id: Option<u32>, outcome: TestOutcome) -> CompletedTest {
    CompletedTest {
        name: "com.example.MyTest.firstTest".to_string(),
        case_id,
        is_fixture: false,
        skip_requested: false,
        outcome,
        start_ms: 1_000,
        end_ms: 2_000,
        parameters: vec![],
    }
}

#[cfg(test)]
mod reporter_tests {
    use super::*;

    #[test]
    fn test_unset_run_id_posts_nothing_for_any_outcome() {
        let transport = RecordingTransport::new();
        let reporter = Reporter::new(store_with_run(0), transport.clone());

        reporter.report(100, &TestOutcome::Passed, 1_000, "empty.");
        reporter.report(
            100,
            &TestOutcome::Failed {
                cause: "boom".to_string(),
            },
            1_000,
            "empty.",
        );
        reporter.report(
            100,
            &TestOutcome::Skipped {
                cause: String::new(),
                caused_by: String::new(),
            },
            1_000,
            "empty.",
        );

        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_passed_result_is_posted_to_the_run_case_path() {
        let transport = RecordingTransport::new();
        let reporter = Reporter::new(store_with_run(42), transport.clone());

        reporter.report(100, &TestOutcome::Passed, 65_000, "[1, 2, 3]");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let (path, body) = &calls[0];
        assert_eq!(path, "add_result_for_case/42/100");
        assert_eq!(body["status_id"], 1);
        assert_eq!(body["comment"], "PASSED with parameters: [1, 2, 3]");
        assert_eq!(body["elapsed"], "1m5s");
    }

    #[test]
    fn test_exactly_one_post_per_report() {
        let transport = RecordingTransport::new();
        let reporter = Reporter::new(store_with_run(42), transport.clone());

        reporter.report(100, &TestOutcome::Passed, 1_000, "empty.");
        reporter.report(101, &TestOutcome::Passed, 1_000, "empty.");

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "add_result_for_case/42/100");
        assert_eq!(calls[1].0, "add_result_for_case/42/101");
    }

    #[test]
    fn test_transport_failure_is_swallowed() {
        let reporter = Reporter::new(store_with_run(42), FailingTransport);

        // Must complete without panicking; the error appears only in logs.
        reporter.report(
            100,
            &TestOutcome::Failed {
                cause: "assertion failed".to_string(),
            },
            500,
            "empty.",
        );
    }

    #[test]
    fn test_run_id_change_takes_effect_on_the_next_report() {
        let store = store_with_run(0);
        let transport = RecordingTransport::new();
        let reporter = Reporter::new(Arc::clone(&store), transport.clone());

        reporter.report(100, &TestOutcome::Passed, 1_000, "empty.");
        assert!(transport.calls().is_empty());

        store.set_run_id(7);
        reporter.report(100, &TestOutcome::Passed, 1_000, "empty.");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "add_result_for_case/7/100");
    }

    #[test]
    fn test_panic_in_a_host_thread_does_not_disable_reporting() {
        let store = store_with_run(42);
        let transport = RecordingTransport::new();
        let reporter = Reporter::new(Arc::clone(&store), transport.clone());

        // A host harness thread that used the shared store and then panicked
        // must degrade nothing: later reports still go out.
        // 使用共享存储后 panic 的宿主线程不得造成任何降级：之后的报告照常发出。
        let shared = Arc::clone(&store);
        let worker = std::thread::spawn(move || {
            shared.set_run_id(42);
            panic!("host test panicked");
        });
        assert!(worker.join().is_err());

        reporter.report(100, &TestOutcome::Passed, 1_000, "empty.");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "add_result_for_case/42/100");
    }
}

#[cfg(test)]
mod hook_tests {
    use super::*;

    fn hook_with(transport: RecordingTransport, run_id: u32) -> ReportingHook<RecordingTransport> {
        ReportingHook::new(Reporter::new(store_with_run(run_id), transport))
    }

    #[test]
    fn test_missing_case_id_posts_nothing() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);

        hook.on_test_finished(&completed(None, TestOutcome::Passed));

        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_fixture_events_are_ignored() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);
        let mut event = completed(Some(100), TestOutcome::Passed);
        event.name = "com.example.MyTest.before".to_string();
        event.is_fixture = true;

        hook.on_test_finished(&event);

        assert!(transport.calls().is_empty());
    }

    #[test]
    fn test_finished_test_is_reported_with_rendered_parameters() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);
        let mut event = completed(Some(100), TestOutcome::Passed);
        event.start_ms = 0;
        event.end_ms = 65_000;
        event.parameters = vec!["1".to_string(), "2".to_string(), "3".to_string()];

        hook.on_test_finished(&event);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let (path, body) = &calls[0];
        assert_eq!(path, "add_result_for_case/42/100");
        assert_eq!(body["status_id"], 1);
        assert_eq!(body["comment"], "PASSED with parameters: [1, 2, 3]");
        assert_eq!(body["elapsed"], "1m5s");
    }

    #[test]
    fn test_parameterless_test_reports_the_placeholder() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);

        hook.on_test_finished(&completed(Some(100), TestOutcome::Passed));

        let calls = transport.calls();
        assert_eq!(calls[0].1["comment"], "PASSED with parameters: empty.");
    }

    #[test]
    fn test_skip_signal_forces_the_outcome_to_skipped() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);
        let mut event = completed(
            Some(100),
            TestOutcome::Failed {
                cause: "SkipException: skipped programmatically".to_string(),
            },
        );
        event.skip_requested = true;

        hook.on_test_finished(&event);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        let body = &calls[0].1;
        assert_eq!(body["status_id"], 4);
        assert_eq!(
            body["comment"],
            "SKIPPED with parameters: empty.\nSkipException: skipped programmatically\n"
        );
    }

    #[test]
    fn test_already_skipped_outcome_is_kept_as_is() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 42);
        let mut event = completed(
            Some(100),
            TestOutcome::Skipped {
                cause: "SkipException".to_string(),
                caused_by: "upstream_login_test".to_string(),
            },
        );
        event.skip_requested = true;

        hook.on_test_finished(&event);

        let calls = transport.calls();
        assert_eq!(
            calls[0].1["comment"],
            "SKIPPED with parameters: empty.\nSkipException\nupstream_login_test"
        );
    }

    #[test]
    fn test_hook_respects_the_disabled_run() {
        let transport = RecordingTransport::new();
        let hook = hook_with(transport.clone(), 0);

        hook.on_test_finished(&completed(Some(100), TestOutcome::Passed));

        assert!(transport.calls().is_empty());
    }
}

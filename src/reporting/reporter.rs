//! # Reporter Module / 报告器模块
//!
//! Orchestrates one result post: reads the current configuration, builds the
//! payload via the status mapping and performs a single attempt through the
//! transport. Fire-and-forget: a reporting failure never fails the test run.
//!
//! 编排一次结果提交：读取当前配置，通过状态映射构建负载，
//! 并经由传输层执行单次尝试。即发即忘：报告失败绝不会使测试运行失败。

use crate::core::config::ConfigStore;
use crate::core::outcome::TestOutcome;
use crate::core::status::build_payload;
use crate::error::Result;
use crate::infra::transport::{TestRailClient, Transport};
use std::sync::Arc;
use tracing::{error, info};

/// Posts one result per finished test to TestRail.
/// 为每个完成的测试向 TestRail 提交一个结果。
pub struct Reporter<T: Transport> {
    store: Arc<ConfigStore>,
    transport: T,
}

impl<T: Transport> Reporter<T> {
    /// Creates a reporter over an explicit configuration store and transport.
    /// 基于显式的配置存储和传输层创建报告器。
    pub fn new(store: Arc<ConfigStore>, transport: T) -> Self {
        Self { store, transport }
    }

    /// Reports one finished test case. Never returns an error and never
    /// panics on transport failure: when the run ID is unset the call is a
    /// logged no-op, and any transport error is caught, logged and swallowed.
    ///
    /// 报告一个完成的测试用例。从不返回错误，传输失败时也从不 panic：
    /// run ID 未设置时调用是记录日志的空操作，
    /// 任何传输错误都会被捕获、记录并吞掉。
    pub fn report(&self, case_id: u32, outcome: &TestOutcome, elapsed_ms: u64, parameters: &str) {
        let config = self.store.snapshot();
        if config.run_id == 0 {
            error!(case_id, "run ID not set; result not posted");
            return;
        }
        info!(
            case_id,
            run_id = config.run_id,
            parameters,
            outcome = ?outcome,
            "posting test result",
        );
        let payload = build_payload(outcome, elapsed_ms, parameters);
        let path = format!("add_result_for_case/{}/{}", config.run_id, case_id);
        if let Err(err) = self.transport.send_post(&path, &payload.to_body()) {
            error!(case_id, run_id = config.run_id, %err, "error posting results to TestRail");
        }
    }
}

impl Reporter<TestRailClient> {
    /// Convenience constructor wiring the HTTP transport over the same store.
    /// 便捷构造器，在同一配置存储上接入 HTTP 传输层。
    pub fn over_http(store: Arc<ConfigStore>) -> Result<Self> {
        let transport = TestRailClient::new(Arc::clone(&store))?;
        Ok(Self::new(store, transport))
    }
}

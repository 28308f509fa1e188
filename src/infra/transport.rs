//! # Transport Module / 传输模块
//!
//! The seam between the reporter and the TestRail API. The [`Transport`]
//! trait carries one key-value post; [`TestRailClient`] is the HTTP
//! implementation. The crate stays synchronous on purpose: one hook call per
//! finished test, one bounded post per report, no async scheduling.
//!
//! 报告器与 TestRail API 之间的接缝。[`Transport`] trait 承载一次键值提交；
//! [`TestRailClient`] 是其 HTTP 实现。此 crate 刻意保持同步：
//! 每个完成的测试一次钩子调用，每次报告一次有界提交，没有异步调度。

use crate::core::config::ConfigStore;
use crate::error::{Error, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Carries one post to the external service. HTTP semantics, auth headers
/// and serialization live behind this seam.
/// 承载对外部服务的一次提交。HTTP 语义、认证头和序列化都在此接缝之后。
pub trait Transport {
    /// Posts a key-value body to an API path such as
    /// `add_result_for_case/{run_id}/{case_id}`.
    fn send_post(&self, path: &str, body: &Value) -> Result<()>;
}

/// Default request timeout. The post is a single bounded call; a
/// non-responsive TestRail degrades reporting only, never the test run.
/// 默认请求超时。提交是单次有界调用；TestRail 无响应只会降级报告，
/// 绝不影响测试运行。
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the TestRail API.
///
/// Credentials and endpoint are read from the configuration store at post
/// time, so overrides applied between posts take effect immediately.
///
/// TestRail API 的阻塞式 HTTP 客户端。
/// 凭据和端点在提交时从配置存储读取，因此两次提交之间应用的覆盖会立即生效。
pub struct TestRailClient {
    store: Arc<ConfigStore>,
    http: reqwest::blocking::Client,
}

impl TestRailClient {
    /// Creates a client with the default request timeout.
    pub fn new(store: Arc<ConfigStore>) -> Result<Self> {
        Self::with_timeout(store, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    /// 使用显式请求超时创建客户端。
    pub fn with_timeout(store: Arc<ConfigStore>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::transport)?;
        Ok(Self { store, http })
    }
}

impl Transport for TestRailClient {
    fn send_post(&self, path: &str, body: &Value) -> Result<()> {
        let config = self.store.snapshot();
        let url = format!(
            "{}/index.php?/api/v2/{}",
            config.client.trim_end_matches('/'),
            path
        );
        debug!(%url, "posting to TestRail");
        let response = self
            .http
            .post(&url)
            .basic_auth(&config.user, Some(&config.password))
            .json(body)
            .send()
            .map_err(Error::transport)?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(Error::transport(format!(
                "TestRail returned {status}: {detail}"
            )));
        }
        Ok(())
    }
}

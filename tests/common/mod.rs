// Shared test helpers for integration tests
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::{TempDir, tempdir};
use testrail_reporter::{Error, Result, Transport};

/// Writes a properties file with the given content into a fresh temporary
/// directory. The `TempDir` guard must be kept alive by the caller.
/// 将给定内容的 properties 文件写入新建的临时目录。
/// 调用方必须保持 `TempDir` guard 存活。
pub fn write_properties(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("testrail.properties");
    fs::write(&path, content).expect("Failed to write properties file");
    (temp_dir, path)
}

/// A transport that records every post instead of touching the network.
/// Cloning shares the recorded calls, so a test can keep one handle and give
/// the other to the reporter.
/// 记录每次提交而不接触网络的传输层。
/// 克隆共享记录的调用，测试可以保留一个句柄并把另一个交给报告器。
#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn send_post(&self, path: &str, body: &Value) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        Ok(())
    }
}

/// A transport whose every post fails, for exercising the log-and-continue
/// policy. / 每次提交都失败的传输层，用于验证记录日志并继续的策略。
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn send_post(&self, _path: &str, _body: &Value) -> Result<()> {
        Err(Error::transport("connection refused"))
    }
}

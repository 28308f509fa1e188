//! # Error Module / 错误模块
//!
//! The error taxonomy of the library. Configuration errors are loud and
//! fatal, since the reporting subsystem cannot function without valid
//! credentials; transport errors are recovered by the reporter and appear
//! only in logs.
//!
//! 库的错误分类。配置错误是致命的，因为没有有效凭据报告子系统无法工作；
//! 传输错误由报告器恢复，只出现在日志中。

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
/// 整个 crate 中使用的便捷别名。
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can surface.
/// 库可能出现的所有错误。
#[derive(Debug, Error)]
pub enum Error {
    /// The properties file is missing or unreadable. Raised at init time and
    /// never swallowed, so a run cannot silently continue with empty
    /// credentials.
    /// properties 文件缺失或不可读。在初始化时抛出且从不吞掉，
    /// 因此运行不会携带空凭据静默继续。
    #[error("failed to load properties file {}: {source}", .path.display())]
    ConfigLoad {
        /// The path that was being loaded / 正在加载的路径
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blank or non-file path was supplied when changing the properties
    /// source.
    /// 更改 properties 源时提供了空白或非文件路径。
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A post to TestRail failed. The reporter logs this and continues; a
    /// reporting failure must never fail the test run itself.
    /// 向 TestRail 提交失败。报告器记录日志后继续；
    /// 报告失败绝不能使测试运行本身失败。
    #[error("error posting results to TestRail: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps any error source as a transport failure.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport(source.into())
    }
}

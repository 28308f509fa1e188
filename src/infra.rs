//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the reporter,
//! including the `.properties` configuration source and the HTTP
//! transport to the TestRail API.
//!
//! 此模块为报告器提供基础设施服务，
//! 包括 `.properties` 配置源和到 TestRail API 的 HTTP 传输层。

pub mod properties;
pub mod transport;

// Re-exports
pub use properties::Properties;
pub use transport::{TestRailClient, Transport};

//! # TestRail Reporter Library / TestRail 报告库
//!
//! This library reports automated-test outcomes to TestRail after each test
//! execution. It is invoked by a host test harness as a post-execution hook;
//! it is not itself a test runner.
//!
//! 此库在每次测试执行后将自动化测试结果报告给 TestRail。
//! 它由宿主测试框架作为执行后钩子调用，本身并不是测试运行器。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration resolution, test outcome model and status mapping
//! - `infra` - Infrastructure services: properties source and TestRail transport
//! - `reporting` - The result reporter and the host-harness hook
//! - `error` - The library error taxonomy
//!
//! - `core` - 配置解析、测试结果模型和状态映射
//! - `infra` - 基础设施服务：properties 配置源和 TestRail 传输层
//! - `reporting` - 结果报告器和宿主框架钩子
//! - `error` - 库的错误分类

pub mod core;
pub mod error;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config::{Config, ConfigOverrides, ConfigStore};
pub use crate::core::outcome::{CompletedTest, TestOutcome};
pub use crate::core::status::{ReportPayload, Status};
pub use error::{Error, Result};
pub use infra::transport::{TestRailClient, Transport};
pub use reporting::hook::ReportingHook;
pub use reporting::reporter::Reporter;

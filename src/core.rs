//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the reporter,
//! including configuration resolution, the test outcome model and
//! the TestRail status mapping.
//!
//! 此模块包含报告器的核心功能，
//! 包括配置解析、测试结果模型和 TestRail 状态映射。

pub mod config;
pub mod outcome;
pub mod status;

// Re-exports
pub use config::{Config, ConfigOverrides, ConfigStore};
pub use outcome::{CompletedTest, TestOutcome};
pub use status::{build_payload, format_elapsed, render_parameters};

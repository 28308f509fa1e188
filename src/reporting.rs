//! # Reporting Module / 报告模块
//!
//! This module turns finished tests into TestRail results. The hook is the
//! host-harness integration point; the reporter performs the single
//! best-effort post per result.
//!
//! 此模块将已完成的测试转换为 TestRail 结果。钩子是宿主框架的集成点；
//! 报告器对每个结果执行一次尽力而为的提交。

pub mod hook;
pub mod reporter;

// Re-exports
pub use hook::ReportingHook;
pub use reporter::Reporter;

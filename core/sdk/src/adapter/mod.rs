//! Outbound ポートの標準実装

pub mod claude_process;
pub mod console;
pub mod dry_run_report_sink;
pub mod sigint_checker;
pub mod system_prompt_config;

pub use claude_process::ClaudeProcess;
pub use console::StdConsole;
#[cfg(test)]
pub use console::BufferConsole;
pub use dry_run_report_sink::StdoutDryRunReportSink;
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
#[cfg(test)]
pub use sigint_checker::FlagInterruptChecker;
pub use system_prompt_config::FileSystemPromptConfig;

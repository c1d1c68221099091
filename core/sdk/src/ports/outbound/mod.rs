//! Outbound ポート: アプリが外界（外部プロセス・端末・割り込み・設定ファイル）を使うための trait

pub mod assistant_process;
pub mod console;
pub mod dry_run_report_sink;
pub mod interrupt_checker;
pub mod system_prompt_config;

pub use assistant_process::{AssistantProcess, LaunchRequest};
pub use console::Console;
pub use dry_run_report_sink::DryRunReportSink;
pub use interrupt_checker::InterruptChecker;
pub use system_prompt_config::SystemPromptConfig;

//! ドメイン型
//!
//! 1 回の実行に関わる値（設定・プロンプト・セッション・起動仕様・結果）を型で表す。

pub mod command;
pub mod dry_run_info;
pub mod invocation;
pub mod output_format;
pub mod prompt;
pub mod run_config;
pub mod run_result;
pub mod session;

pub use command::SdkCommand;
pub use dry_run_info::DryRunInfo;
pub use invocation::InvocationSpec;
pub use output_format::OutputFormat;
pub use prompt::ResolvedPrompt;
pub use run_config::{PromptSource, RunConfiguration, RunFlags, ToolSelection};
pub use run_result::{ProcessOutcome, RunOutcome, RunResult, INTERRUPTED_EXIT_CODE};
pub use session::SessionPlan;

//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::env_resolver::DEFAULT_ASSISTANT_PROGRAM;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 外部実行ファイルを上書きする環境変数
pub const ENV_ASSISTANT_BIN: &str = "CLAUDE_SDK_BIN";
/// JSONL ログの出力先を指定する環境変数
pub const ENV_LOG_FILE: &str = "CLAUDE_SDK_LOG";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn current_dir(&self) -> Result<PathBuf, Error> {
        env::current_dir()
            .map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
    }

    fn assistant_program(&self) -> PathBuf {
        non_empty_var(ENV_ASSISTANT_BIN)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSISTANT_PROGRAM))
    }

    fn log_file(&self) -> Option<PathBuf> {
        non_empty_var(ENV_LOG_FILE).map(PathBuf::from)
    }
}

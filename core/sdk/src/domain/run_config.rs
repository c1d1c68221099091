//! 1 回の実行に使う解決済みオプション（CLI 引数から一度だけ組み立て、以後不変）

use crate::domain::OutputFormat;
use common::domain::{ModelName, SessionName};
use std::path::PathBuf;

/// 既定のプロンプトファイル
pub const DEFAULT_PROMPT_FILE: &str = "prompt.txt";

/// プロンプト本文の取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// --prompt で直接渡された文字列
    Literal(String),
    /// --prompt-file（相対パスは起動ディレクトリ基準）
    File(PathBuf),
}

impl Default for PromptSource {
    fn default() -> Self {
        PromptSource::File(PathBuf::from(DEFAULT_PROMPT_FILE))
    }
}

/// 外部 CLI に許可するツール
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToolSelection {
    /// --all-tools: 許可リストを渡さない（制限なしの解釈は外部 CLI 依存）
    All,
    /// 組み込みの既定ツール集合
    #[default]
    Default,
    /// --tools で指定された順序付きリスト
    Listed(Vec<String>),
}

/// 振る舞いフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunFlags {
    pub verbose: bool,
    pub dry_run: bool,
    /// --no-stream: 外部 CLI の stderr を中継しない
    pub no_stream: bool,
    /// --return-output: 成果物を stdout にそのまま出す
    pub return_output: bool,
}

/// 1 回の実行の設定
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfiguration {
    pub prompt: PromptSource,
    pub system_prompt: Option<String>,
    pub output_format: OutputFormat,
    pub model: Option<ModelName>,
    pub tools: ToolSelection,
    /// -o/--output: 成果物のコピー先
    pub output_path: Option<PathBuf>,
    pub session_name: Option<SessionName>,
    pub flags: RunFlags,
}

//! 環境変数解決 Outbound ポート
//!
//! 起動ディレクトリ・外部実行ファイル名・ログ出力先を環境から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 外部 CLI の既定の実行ファイル名
pub const DEFAULT_ASSISTANT_PROGRAM: &str = "claude";

/// 環境変数解決抽象（Outbound ポート）
pub trait EnvResolver: Send + Sync {
    /// 起動時のカレントディレクトリ（相対パスの基準）
    fn current_dir(&self) -> Result<PathBuf, Error>;

    /// 外部 CLI の実行ファイル
    ///
    /// 優先順位:
    /// 1. CLAUDE_SDK_BIN（設定されていれば）
    /// 2. `claude`（PATH から解決）
    fn assistant_program(&self) -> PathBuf;

    /// JSONL ログの出力先（CLAUDE_SDK_LOG。未設定ならログファイルを書かない）
    fn log_file(&self) -> Option<PathBuf>;
}

//! claude-sdk コマンドの enum（Command Pattern）
//!
//! ヘルプ表示 vs セッション実行の分岐を enum で明示する。

use crate::domain::RunConfiguration;

/// claude-sdk の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum SdkCommand {
    /// ヘルプ表示
    Help,
    /// バージョン表示
    Version,
    /// セッションディレクトリを作って外部 CLI を実行する
    Run(RunConfiguration),
}

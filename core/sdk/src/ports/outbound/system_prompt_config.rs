//! システムプロンプト設定ファイルを読む Outbound ポート

use std::path::Path;

/// `<base>/.claude-sdk/system-prompt.txt` の内容を返す
pub trait SystemPromptConfig: Send + Sync {
    /// 前後の空白を除いた内容。ファイルが無い・空・読めない場合は None（エラーにしない）。
    fn load(&self, base_dir: &Path) -> Option<String>;
}

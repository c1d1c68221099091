//! 外部 CLI の起動仕様（プログラムと引数列。プロンプト本文は含めず stdin で渡す）

use std::path::PathBuf;

/// 非対話（print）モード
pub const FLAG_PRINT: &str = "-p";
pub const FLAG_OUTPUT_FORMAT: &str = "--output-format";
/// 構造化ストリーム出力（conversation.json に保存される）
pub const STREAM_JSON: &str = "stream-json";
/// stream-json で途中経過を得るために必須（ユーザーの -v とは無関係に常に付ける）
pub const FLAG_VERBOSE: &str = "--verbose";
pub const FLAG_MODEL: &str = "--model";
pub const FLAG_ALLOWED_TOOLS: &str = "--allowedTools";

/// 成果物ファイルを書くためのツール
pub const WRITE_TOOL: &str = "Write";

/// --tools 未指定時の既定ツール
pub const DEFAULT_TOOLS: [&str; 7] = ["Read", "Write", "Edit", "Glob", "Grep", "LS", "Bash"];

/// 外部プロセスの起動仕様
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl InvocationSpec {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `--allowedTools` の値を順に返す
    pub fn allowed_tools(&self) -> Vec<&str> {
        self.args
            .windows(2)
            .filter(|w| w[0] == FLAG_ALLOWED_TOOLS)
            .map(|w| w[1].as_str())
            .collect()
    }

    /// 表示用のコマンドライン（空白を含む引数はクォートする）
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().map(|a| {
                if a.is_empty() || a.contains(char::is_whitespace) {
                    format!("'{}'", a.replace('\'', "'\\''"))
                } else {
                    a.clone()
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

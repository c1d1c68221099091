//! 出力形式（text / json）と、それに紐づく成果物ファイル名・既定システムプロンプト

use std::fmt;
use std::str::FromStr;

const TEXT_ARTIFACT: &str = "output.txt";
const JSON_ARTIFACT: &str = "output.json";

const TEXT_DEFAULT_SYSTEM_PROMPT: &str = "When you have completed the task, write your final answer \
to a file named output.txt in the current working directory. \
Write only the final answer to that file.";

const JSON_DEFAULT_SYSTEM_PROMPT: &str = "When you have completed the task, write your final answer \
as valid JSON to a file named output.json in the current working directory. \
The file must contain only valid JSON, with no surrounding prose or code fences.";

/// 外部 CLI に書かせる最終成果物の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 2] = ["text", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// セッションディレクトリ内で期待する成果物のファイル名
    pub fn artifact_filename(&self) -> &'static str {
        match self {
            OutputFormat::Text => TEXT_ARTIFACT,
            OutputFormat::Json => JSON_ARTIFACT,
        }
    }

    /// 上書きも設定ファイルも無いときのシステムプロンプト
    pub fn default_system_prompt(&self) -> &'static str {
        match self {
            OutputFormat::Text => TEXT_DEFAULT_SYSTEM_PROMPT,
            OutputFormat::Json => JSON_DEFAULT_SYSTEM_PROMPT,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: {} (expected one of: {})",
                other,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

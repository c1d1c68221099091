//! dry run 時の出力用ペイロード（usecase が組み立て、DryRunReportSink が表示する）

use crate::domain::{InvocationSpec, OutputFormat};
use std::path::PathBuf;

/// dry run でプロセスを起動せずに返す情報
#[derive(Debug, Clone)]
pub struct DryRunInfo {
    /// 計算上のセッションディレクトリ（起動ディレクトリからの相対、作成はしない）
    pub session_dir: PathBuf,
    pub invocation: InvocationSpec,
    pub output_format: OutputFormat,
    pub model: Option<String>,
    /// None は --all-tools（許可リストなし）
    pub tool_allowlist: Option<Vec<String>>,
    pub artifact: String,
    pub output_path: Option<PathBuf>,
    pub system_prompt: String,
    pub prompt: String,
}

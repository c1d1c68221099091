//! 外部アシスタント CLI を実行する Outbound ポート
//!
//! 外部 CLI の振る舞い（ツール許可の解釈、成果物を書くかどうか）はブラックボックスとして扱い、
//! ここでは起動・入出力の接続・終了待ち・割り込み時の終了だけを約束する。

use crate::domain::{InvocationSpec, ProcessOutcome};
use common::error::Error;
use std::path::Path;

/// 1 回の起動に必要なもの
#[derive(Debug, Clone, Copy)]
pub struct LaunchRequest<'a> {
    pub spec: &'a InvocationSpec,
    /// 外部プロセスのカレントディレクトリ（セッションディレクトリ）
    pub working_dir: &'a Path,
    /// stdin に書いて閉じる本文
    pub stdin_text: &'a str,
    /// stdout の保存先（conversation.json）
    pub stdout_path: &'a Path,
    /// stderr を 1 行ずつ診断ストリームへ中継するか（false なら捨てる）
    pub relay_stderr: bool,
}

/// 外部プロセス実行の抽象
pub trait AssistantProcess: Send + Sync {
    /// 起動して終了まで待つ。割り込みを検知したら終了させて `Interrupted` を返す。
    ///
    /// - `Err`: 起動できなかった（実行ファイルが無い等）
    fn run(&self, request: &LaunchRequest<'_>) -> Result<ProcessOutcome, Error>;

    /// 標準入出力を引き継いでそのまま実行し、終了コードを返す（--simple 用）
    fn run_inherited(&self, program: &Path, args: &[String]) -> Result<i32, Error>;
}

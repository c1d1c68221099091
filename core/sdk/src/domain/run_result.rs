//! 実行結果（外部プロセスの終了と、成果物の回収結果）

/// 割り込み（SIGINT）で終了したときの終了コード
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// 外部プロセスがどう終わったか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 自分で終了した（終了コード）
    Exited(i32),
    /// 割り込みを受けて終了させた
    Interrupted,
}

/// 外部プロセス終了後の回収結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunResult {
    pub exit_code: i32,
    /// 成果物の内容（終了コード 0 で見つかった場合のみ）
    pub output: Option<String>,
    /// セッションディレクトリ内の成果物以外のファイル（相対パス、ソート済み）
    pub artifacts: Vec<String>,
}

/// 1 回の実行の終端状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    DryRunReported,
    Completed(RunResult),
    Interrupted,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::DryRunReported => 0,
            RunOutcome::Completed(r) => r.exit_code,
            RunOutcome::Interrupted => INTERRUPTED_EXIT_CODE,
        }
    }
}

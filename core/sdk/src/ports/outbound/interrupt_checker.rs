//! Ctrl+C（SIGINT）等による割り込みを検知する Outbound ポート
//!
//! 外部プロセスの終了待ち中にユーザーが中断した場合、子プロセスを終了させて 130 で抜けるために使用する。

/// 割り込みが要求されたかどうかを返す能力
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}

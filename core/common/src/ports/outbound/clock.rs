//! 時刻取得の Outbound ポート
//!
//! セッションディレクトリ名のタイムスタンプはこの trait 経由で取得する。

use chrono::{DateTime, Local};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻
    fn now_local(&self) -> DateTime<Local>;
}

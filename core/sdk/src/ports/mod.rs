//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（外部プロセス・端末・割り込み・設定ファイル）を使うための trait

pub mod inbound;
pub mod outbound;

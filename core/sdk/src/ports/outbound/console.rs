//! 端末出力の Outbound ポート
//!
//! stdout は成果物の中継とレポート専用、診断メッセージは stderr に出す。

/// stdout / stderr への書き出し
pub trait Console: Send + Sync {
    /// stdout にそのまま書く（改行は足さない）
    fn out(&self, text: &str);
    /// 診断ストリーム（stderr）に 1 行書く
    fn diag(&self, line: &str);
}

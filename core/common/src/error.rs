//! エラーハンドリング
//!
//! 分類ごとに variant を分け、終了コードと usage 表示の要否は Error 自身が答える。

use thiserror::Error as ThisError;

/// claude-sdk 全体で使うエラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// フラグの組み合わせ不正など（usage を表示して終了）
    #[error("{0}")]
    InvalidArgument(String),
    /// プロンプトファイルが無いなど、入力が得られない
    #[error("{0}")]
    MissingInput(String),
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
    /// 外部プロセスを起動できなかった
    #[error("{0}")]
    Launch(String),
    #[error("{0}")]
    Json(String),
    /// 環境変数・カレントディレクトリの解決失敗
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn missing_input(msg: impl Into<String>) -> Self {
        Error::MissingInput(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn launch(msg: impl Into<String>) -> Self {
        Error::Launch(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// usage 行を添えて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// プロセスの終了コード。中断(130)は Error ではなく実行結果として扱う。
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

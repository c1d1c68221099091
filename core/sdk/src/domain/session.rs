//! セッションディレクトリの配置（純粋な計算のみ。作成は usecase が行う）
//!
//! `<base>/.claude-sdk/<YYYYMMDD_HHMMSS>[_<name>]/`
//!   conversation.json   外部 CLI の stdout（stream-json）をそのまま保存
//!   output.txt|json     外部 CLI が書く最終成果物
//!   system-prompt.txt   使用したシステムプロンプト（監査用）
//!   prompt.txt          送信した全文（監査用）

use crate::domain::OutputFormat;
use chrono::{DateTime, Local};
use common::domain::{SessionDir, SessionName};
use std::path::{Path, PathBuf};

/// セッションを格納するルート（起動ディレクトリ直下）
pub const SESSION_ROOT: &str = ".claude-sdk";
/// 外部 CLI の stdout を保存するファイル
pub const CONVERSATION_FILE: &str = "conversation.json";
/// 監査用: 使用したシステムプロンプト。ルート直下の同名ファイルはユーザー設定（別物）。
pub const SYSTEM_PROMPT_FILE: &str = "system-prompt.txt";
/// 監査用: 送信した全文
pub const PROMPT_FILE: &str = "prompt.txt";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// ユーザーが置くシステムプロンプト設定ファイル（`<base>/.claude-sdk/system-prompt.txt`）
pub fn config_system_prompt_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SESSION_ROOT).join(SYSTEM_PROMPT_FILE)
}

/// 1 回の実行のセッション配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    base_dir: PathBuf,
    /// 起動ディレクトリからの相対パス（表示用）
    relative: PathBuf,
    dir: SessionDir,
    artifact: &'static str,
}

impl SessionPlan {
    /// 時刻とセッション名からパスを計算する（副作用なし）
    pub fn compute(
        base_dir: &Path,
        now: DateTime<Local>,
        name: Option<&SessionName>,
        format: OutputFormat,
    ) -> Self {
        let leaf = leaf_name(now, name);
        let relative = Path::new(SESSION_ROOT).join(leaf);
        Self {
            base_dir: base_dir.to_path_buf(),
            dir: SessionDir::new(base_dir.join(&relative)),
            relative,
            artifact: format.artifact_filename(),
        }
    }

    /// 同名ディレクトリが既にあるとき用: 末尾に `-<n>` を付けた配置
    pub fn with_counter(&self, n: u32) -> Self {
        let leaf = self
            .relative
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = self.relative.with_file_name(format!("{}-{}", leaf, n));
        Self {
            base_dir: self.base_dir.clone(),
            dir: SessionDir::new(self.base_dir.join(&relative)),
            relative,
            artifact: self.artifact,
        }
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn dir(&self) -> &SessionDir {
        &self.dir
    }

    /// 期待する成果物ファイル名（output.txt / output.json）
    pub fn artifact_filename(&self) -> &'static str {
        self.artifact
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.dir.file(self.artifact)
    }

    pub fn conversation_path(&self) -> PathBuf {
        self.dir.file(CONVERSATION_FILE)
    }

    pub fn system_prompt_path(&self) -> PathBuf {
        self.dir.file(SYSTEM_PROMPT_FILE)
    }

    pub fn prompt_path(&self) -> PathBuf {
        self.dir.file(PROMPT_FILE)
    }
}

fn leaf_name(now: DateTime<Local>, name: Option<&SessionName>) -> String {
    let ts = now.format(TIMESTAMP_FORMAT).to_string();
    match name.map(|n| n.trim()).filter(|n| !n.is_empty()) {
        Some(n) => format!("{}_{}", ts, n),
        None => ts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, h, m, s).unwrap()
    }

    #[test]
    fn test_compute_without_name() {
        let plan = SessionPlan::compute(Path::new("/work"), at(9, 5, 7), None, OutputFormat::Text);
        assert_eq!(plan.relative(), Path::new(".claude-sdk/20261018_090507"));
        assert_eq!(
            plan.dir().as_path(),
            Path::new("/work/.claude-sdk/20261018_090507")
        );
        assert_eq!(plan.artifact_filename(), "output.txt");
        assert_eq!(
            plan.conversation_path(),
            PathBuf::from("/work/.claude-sdk/20261018_090507/conversation.json")
        );
    }

    #[test]
    fn test_compute_with_name_and_json() {
        let name = SessionName::new("review");
        let plan = SessionPlan::compute(Path::new("/work"), at(23, 59, 59), Some(&name), OutputFormat::Json);
        assert_eq!(plan.relative(), Path::new(".claude-sdk/20261018_235959_review"));
        assert_eq!(
            plan.artifact_path(),
            PathBuf::from("/work/.claude-sdk/20261018_235959_review/output.json")
        );
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let name = SessionName::new("  ");
        let plan = SessionPlan::compute(Path::new("/w"), at(1, 2, 3), Some(&name), OutputFormat::Text);
        assert_eq!(plan.relative(), Path::new(".claude-sdk/20261018_010203"));
    }

    #[test]
    fn test_distinct_seconds_or_names_give_distinct_paths() {
        let base = Path::new("/work");
        let a = SessionPlan::compute(base, at(10, 0, 0), None, OutputFormat::Text);
        let b = SessionPlan::compute(base, at(10, 0, 1), None, OutputFormat::Text);
        assert_ne!(a.dir(), b.dir());

        let n1 = SessionName::new("one");
        let n2 = SessionName::new("two");
        let c = SessionPlan::compute(base, at(10, 0, 0), Some(&n1), OutputFormat::Text);
        let d = SessionPlan::compute(base, at(10, 0, 0), Some(&n2), OutputFormat::Text);
        assert_ne!(c.dir(), d.dir());
    }

    #[test]
    fn test_with_counter_keeps_root() {
        let plan = SessionPlan::compute(Path::new("/work"), at(10, 0, 0), None, OutputFormat::Text);
        let next = plan.with_counter(2);
        assert_eq!(next.relative(), Path::new(".claude-sdk/20261018_100000-2"));
        assert_eq!(
            next.dir().as_path(),
            Path::new("/work/.claude-sdk/20261018_100000-2")
        );
        assert_eq!(next.artifact_filename(), "output.txt");
    }

    #[test]
    fn test_config_path_is_outside_sessions() {
        assert_eq!(
            config_system_prompt_path(Path::new("/work")),
            PathBuf::from("/work/.claude-sdk/system-prompt.txt")
        );
    }
}

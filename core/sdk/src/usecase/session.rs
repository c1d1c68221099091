//! セッションディレクトリのユースケース
//!
//! plan は時刻を読むだけで副作用なし（dry run でも表示に使う）。
//! reserve / materialize は実行時にだけ呼ぶ。reserve がディレクトリを作った時点でそのパスは自分のもの。

use crate::domain::{OutputFormat, ResolvedPrompt, SessionPlan};
use common::domain::SessionName;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

/// 同名ディレクトリが埋まっているときに試す連番の上限
const MAX_COLLISION_COUNTER: u32 = 1000;

pub struct SessionDirectory {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl SessionDirectory {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self { fs, clock, log }
    }

    /// 現在時刻からセッション配置を計算する
    pub fn plan(&self, base_dir: &Path, name: Option<&SessionName>, format: OutputFormat) -> SessionPlan {
        SessionPlan::compute(base_dir, self.clock.now_local(), name, format)
    }

    /// セッションディレクトリを作って確保する
    ///
    /// 同じ秒・同じ名前のディレクトリが既にあれば `-2`, `-3` ... を付けて作り直す。
    /// 非再帰の作成で存在確認を兼ねるので、同時に起動した実行同士でも同じパスは取らない。
    /// 作成に失敗した場合と連番を使い切った場合はエラー（外部プロセスを起動できない）。
    pub fn reserve(&self, plan: SessionPlan) -> Result<SessionPlan, Error> {
        if let Some(root) = plan.dir().parent() {
            self.fs.create_dir_all(root)?;
        }
        if self.fs.create_dir(plan.dir())? {
            self.log_reserved(&plan, None);
            return Ok(plan);
        }
        for n in 2..=MAX_COLLISION_COUNTER {
            let candidate = plan.with_counter(n);
            if self.fs.create_dir(candidate.dir())? {
                self.log_reserved(&candidate, Some(&plan));
                return Ok(candidate);
            }
        }
        Err(Error::io_msg(format!(
            "No free session directory: {} and its -2..-{} variants all exist",
            plan.relative().display(),
            MAX_COLLISION_COUNTER
        )))
    }

    fn log_reserved(&self, plan: &SessionPlan, requested: Option<&SessionPlan>) {
        let mut record = LogRecord::new(LogLevel::Info, "session reserved")
            .layer("usecase")
            .kind("session")
            .field("dir", plan.relative().display().to_string());
        if let Some(requested) = requested {
            record = record.field("requested", requested.relative().display().to_string());
        }
        let _ = self.log.log(&record);
    }

    /// 確保済みのディレクトリに監査用ファイルを書く
    ///
    /// 書き込み失敗はログに残すだけで続行する。
    pub fn materialize(&self, plan: &SessionPlan, prompt: &ResolvedPrompt) {
        let audit = [
            (plan.system_prompt_path(), prompt.system_suffix().trim()),
            (plan.prompt_path(), prompt.full()),
        ];
        for (path, contents) in audit.iter() {
            if let Err(e) = self.fs.write(path, contents) {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, format!("Failed to write audit file: {}", e))
                        .layer("usecase")
                        .kind("session"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::as_suffix;
    use chrono::{Local, TimeZone};
    use common::adapter::{FixedClock, NoopLog, StdFileSystem};

    fn sessions() -> SessionDirectory {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap());
        SessionDirectory::new(Arc::new(StdFileSystem), Arc::new(clock), Arc::new(NoopLog))
    }

    #[test]
    fn test_plan_has_no_side_effects() {
        let tmp = tempfile::tempdir().unwrap();
        let plan = sessions().plan(tmp.path(), None, OutputFormat::Text);
        assert_eq!(plan.relative(), Path::new(".claude-sdk/20261018_123000"));
        assert!(!tmp.path().join(".claude-sdk").exists());
    }

    #[test]
    fn test_materialize_writes_audit_files() {
        let tmp = tempfile::tempdir().unwrap();
        let s = sessions();
        let plan = s
            .reserve(s.plan(tmp.path(), Some(&SessionName::new("audit")), OutputFormat::Text))
            .unwrap();
        let prompt = ResolvedPrompt::new("Say hi", as_suffix("Write output.txt"));
        s.materialize(&plan, &prompt);

        let dir = tmp.path().join(".claude-sdk").join("20261018_123000_audit");
        assert_eq!(
            std::fs::read_to_string(dir.join("system-prompt.txt")).unwrap(),
            "Write output.txt"
        );
        assert_eq!(
            std::fs::read_to_string(dir.join("prompt.txt")).unwrap(),
            "Say hi\n\nWrite output.txt"
        );
    }

    #[test]
    fn test_reserve_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let s = sessions();
        let plan = s.reserve(s.plan(tmp.path(), None, OutputFormat::Text)).unwrap();
        assert_eq!(plan.relative(), Path::new(".claude-sdk/20261018_123000"));
        assert!(plan.dir().is_dir());
    }

    #[test]
    fn test_reserve_twice_before_materialize_gets_counter() {
        let tmp = tempfile::tempdir().unwrap();
        let s = sessions();
        let plan = s.plan(tmp.path(), None, OutputFormat::Text);
        let first = s.reserve(plan.clone()).unwrap();
        let second = s.reserve(plan.clone()).unwrap();
        let third = s.reserve(plan).unwrap();
        assert_eq!(first.relative(), Path::new(".claude-sdk/20261018_123000"));
        assert_eq!(second.relative(), Path::new(".claude-sdk/20261018_123000-2"));
        assert_eq!(third.relative(), Path::new(".claude-sdk/20261018_123000-3"));
    }

    #[test]
    fn test_reserve_fails_when_counters_exhausted() {
        let tmp = tempfile::tempdir().unwrap();
        let s = sessions();
        let plan = s.plan(tmp.path(), None, OutputFormat::Text);
        std::fs::create_dir_all(plan.dir()).unwrap();
        for n in 2..=MAX_COLLISION_COUNTER {
            std::fs::create_dir_all(plan.with_counter(n).dir()).unwrap();
        }
        let err = s.reserve(plan).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("No free session directory"));
    }

    #[test]
    fn test_audit_write_failure_is_swallowed() {
        let tmp = tempfile::tempdir().unwrap();
        let s = sessions();
        let plan = s.plan(tmp.path(), None, OutputFormat::Text);
        // prompt.txt の位置にディレクトリがあると書き込みは失敗する
        std::fs::create_dir_all(plan.prompt_path()).unwrap();
        let prompt = ResolvedPrompt::new("x", as_suffix("y"));
        s.materialize(&plan, &prompt);
        assert_eq!(std::fs::read_to_string(plan.system_prompt_path()).unwrap(), "y");
    }
}

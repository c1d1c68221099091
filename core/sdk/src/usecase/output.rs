//! 外部プロセス終了後の成果物回収
//!
//! 終了コード 0 のときだけ成果物を探して stdout か -o の先へ渡す。
//! --return-output でなければ、終了コードに関係なくセッション内のファイル一覧を出す。

use crate::domain::session::CONVERSATION_FILE;
use crate::domain::{RunConfiguration, RunResult, SessionPlan};
use crate::ports::outbound::Console;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct OutputCollector {
    fs: Arc<dyn FileSystem>,
    console: Arc<dyn Console>,
    log: Arc<dyn Log>,
}

impl OutputCollector {
    pub fn new(fs: Arc<dyn FileSystem>, console: Arc<dyn Console>, log: Arc<dyn Log>) -> Self {
        Self { fs, console, log }
    }

    /// 回収と振り分けを行う。書き込み失敗などは診断に出すだけで結果の終了コードは変えない。
    pub fn collect(
        &self,
        plan: &SessionPlan,
        config: &RunConfiguration,
        base_dir: &Path,
        exit_code: i32,
    ) -> RunResult {
        let output = if exit_code == 0 {
            self.route(plan, config, base_dir)
        } else {
            None
        };

        let artifacts = if config.flags.return_output {
            Vec::new()
        } else {
            let files = self.list_session_files(plan.dir());
            if !files.is_empty() {
                self.console
                    .diag(&format!("Files created: {}", files.join(", ")));
            }
            files
        };

        RunResult {
            exit_code,
            output,
            artifacts,
        }
    }

    fn route(&self, plan: &SessionPlan, config: &RunConfiguration, base_dir: &Path) -> Option<String> {
        let content = self.read_artifact(plan);
        if config.flags.return_output {
            match content {
                Some(ref text) => self.console.out(text),
                None => self.note_missing(plan),
            }
        } else if let Some(ref dest) = config.output_path {
            match content {
                Some(ref text) => self.write_destination(&base_dir.join(dest), text),
                None => self.note_missing(plan),
            }
        }
        content
    }

    fn read_artifact(&self, plan: &SessionPlan) -> Option<String> {
        let path = plan.artifact_path();
        if !self.fs.is_file(&path) {
            return None;
        }
        match self.fs.read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, format!("Failed to read artifact: {}", e))
                        .layer("usecase")
                        .kind("output"),
                );
                None
            }
        }
    }

    fn write_destination(&self, dest: &Path, text: &str) {
        let result = match dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => self.fs.create_dir_all(parent),
            None => Ok(()),
        }
        .and_then(|_| self.fs.write(dest, text));
        match result {
            Ok(()) => self
                .console
                .diag(&format!("Output written to: {}", dest.display())),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, format!("Failed to write output: {}", e))
                        .layer("usecase")
                        .kind("output")
                        .field("path", dest.display().to_string()),
                );
                self.console.diag(&format!(
                    "Warning: failed to write output to {}: {}",
                    dest.display(),
                    e
                ));
            }
        }
    }

    fn note_missing(&self, plan: &SessionPlan) {
        self.console.diag(&format!(
            "Note: {} was not created. A custom --system-prompt may have replaced the instruction to write it.",
            plan.artifact_filename()
        ));
    }

    /// セッション内の全ファイル（conversation.json を除く）を相対パスで返す
    fn list_session_files(&self, dir: &Path) -> Vec<String> {
        let mut found = Vec::new();
        self.walk(dir, &mut found);
        let mut files: Vec<String> = found
            .into_iter()
            .filter_map(|p| p.strip_prefix(dir).ok().map(Path::to_path_buf))
            .filter(|rel| rel.as_os_str() != CONVERSATION_FILE)
            .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            .collect();
        files.sort();
        files
    }

    fn walk(&self, dir: &Path, found: &mut Vec<PathBuf>) {
        let entries = match self.fs.read_dir(dir) {
            Ok(e) => e,
            Err(_) => return,
        };
        for entry in entries {
            match self.fs.metadata(&entry) {
                Ok(m) if m.is_dir() => self.walk(&entry, found),
                Ok(m) if m.is_file() => found.push(entry),
                _ => {}
            }
        }
    }
}

//! 1 回の実行をまとめるユースケース
//!
//! プロンプト解決 → セッション配置 → 起動仕様 →（dry run ならここで報告して終わり）
//! → セッション作成 → 外部プロセス → 成果物回収、の順に進める。
//! プロセスのカレントディレクトリは変えず、外部プロセスにだけセッションディレクトリを渡す。

use crate::domain::{
    DryRunInfo, ProcessOutcome, RunConfiguration, RunOutcome, SessionPlan,
};
use crate::ports::outbound::{AssistantProcess, Console, DryRunReportSink, LaunchRequest};
use crate::usecase::command::{build_invocation, effective_tools};
use crate::usecase::output::OutputCollector;
use crate::usecase::prompt::PromptResolver;
use crate::usecase::session::SessionDirectory;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct RunDeps {
    pub prompt: PromptResolver,
    pub session: SessionDirectory,
    pub output: OutputCollector,
    pub process: ProcessDeps,
    pub io: IoDeps,
}

pub struct ProcessDeps {
    /// 外部 CLI の実行ファイル（既定 `claude`）
    pub program: PathBuf,
    pub runner: Arc<dyn AssistantProcess>,
}

pub struct IoDeps {
    pub console: Arc<dyn Console>,
    pub dry_run_sink: Arc<dyn DryRunReportSink>,
    pub log: Arc<dyn Log>,
}

/// claude-sdk の実行ユースケース
pub struct RunUseCase {
    deps: RunDeps,
}

impl RunUseCase {
    pub fn new(deps: RunDeps) -> Self {
        Self { deps }
    }

    /// `base_dir` は起動ディレクトリ。相対パスはすべてここから解決する。
    pub fn run(&self, base_dir: &Path, config: &RunConfiguration) -> Result<RunOutcome, Error> {
        let prompt = self.deps.prompt.resolve(base_dir, config)?;
        let plan = self.deps.session.plan(
            base_dir,
            config.session_name.as_ref(),
            config.output_format,
        );
        let spec = build_invocation(&self.deps.process.program, config);

        if config.flags.dry_run {
            let info = DryRunInfo {
                session_dir: plan.relative().to_path_buf(),
                invocation: spec,
                output_format: config.output_format,
                model: config.model.as_ref().map(|m| m.to_string()),
                tool_allowlist: effective_tools(config),
                artifact: plan.artifact_filename().to_string(),
                output_path: config.output_path.clone(),
                system_prompt: prompt.system_suffix().trim().to_string(),
                prompt: prompt.full().to_string(),
            };
            self.deps.io.dry_run_sink.report(&info)?;
            return Ok(RunOutcome::DryRunReported);
        }

        let plan = self.deps.session.reserve(plan)?;
        self.deps.session.materialize(&plan, &prompt);

        let console = &self.deps.io.console;
        console.diag(&format!("Session: {}", plan.relative().display()));
        if config.flags.verbose {
            console.diag(&format!("Command: {}", spec.command_line()));
        }

        self.log_event(
            LogRecord::new(LogLevel::Info, "process launching")
                .field("session", plan.relative().display().to_string())
                .field("program", spec.program.display().to_string()),
        );
        let conversation = plan.conversation_path();
        let request = LaunchRequest {
            spec: &spec,
            working_dir: plan.dir(),
            stdin_text: prompt.full(),
            stdout_path: &conversation,
            relay_stderr: !config.flags.no_stream,
        };
        let outcome = self.deps.process.runner.run(&request)?;

        match outcome {
            ProcessOutcome::Interrupted => {
                console.diag("Interrupted.");
                self.log_event(LogRecord::new(LogLevel::Warn, "interrupted"));
                Ok(RunOutcome::Interrupted)
            }
            ProcessOutcome::Exited(code) => {
                self.log_event(
                    LogRecord::new(LogLevel::Info, "process exited").field("exit_code", code),
                );
                if code != 0 {
                    console.diag(&format!("claude exited with status {}", code));
                }
                Ok(self.finish(&plan, config, base_dir, code))
            }
        }
    }

    fn finish(&self, plan: &SessionPlan, config: &RunConfiguration, base_dir: &Path, code: i32) -> RunOutcome {
        RunOutcome::Completed(self.deps.output.collect(plan, config, base_dir, code))
    }

    fn log_event(&self, record: LogRecord) {
        let _ = self
            .deps
            .io
            .log
            .log(&record.layer("usecase").kind("lifecycle"));
    }
}

//! 偽の claude（sh スクリプト）を使った一連の実行シナリオ

use crate::adapter::{BufferConsole, ClaudeProcess, FileSystemPromptConfig, FlagInterruptChecker, StdoutDryRunReportSink};
use crate::domain::{OutputFormat, PromptSource, RunConfiguration, RunFlags, RunOutcome, ToolSelection};
use crate::usecase::app::{IoDeps, ProcessDeps, RunDeps, RunUseCase};
use crate::usecase::output::OutputCollector;
use crate::usecase::prompt::PromptResolver;
use crate::usecase::session::SessionDirectory;
use chrono::{Local, TimeZone};
use common::adapter::{FileSystem, FixedClock, NoopLog, StdFileSystem};
use common::domain::SessionName;
use common::error::Error;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const SESSION: &str = ".claude-sdk/20261018_123000";

struct Harness {
    tmp: tempfile::TempDir,
    console: Arc<BufferConsole>,
    interrupt: Arc<FlagInterruptChecker>,
    use_case: RunUseCase,
}

impl Harness {
    /// `body` を本体とする偽 claude を作って配線する
    fn new(body: &str) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let program = bin.join("claude");
        std::fs::write(&program, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self::with_program(tmp, program)
    }

    fn with_program(tmp: tempfile::TempDir, program: PathBuf) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
        let console = Arc::new(BufferConsole::new());
        let interrupt = Arc::new(FlagInterruptChecker::new());
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap());
        let use_case = RunUseCase::new(RunDeps {
            prompt: PromptResolver::new(
                Arc::clone(&fs),
                Arc::new(FileSystemPromptConfig::new(Arc::clone(&fs))),
            ),
            session: SessionDirectory::new(Arc::clone(&fs), Arc::new(clock), Arc::new(NoopLog)),
            output: OutputCollector::new(Arc::clone(&fs), console.clone(), Arc::new(NoopLog)),
            process: ProcessDeps {
                program,
                runner: Arc::new(ClaudeProcess::new(console.clone(), interrupt.clone())),
            },
            io: IoDeps {
                console: console.clone(),
                dry_run_sink: Arc::new(StdoutDryRunReportSink::new(console.clone())),
                log: Arc::new(NoopLog),
            },
        });
        Self {
            tmp,
            console,
            interrupt,
            use_case,
        }
    }

    fn base(&self) -> &Path {
        self.tmp.path()
    }

    fn session(&self) -> PathBuf {
        self.base().join(SESSION)
    }

    fn write_prompt(&self, text: &str) {
        std::fs::write(self.base().join("prompt.txt"), text).unwrap();
    }

    fn run(&self, config: &RunConfiguration) -> Result<RunOutcome, Error> {
        self.use_case.run(self.base(), config)
    }
}

fn flags(f: impl FnOnce(&mut RunFlags)) -> RunConfiguration {
    let mut config = RunConfiguration::default();
    f(&mut config.flags);
    config
}

#[test]
fn test_end_to_end_return_output() {
    let h = Harness::new(
        "cat > stdin.txt\nprintf '%s\\n' \"$@\" > args.txt\nprintf hi > output.txt\necho '{\"type\":\"result\"}'\necho working >&2",
    );
    h.write_prompt("Say hi");
    let cwd_before = std::env::current_dir().unwrap();

    let outcome = h.run(&flags(|f| f.return_output = true)).unwrap();

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(h.console.stdout(), "hi");
    let diag = h.console.diag_lines();
    assert_eq!(diag[0], format!("Session: {}", SESSION));
    assert!(diag.contains(&"working".to_string()));
    assert!(!h.console.stderr().contains("Files created"));
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);

    let session = h.session();
    let full = std::fs::read_to_string(session.join("prompt.txt")).unwrap();
    assert!(full.starts_with("Say hi\n\n"));
    assert_eq!(std::fs::read_to_string(session.join("stdin.txt")).unwrap(), full);
    assert_eq!(
        std::fs::read_to_string(session.join("system-prompt.txt")).unwrap(),
        OutputFormat::Text.default_system_prompt()
    );
    assert_eq!(
        std::fs::read_to_string(session.join("conversation.json")).unwrap(),
        "{\"type\":\"result\"}\n"
    );
    let args = std::fs::read_to_string(session.join("args.txt")).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(&args[..4], &["-p", "--output-format", "stream-json", "--verbose"]);
    assert_eq!(args.iter().filter(|a| **a == "Write").count(), 1);
}

#[test]
fn test_verbose_prints_command_line() {
    let h = Harness::new("cat > /dev/null\nprintf ok > output.txt");
    h.write_prompt("Say hi");
    h.run(&flags(|f| f.verbose = true)).unwrap();
    let diag = h.console.diag_lines();
    assert!(diag[1].starts_with("Command: "));
    assert!(diag[1].contains("--output-format stream-json"));
    assert!(h
        .console
        .stderr()
        .contains("Files created: output.txt, prompt.txt, system-prompt.txt"));
}

#[test]
fn test_missing_prompt_file_creates_nothing() {
    let h = Harness::new("exit 0");
    let err = h.run(&RunConfiguration::default()).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert_eq!(err.exit_code(), 1);
    assert!(!h.base().join(".claude-sdk").exists());
}

#[test]
fn test_dry_run_has_no_side_effects() {
    let tmp = tempfile::tempdir().unwrap();
    let marker = tmp.path().join("launched");
    let h = Harness::new(&format!("touch '{}'", marker.display()));
    let config = RunConfiguration {
        prompt: PromptSource::Literal("Plan a trip".to_string()),
        tools: ToolSelection::All,
        flags: RunFlags {
            dry_run: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let outcome = h.run(&config).unwrap();

    assert_eq!(outcome, RunOutcome::DryRunReported);
    assert_eq!(outcome.exit_code(), 0);
    assert!(!marker.exists());
    assert!(!h.base().join(".claude-sdk").exists());
    let report = h.console.stdout();
    assert!(report.contains(&format!("session_dir: {}", SESSION)));
    assert!(report.contains("tool_allowlist: (all)"));
    assert!(report.contains("  Plan a trip"));
    assert!(h.console.diag_lines().is_empty());
}

#[test]
fn test_launch_failure_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let program = tmp.path().join("no-such-claude");
    let h = Harness::with_program(tmp, program);
    h.write_prompt("Say hi");
    let cwd_before = std::env::current_dir().unwrap();

    let err = h.run(&RunConfiguration::default()).unwrap_err();

    assert!(matches!(err, Error::Launch(_)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
}

#[test]
fn test_nonzero_exit_is_mirrored_and_still_listed() {
    let h = Harness::new("cat > /dev/null\nprintf partial > output.txt\nexit 3");
    h.write_prompt("Say hi");
    let config = RunConfiguration {
        output_path: Some(PathBuf::from("result.txt")),
        ..Default::default()
    };

    let outcome = h.run(&config).unwrap();

    assert_eq!(outcome.exit_code(), 3);
    assert!(!h.base().join("result.txt").exists());
    let stderr = h.console.stderr();
    assert!(stderr.contains("claude exited with status 3"));
    assert!(stderr.contains("Files created: output.txt, prompt.txt, system-prompt.txt"));
}

#[test]
fn test_output_path_copy() {
    let h = Harness::new("cat > /dev/null\nprintf '{\"ok\":true}' > output.json");
    h.write_prompt("Give JSON");
    let config = RunConfiguration {
        output_format: OutputFormat::Json,
        output_path: Some(PathBuf::from("out/result.json")),
        ..Default::default()
    };

    let outcome = h.run(&config).unwrap();

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        std::fs::read_to_string(h.base().join("out/result.json")).unwrap(),
        "{\"ok\":true}"
    );
    assert!(h.console.stderr().contains("Output written to: "));
    assert_eq!(h.console.stdout(), "");
}

#[test]
fn test_custom_system_prompt_without_artifact_notes() {
    let h = Harness::new("cat > /dev/null");
    h.write_prompt("Say hi");
    let config = RunConfiguration {
        system_prompt: Some("Reply briefly.".to_string()),
        flags: RunFlags {
            return_output: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let outcome = h.run(&config).unwrap();

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(h.console.stdout(), "");
    assert!(h.console.stderr().contains("Note: output.txt was not created."));
    assert_eq!(
        std::fs::read_to_string(h.session().join("system-prompt.txt")).unwrap(),
        "Reply briefly."
    );
}

#[test]
fn test_same_second_sessions_do_not_collide() {
    let h = Harness::new("cat > /dev/null\nprintf x > output.txt");
    h.write_prompt("Say hi");
    h.run(&RunConfiguration::default()).unwrap();
    h.run(&RunConfiguration::default()).unwrap();
    assert!(h.session().is_dir());
    assert!(h.base().join(format!("{}-2", SESSION)).is_dir());
    assert!(h
        .console
        .diag_lines()
        .contains(&format!("Session: {}-2", SESSION)));
}

#[test]
fn test_named_session() {
    let h = Harness::new("cat > /dev/null");
    h.write_prompt("Say hi");
    let config = RunConfiguration {
        session_name: Some(SessionName::new("review")),
        ..Default::default()
    };
    h.run(&config).unwrap();
    assert!(h.base().join(format!("{}_review", SESSION)).is_dir());
}

#[test]
fn test_interrupt_terminates_and_returns_130() {
    let h = Harness::new("exec sleep 30");
    h.write_prompt("Say hi");
    let cwd_before = std::env::current_dir().unwrap();

    let interrupt = h.interrupt.clone();
    let raiser = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(300));
        interrupt.raise();
    });
    let outcome = h.run(&RunConfiguration::default()).unwrap();
    raiser.join().unwrap();

    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(outcome.exit_code(), 130);
    assert!(h.console.diag_lines().contains(&"Interrupted.".to_string()));
    assert!(!h.console.stderr().contains("Files created"));
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
}

//! 外部アシスタント CLI を起動する AssistantProcess 実装
//!
//! stdin にプロンプトを書いて閉じ、stdout はファイルへ、stderr は行ごとに中継（または破棄）する。
//! 終了待ちは try_wait のポーリングで、その間に割り込みフラグを見る。

use crate::domain::ProcessOutcome;
use crate::ports::outbound::{AssistantProcess, Console, InterruptChecker, LaunchRequest};
use common::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// 終了待ちのポーリング間隔
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct ClaudeProcess {
    console: Arc<dyn Console>,
    interrupt: Arc<dyn InterruptChecker>,
    poll_interval: Duration,
}

impl ClaudeProcess {
    pub fn new(console: Arc<dyn Console>, interrupt: Arc<dyn InterruptChecker>) -> Self {
        Self {
            console,
            interrupt,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    fn spawn(&self, request: &LaunchRequest<'_>) -> Result<Child, Error> {
        let stdout = File::create(request.stdout_path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to create {}: {}",
                request.stdout_path.display(),
                e
            ))
        })?;
        let stderr = if request.relay_stderr {
            Stdio::piped()
        } else {
            Stdio::null()
        };
        let mut command = Command::new(&request.spec.program);
        command
            .args(&request.spec.args)
            .current_dir(request.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(stdout))
            .stderr(stderr);
        // 子が起動したツールのプロセスもまとめて止められるよう、独立したプロセスグループにする
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        command
            .spawn()
            .map_err(|e| {
                Error::launch(format!(
                    "Failed to execute '{}': {}",
                    request.spec.program.display(),
                    e
                ))
            })
    }

    /// 割り込みがあればプロセスグループに SIGTERM を送り、子の終了を待って Interrupted を返す
    fn wait(&self, child: &mut Child) -> Result<ProcessOutcome, Error> {
        loop {
            if self.interrupt.is_interrupted() {
                terminate(child);
                let _ = child.wait();
                return Ok(ProcessOutcome::Interrupted);
            }
            let status = child
                .try_wait()
                .map_err(|e| Error::io_msg(format!("Failed to wait for process: {}", e)))?;
            if let Some(status) = status {
                if self.interrupt.is_interrupted() {
                    terminate(child);
                    return Ok(ProcessOutcome::Interrupted);
                }
                return Ok(ProcessOutcome::Exited(exit_code_of(status)));
            }
            thread::sleep(self.poll_interval);
        }
    }
}

impl AssistantProcess for ClaudeProcess {
    fn run(&self, request: &LaunchRequest<'_>) -> Result<ProcessOutcome, Error> {
        let mut child = self.spawn(request)?;

        // 子が stdin を読まずに終わっても詰まらないよう別スレッドで書く。drop で閉じる。
        let writer = child.stdin.take().map(|mut stdin| {
            let text = request.stdin_text.to_string();
            thread::spawn(move || {
                let _ = stdin.write_all(text.as_bytes());
            })
        });

        let relay = child.stderr.take().map(|stderr| {
            let console = Arc::clone(&self.console);
            thread::spawn(move || relay_lines(stderr, console.as_ref()))
        });

        let outcome = self.wait(&mut child)?;

        // 割り込み時は孫プロセスがパイプを握ったままでも待たない（スレッドは切り離す）
        if outcome != ProcessOutcome::Interrupted {
            if let Some(h) = writer {
                let _ = h.join();
            }
            if let Some(h) = relay {
                let _ = h.join();
            }
        }
        Ok(outcome)
    }

    fn run_inherited(&self, program: &Path, args: &[String]) -> Result<i32, Error> {
        let status = Command::new(program).args(args).status().map_err(|e| {
            Error::launch(format!("Failed to execute '{}': {}", program.display(), e))
        })?;
        Ok(exit_code_of(status))
    }
}

/// stderr を 1 行ずつ診断ストリームへ（UTF-8 でない部分は置換文字）
fn relay_lines(stderr: impl std::io::Read, console: &dyn Console) {
    let mut reader = BufReader::new(stderr);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                console.diag(line.trim_end_matches(['\n', '\r']));
            }
        }
    }
}

/// 子のプロセスグループ全体に SIGTERM（子は spawn 時にグループの先頭になっている）
#[cfg(unix)]
fn terminate(child: &mut Child) {
    // 全員終了済みなら ESRCH になるだけ
    unsafe {
        libc::kill(-(child.id() as libc::pid_t), libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
}

/// シグナルで終わった場合は 128 + シグナル番号
#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(sig)) => 128 + sig,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

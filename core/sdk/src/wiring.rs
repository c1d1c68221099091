//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FanoutLog, FileJsonLog, FileSystem, Log, NoopLog, StdClock, StdEnvResolver, StdFileSystem,
    StderrLog,
};
use common::ports::outbound::{EnvResolver, LogLevel, LogRecord};

use crate::adapter::{
    ClaudeProcess, FileSystemPromptConfig, NoopInterruptChecker, SigintChecker, StdConsole,
    StdoutDryRunReportSink,
};
use crate::ports::outbound::{AssistantProcess, Console, InterruptChecker};
use crate::usecase::app::{IoDeps, ProcessDeps, RunDeps, RunUseCase};
use crate::usecase::output::OutputCollector;
use crate::usecase::passthrough::PassthroughUseCase;
use crate::usecase::prompt::PromptResolver;
use crate::usecase::session::SessionDirectory;

/// main が使う組み立て済みの部品
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub run_use_case: RunUseCase,
    pub passthrough: PassthroughUseCase,
}

/// ログの出力先: CLAUDE_SDK_LOG があれば JSONL ファイル、-v なら stderr、両方なら両方
fn build_logger(fs: &Arc<dyn FileSystem>, env_resolver: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(path) = env_resolver.log_file() {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(fs), path)));
    }
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    match logs.len() {
        0 => Arc::new(NoopLog),
        1 => logs.remove(0),
        _ => Arc::new(FanoutLog::new(logs)),
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_app(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = build_logger(&fs, env_resolver.as_ref(), verbose);
    let console: Arc<dyn Console> = Arc::new(StdConsole);

    let interrupt: Arc<dyn InterruptChecker> = match SigintChecker::new() {
        Ok(checker) => Arc::new(checker),
        Err(e) => {
            let _ = logger.log(
                &LogRecord::new(LogLevel::Warn, format!("Failed to install Ctrl+C handler: {}", e))
                    .layer("wiring"),
            );
            Arc::new(NoopInterruptChecker)
        }
    };

    let program = env_resolver.assistant_program();
    let process: Arc<dyn AssistantProcess> =
        Arc::new(ClaudeProcess::new(Arc::clone(&console), interrupt));

    let run_use_case = RunUseCase::new(RunDeps {
        prompt: PromptResolver::new(
            Arc::clone(&fs),
            Arc::new(FileSystemPromptConfig::new(Arc::clone(&fs))),
        ),
        session: SessionDirectory::new(Arc::clone(&fs), Arc::new(StdClock), Arc::clone(&logger)),
        output: OutputCollector::new(Arc::clone(&fs), Arc::clone(&console), Arc::clone(&logger)),
        process: ProcessDeps {
            program: program.clone(),
            runner: Arc::clone(&process),
        },
        io: IoDeps {
            console: Arc::clone(&console),
            dry_run_sink: Arc::new(StdoutDryRunReportSink::new(Arc::clone(&console))),
            log: Arc::clone(&logger),
        },
    });
    let passthrough = PassthroughUseCase::new(program, process, Arc::clone(&logger));

    App {
        env_resolver,
        logger,
        run_use_case,
        passthrough,
    }
}

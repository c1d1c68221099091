//! --simple: 外部 CLI に非対話フラグだけ付けて残りの引数をそのまま渡す
//!
//! セッションも成果物回収も行わず、標準入出力は引き継ぐ。

use crate::ports::outbound::AssistantProcess;
use crate::usecase::command::build_passthrough;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::PathBuf;
use std::sync::Arc;

pub struct PassthroughUseCase {
    program: PathBuf,
    process: Arc<dyn AssistantProcess>,
    log: Arc<dyn Log>,
}

impl PassthroughUseCase {
    pub fn new(program: PathBuf, process: Arc<dyn AssistantProcess>, log: Arc<dyn Log>) -> Self {
        Self {
            program,
            process,
            log,
        }
    }

    /// 外部 CLI の終了コードをそのまま返す
    pub fn run(&self, rest: &[String]) -> Result<i32, Error> {
        let spec = build_passthrough(&self.program, rest);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "passthrough")
                .layer("usecase")
                .kind("lifecycle")
                .field("args", spec.args.len()),
        );
        self.process.run_inherited(&spec.program, &spec.args)
    }
}

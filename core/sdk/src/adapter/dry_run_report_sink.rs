//! dry run 結果の出力 adapter（stdout に人間向けフォーマットで出力）

use crate::domain::DryRunInfo;
use crate::ports::outbound::{Console, DryRunReportSink};
use common::error::Error;
use std::sync::Arc;

/// dry run の結果を stdout に出力する adapter
pub struct StdoutDryRunReportSink {
    console: Arc<dyn Console>,
}

impl StdoutDryRunReportSink {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

/// 複数行の値を 2 段インデントのブロックにする
fn block(out: &mut String, label: &str, text: &str) {
    out.push_str(&format!("{}: |\n", label));
    for line in text.lines() {
        out.push_str(&format!("  {}\n", line));
    }
}

pub fn render(info: &DryRunInfo) -> String {
    let mut out = String::new();
    out.push_str("=== claude-sdk dry run ===\n");
    out.push_str(&format!("session_dir: {}\n", info.session_dir.display()));
    out.push_str(&format!("program: {}\n", info.invocation.program.display()));
    out.push_str(&format!("args: [{}]\n", info.invocation.args.join(", ")));
    out.push_str(&format!("output_format: {}\n", info.output_format));
    match &info.model {
        Some(m) => out.push_str(&format!("model: {}\n", m)),
        None => out.push_str("model: (default)\n"),
    }
    match &info.tool_allowlist {
        Some(list) => out.push_str(&format!("tool_allowlist: [{}]\n", list.join(", "))),
        None => out.push_str("tool_allowlist: (all)\n"),
    }
    out.push_str(&format!("artifact: {}\n", info.artifact));
    match &info.output_path {
        Some(p) => out.push_str(&format!("output_path: {}\n", p.display())),
        None => out.push_str("output_path: (none)\n"),
    }
    block(&mut out, "system_prompt", &info.system_prompt);
    block(&mut out, "prompt", &info.prompt);
    out.push_str("=== end dry run ===\n");
    out
}

impl DryRunReportSink for StdoutDryRunReportSink {
    fn report(&self, info: &DryRunInfo) -> Result<(), Error> {
        self.console.out(&render(info));
        Ok(())
    }
}

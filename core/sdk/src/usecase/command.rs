//! 外部 CLI の起動仕様を組み立てる（純粋関数）
//!
//! 常に `-p --output-format stream-json --verbose`。モデル指定があれば `--model <m>`。
//! ツールは --all-tools なら何も渡さない（許可リストなし = 制限なし、という外部 CLI 側の解釈に依存）。
//! それ以外は指定リストか既定の 7 ツールを 1 つずつ `--allowedTools <t>` で渡し、
//! -o が無いときは成果物を書けるよう Write を足す。

use crate::domain::invocation::{
    DEFAULT_TOOLS, FLAG_ALLOWED_TOOLS, FLAG_MODEL, FLAG_OUTPUT_FORMAT, FLAG_PRINT, FLAG_VERBOSE,
    STREAM_JSON, WRITE_TOOL,
};
use crate::domain::{InvocationSpec, RunConfiguration, ToolSelection};
use std::path::Path;

/// 実際に許可するツール。None は許可リストを渡さない（--all-tools）。
pub fn effective_tools(config: &RunConfiguration) -> Option<Vec<String>> {
    let mut tools = match &config.tools {
        ToolSelection::All => return None,
        ToolSelection::Default => DEFAULT_TOOLS.iter().map(|t| t.to_string()).collect(),
        ToolSelection::Listed(list) => list.clone(),
    };
    if config.output_path.is_none() && !tools.iter().any(|t| t == WRITE_TOOL) {
        tools.push(WRITE_TOOL.to_string());
    }
    Some(tools)
}

pub fn build_invocation(program: &Path, config: &RunConfiguration) -> InvocationSpec {
    let mut args: Vec<String> = vec![
        FLAG_PRINT.to_string(),
        FLAG_OUTPUT_FORMAT.to_string(),
        STREAM_JSON.to_string(),
        FLAG_VERBOSE.to_string(),
    ];
    if let Some(ref model) = config.model {
        args.push(FLAG_MODEL.to_string());
        args.push(model.to_string());
    }
    for tool in effective_tools(config).unwrap_or_default() {
        args.push(FLAG_ALLOWED_TOOLS.to_string());
        args.push(tool);
    }
    InvocationSpec::new(program, args)
}

/// --simple: 非対話フラグを先頭に付けて残りをそのまま渡す
pub fn build_passthrough(program: &Path, rest: &[String]) -> InvocationSpec {
    let args = std::iter::once(FLAG_PRINT.to_string())
        .chain(rest.iter().cloned())
        .collect();
    InvocationSpec::new(program, args)
}

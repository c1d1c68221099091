//! プロンプト解決ユースケース
//!
//! システムプロンプト（先に一致したものを採用）:
//! 1. --system-prompt
//! 2. `<base>/.claude-sdk/system-prompt.txt`（空白除去後に空でなければ）
//! 3. 出力形式ごとの既定文
//!
//! 本文は --prompt が --prompt-file より優先。ファイルが無ければ致命的エラー。

use crate::domain::prompt::as_suffix;
use crate::domain::{OutputFormat, PromptSource, ResolvedPrompt, RunConfiguration};
use crate::ports::outbound::SystemPromptConfig;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct PromptResolver {
    fs: Arc<dyn FileSystem>,
    config: Arc<dyn SystemPromptConfig>,
}

impl PromptResolver {
    pub fn new(fs: Arc<dyn FileSystem>, config: Arc<dyn SystemPromptConfig>) -> Self {
        Self { fs, config }
    }

    /// 区切り付きのシステムプロンプト接尾辞を返す（常に何かしらが付く）
    pub fn resolve_system_suffix(
        &self,
        base_dir: &Path,
        explicit: Option<&str>,
        format: OutputFormat,
    ) -> String {
        if let Some(s) = explicit.filter(|s| !s.trim().is_empty()) {
            return as_suffix(s);
        }
        if let Some(s) = self.config.load(base_dir) {
            return as_suffix(&s);
        }
        as_suffix(format.default_system_prompt())
    }

    /// プロンプト本文を返す（前後の空白は ResolvedPrompt 側で除く）
    pub fn resolve_base_prompt(&self, base_dir: &Path, source: &PromptSource) -> Result<String, Error> {
        match source {
            PromptSource::Literal(text) => Ok(text.clone()),
            PromptSource::File(path) => {
                let path = base_dir.join(path);
                if !self.fs.exists(&path) {
                    return Err(Error::missing_input(format!(
                        "Prompt file not found: {}",
                        path.display()
                    )));
                }
                self.fs
                    .read_to_string(&path)
                    .map_err(|e| Error::io_msg(format!("Failed to read prompt file: {}", e)))
            }
        }
    }

    pub fn resolve(&self, base_dir: &Path, config: &RunConfiguration) -> Result<ResolvedPrompt, Error> {
        let base = self.resolve_base_prompt(base_dir, &config.prompt)?;
        let suffix = self.resolve_system_suffix(
            base_dir,
            config.system_prompt.as_deref(),
            config.output_format,
        );
        Ok(ResolvedPrompt::new(&base, suffix))
    }
}

//! `<base>/.claude-sdk/system-prompt.txt` を読む SystemPromptConfig 実装

use crate::domain::session::config_system_prompt_path;
use crate::ports::outbound::SystemPromptConfig;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct FileSystemPromptConfig {
    fs: Arc<dyn FileSystem>,
}

impl FileSystemPromptConfig {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl SystemPromptConfig for FileSystemPromptConfig {
    fn load(&self, base_dir: &Path) -> Option<String> {
        let path = config_system_prompt_path(base_dir);
        if !self.fs.is_file(&path) {
            return None;
        }
        let text = self.fs.read_to_string(&path).ok()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

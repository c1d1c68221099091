//! 解決済みプロンプト（外部 CLI の stdin に渡す全文）

/// システムプロンプトを本文に付けるときの区切り（空行）
pub const SYSTEM_PROMPT_SEPARATOR: &str = "\n\n";

/// 本文・システムプロンプト接尾辞・送信する全文
///
/// 全文は常に `base.trim() + system_suffix`。接尾辞が無いプロンプトは作れない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    base: String,
    system_suffix: String,
    full: String,
}

impl ResolvedPrompt {
    pub fn new(base: &str, system_suffix: String) -> Self {
        let base = base.trim().to_string();
        let full = format!("{}{}", base, system_suffix);
        Self {
            base,
            system_suffix,
            full,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// 区切りを含むシステムプロンプト接尾辞
    pub fn system_suffix(&self) -> &str {
        &self.system_suffix
    }

    pub fn full(&self) -> &str {
        &self.full
    }
}

/// システムプロンプト本文を区切り付きの接尾辞にする
pub fn as_suffix(system_prompt: &str) -> String {
    format!("{}{}", SYSTEM_PROMPT_SEPARATOR, system_prompt)
}

//! Ctrl+C（SIGINT）で割り込みフラグを立てる InterruptChecker 実装
//!
//! コンストラクタで ctrlc ハンドラを登録し、is_interrupted() でフラグを読む。
//! ハンドラを登録すると端末からの SIGINT で自プロセスは終了しなくなるため、
//! 外部プロセスの終了と 130 での終了は ClaudeProcess 側が受け持つ。

use crate::ports::outbound::InterruptChecker;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ctrl+C を受けたらフラグを立てる実装
pub struct SigintChecker {
    flag: Arc<AtomicBool>,
}

impl SigintChecker {
    /// 新しいチェッカーを作成し、SIGINT ハンドラを登録する。
    /// ctrlc はハンドラを 1 度しか登録できないので、2 回目以降は Err になる。
    pub fn new() -> Result<Self, ctrlc::Error> {
        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = Arc::clone(&flag);
        ctrlc::set_handler(move || {
            flag_clone.store(true, Ordering::SeqCst);
        })?;
        Ok(Self { flag })
    }
}

impl InterruptChecker for SigintChecker {
    fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// 割り込みを検知しないスタブ（ハンドラ登録に失敗した場合などに使用）
pub struct NoopInterruptChecker;

impl InterruptChecker for NoopInterruptChecker {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// テスト用: 任意のタイミングで立てられるフラグ
#[cfg(test)]
#[derive(Default)]
pub struct FlagInterruptChecker {
    flag: AtomicBool,
}

#[cfg(test)]
impl FlagInterruptChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl InterruptChecker for FlagInterruptChecker {
    fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

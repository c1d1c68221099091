//! 人間向けログ（stderr に要点のみ）と複数出力先への分配

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

const FIELD_VALUE_MAX: usize = 200;

/// fields を `k=v` の並びにする（長い値は切り詰め）
fn fields_summary(record: &LogRecord) -> String {
    let fields = match record.fields {
        Some(ref f) if !f.is_empty() => f,
        _ => return String::new(),
    };
    fields
        .iter()
        .map(|(k, v)| {
            let s = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if s.chars().count() > FIELD_VALUE_MAX {
                let truncated: String = s.chars().take(FIELD_VALUE_MAX).collect();
                format!("{}={}...", k, truncated)
            } else {
                format!("{}={}", k, s)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `[log] <level> <message> k=v ...` 形式の 1 行にする
pub(crate) fn render_line(record: &LogRecord) -> String {
    let summary = fields_summary(record);
    if summary.is_empty() {
        format!("[log] {} {}", record.level.as_str(), record.message)
    } else {
        format!("[log] {} {} {}", record.level.as_str(), record.message, summary)
    }
}

/// --verbose 時に stderr へ出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", render_line(record));
        Ok(())
    }
}

/// 登録された Log へ順に書き出す。1 つが失敗しても残りには書く。
pub struct FanoutLog {
    logs: Vec<Arc<dyn Log>>,
}

impl FanoutLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for l in &self.logs {
            if let Err(e) = l.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

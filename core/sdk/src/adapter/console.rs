//! Console の標準実装（stdout / stderr）

use crate::ports::outbound::Console;
use std::io::Write;

/// stdout と stderr に直接書く
pub struct StdConsole;

impl Console for StdConsole {
    fn out(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn diag(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// テスト用: 書かれた内容をメモリに溜める
#[cfg(test)]
#[derive(Default)]
pub struct BufferConsole {
    out: std::sync::Mutex<String>,
    err: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout(&self) -> String {
        self.out.lock().unwrap().clone()
    }

    /// 診断行を改行で連結したもの
    pub fn stderr(&self) -> String {
        self.err.lock().unwrap().join("\n")
    }

    pub fn diag_lines(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Console for BufferConsole {
    fn out(&self, text: &str) {
        self.out.lock().unwrap().push_str(text);
    }

    fn diag(&self, line: &str) {
        self.err.lock().unwrap().push(line.to_string());
    }
}

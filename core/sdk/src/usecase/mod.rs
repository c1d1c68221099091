//! ユースケース層（Outbound ポート経由でのみ I/O を行う）

pub mod app;
pub mod command;
pub mod output;
pub mod passthrough;
pub mod prompt;
pub mod session;

//! dry run 結果の出力先 Outbound ポート
//!
//! usecase が dry run の結果を組み立てたあと、この trait 経由で出力先に渡す。

use crate::domain::DryRunInfo;
use common::error::Error;

/// dry run の結果を出力する Outbound ポート
pub trait DryRunReportSink: Send + Sync {
    fn report(&self, info: &DryRunInfo) -> Result<(), Error>;
}

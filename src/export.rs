//! JSON export of analysis results.
//!
//! ```text
//! run_analysis() → AnalysisReport → write_json_report() → file / stdout / socket
//! ```
//!
//! Map keys (edge ids, vertex ids, group indices) become JSON object keys,
//! so they are written as strings. Not-applicable ratios are `null`.

use std::io::Write;

use serde::Serialize;

use crate::analysis::AnalysisReport;
use crate::Result;

/// Pretty-printed JSON for `report`.
pub fn to_json_string(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub fn write_json_report(report: &AnalysisReport, writer: &mut dyn Write) -> Result<()> {
    write_json(report, writer)
}

/// Write any serializable result (a motif list, one group's metrics) the
/// same way.
pub fn write_json<T: Serialize + ?Sized>(value: &T, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse a report previously written by [`write_json_report`].
pub fn from_json_str(json: &str) -> Result<AnalysisReport> {
    Ok(serde_json::from_str(json)?)
}

//! Log-backed diagnostic sink.
//!
//! Implements [`DiagnosticSink`] by rendering every record as
//! `"<store>: <key> : <value>"` on the `log` facade.  Tests use a
//! recording sink instead.

use log::info;

use crate::app::ports::DiagnosticSink;
use crate::app::records::DiagnosticRecord;

/// Adapter that logs every [`DiagnosticRecord`] to the diagnostic log.
pub struct LogDiagnosticSink;

impl LogDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogDiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogDiagnosticSink {
    fn emit(&mut self, record: &DiagnosticRecord) {
        info!("{record}");
    }
}

use tracing::{debug, warn};

use crate::core::{CfdiError, InvoiceRecord};
use crate::extract::parse_cfdi_file;

/// What a viewer currently shows: a record, an error message, or nothing.
///
/// At most one of the two is set at any time. A held record is replaced,
/// never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    record: Option<InvoiceRecord>,
    error: Option<String>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest an uploaded file, replacing whatever was shown before.
    pub fn load(&mut self, file_name: &str, text: &str) -> Result<&InvoiceRecord, CfdiError> {
        match parse_cfdi_file(file_name, text) {
            Ok(record) => Ok(self.show_record(record)),
            Err(e) => {
                if e.is_validation() {
                    warn!(file_name, kind = ?e.kind(), "CFDI failed structural checks");
                } else {
                    debug!(file_name, kind = ?e.kind(), "rejected upload");
                }
                self.show_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Show `record`, clearing any error.
    pub fn show_record(&mut self, record: InvoiceRecord) -> &InvoiceRecord {
        self.error = None;
        self.record.insert(record)
    }

    /// Show an error message, dropping any record.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.record = None;
        self.error = Some(message.into());
    }

    /// Back to the empty upload view.
    pub fn reset(&mut self) {
        self.record = None;
        self.error = None;
    }

    pub fn record(&self) -> Option<&InvoiceRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_none() && self.error.is_none()
    }
}

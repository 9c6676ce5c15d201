use crate::core::{CfdiError, InvoiceRecord};

use super::parse_cfdi;

/// Reject file names that do not end in `.xml` (case-insensitive).
///
/// This is the uploader's pre-check; it does not look at the content.
pub fn check_file_name(name: &str) -> Result<(), CfdiError> {
    if name.to_ascii_lowercase().ends_with(".xml") {
        Ok(())
    } else {
        Err(CfdiError::UnsupportedInput(name.to_string()))
    }
}

/// [`check_file_name`] followed by [`parse_cfdi`].
pub fn parse_cfdi_file(name: &str, text: &str) -> Result<InvoiceRecord, CfdiError> {
    check_file_name(name)?;
    parse_cfdi(text)
}

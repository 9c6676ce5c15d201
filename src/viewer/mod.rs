//! Consumer side of the record: viewer state and display formatting.
//!
//! Nothing here mutates an [`InvoiceRecord`](crate::core::InvoiceRecord);
//! amounts, rates and timestamps stay as text in the record and are only
//! converted for display.
//!
//! # Example
//!
//! ```
//! use cfdi::viewer::{format_amount, format_rate};
//!
//! assert_eq!(format_amount("1160", "MXN"), "$1,160.00");
//! assert_eq!(format_rate("0.160000").as_deref(), Some("16%"));
//! ```

mod format;
mod render;
mod state;

pub use format::{format_amount, format_rate, format_timestamp, tax_display, usage_display};
pub use render::{InvoiceSheet, render_text};
pub use state::ViewerState;

//! CFDI extraction: from XML text to a validated [`InvoiceRecord`].
//!
//! # Example
//!
//! ```
//! use cfdi::extract::parse_cfdi;
//!
//! let xml = r#"<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4"
//!     xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital" Total="116.00">
//!   <cfdi:Emisor Rfc="EKU9003173C9"/>
//!   <cfdi:Receptor Rfc="XAXX010101000"/>
//!   <cfdi:Conceptos><cfdi:Concepto Importe="100.00"/></cfdi:Conceptos>
//!   <cfdi:Complemento><tfd:TimbreFiscalDigital UUID="5F1A..."/></cfdi:Complemento>
//! </cfdi:Comprobante>"#;
//!
//! let record = parse_cfdi(xml).unwrap();
//! assert_eq!(record.total_amount, "116.00");
//! assert_eq!(record.currency_code, "MXN");
//! ```
//!
//! [`InvoiceRecord`]: crate::core::InvoiceRecord

mod ingest;
mod record;

pub use ingest::{check_file_name, parse_cfdi_file};
pub use record::{extract, parse_cfdi};

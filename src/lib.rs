//! # cfdi
//!
//! Reads Mexican electronic tax invoices (CFDI, *Comprobante Fiscal Digital
//! por Internet*) from XML into a validated, display-ready record.
//!
//! Producers disagree on namespace prefixes and on whether names are
//! PascalCase or start lowercase; the locator in [`xml`] resolves logical
//! element names across those variants, and [`extract`] assembles an
//! [`InvoiceRecord`] or fails with a single [`CfdiError`]. A record is
//! never returned partially built.
//!
//! Amounts are kept as the source text. No signature verification or SAT
//! lookup is performed.
//!
//! ## Quick Start
//!
//! ```rust
//! use cfdi::{DocumentKind, ErrorKind, extract::parse_cfdi};
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4"
//!     xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital"
//!     Version="4.0" Fecha="2024-06-15T10:30:00" TipoDeComprobante="I"
//!     SubTotal="100.00" Total="116.00">
//!   <cfdi:Emisor Rfc="EKU9003173C9" Nombre="ESCUELA KEMPER URGATE" RegimenFiscal="601"/>
//!   <cfdi:Receptor Rfc="XAXX010101000" Nombre="PUBLICO EN GENERAL" UsoCFDI="S01"/>
//!   <cfdi:Conceptos>
//!     <cfdi:Concepto ClaveProdServ="84111506" Cantidad="1" ClaveUnidad="ACT"
//!         Descripcion="Servicio" ValorUnitario="100.00" Importe="100.00"/>
//!   </cfdi:Conceptos>
//!   <cfdi:Complemento>
//!     <tfd:TimbreFiscalDigital UUID="6F2B4C8E-1A3D-4E5F-9A7B-0C1D2E3F4A5B"/>
//!   </cfdi:Complemento>
//! </cfdi:Comprobante>"#;
//!
//! let record = parse_cfdi(xml).unwrap();
//! assert_eq!(record.document_kind, DocumentKind::Income);
//! assert_eq!(record.line_items.len(), 1);
//! assert!(record.tax_summary.is_none());
//!
//! assert_eq!(parse_cfdi("<not-xml").unwrap_err().kind(), ErrorKind::MalformedDocument);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record types, error taxonomy, SAT catalogs |
//! | `xml` (default) | Namespace-tolerant XML document locator |
//! | `extract` (default) | CFDI extraction and file-name pre-check |
//! | `viewer` | Viewer state, display formatting, text rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "xml")]
pub mod xml;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "viewer")]
pub mod viewer;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

//! Namespace-tolerant XML document locator.
//!
//! Parses XML into an owned element tree and resolves logical CFDI names
//! (`"Comprobante"`, `"TimbreFiscalDigital"`, ...) against it regardless of
//! the prefix a producer chose or whether it spelled names in PascalCase or
//! with an initial lowercase letter.
//!
//! # Example
//!
//! ```
//! use cfdi::xml::{find_element, get_attribute, parse_document};
//!
//! let doc = parse_document(r#"<t:TimbreFiscalDigital xmlns:t="urn:x" uuid="abc"/>"#).unwrap();
//! let stamp = find_element(&doc, "TimbreFiscalDigital").unwrap();
//! assert_eq!(get_attribute(&stamp, "Uuid"), Some("abc"));
//! ```

mod locate;
mod tree;

pub use locate::{
    MatchStrategy, Scope, attribute_opt, attribute_or, find_all_elements,
    find_element, get_attribute, lower_first,
};
pub use tree::{Attribute, Document, Element, Elements, parse_document};

//! Core CFDI record types, error taxonomy, and SAT catalogs.
//!
//! These types carry no parsing logic; see the `extract` module for how
//! they are populated from XML.

pub mod catalogs;
mod error;
mod types;

pub use error::*;
pub use types::*;

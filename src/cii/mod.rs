//! CII (Cross Industry Invoice) extraction.
//!
//! Maps the UN/CEFACT CII tree used by ZUGFeRD/Factur-X to the flat
//! [`InvoiceData`](crate::core::InvoiceData) model. The mapper is tolerant
//! by design: every optional element degrades to an empty or absent field,
//! and only a document without the `CrossIndustryInvoice` root is rejected.

pub mod codes;
mod extract;

pub use extract::{extract_invoice, format_date, is_zugferd_xml};

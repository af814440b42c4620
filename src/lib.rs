//! # zugferd-extract
//!
//! Extraction of a normalized, render-ready invoice data model from
//! ZUGFeRD/Factur-X sources: CII (Cross Industry Invoice) XML, or PDF/A
//! files carrying such XML as an embedded file stream.
//!
//! The extractor is deliberately forgiving. Invoices in the wild vary
//! widely in which optional fields they fill, so every missing element
//! degrades to an empty string or absent field; only a document that is
//! not recognizably CII at all is rejected. All extracted values stay
//! text-typed — the model preserves the source's own formatting instead
//! of re-deriving numeric precision.
//!
//! ## Quick Start
//!
//! ```rust
//! use zugferd_extract::{extract_invoice, is_zugferd_xml};
//!
//! let xml = r#"
//! <rsm:CrossIndustryInvoice xmlns:rsm="urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100"
//!                           xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100"
//!                           xmlns:udt="urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100">
//!   <rsm:ExchangedDocument>
//!     <ram:ID>RE-2024-001</ram:ID>
//!     <ram:IssueDateTime><udt:DateTimeString format="102">20240615</udt:DateTimeString></ram:IssueDateTime>
//!   </rsm:ExchangedDocument>
//! </rsm:CrossIndustryInvoice>"#;
//!
//! assert!(is_zugferd_xml(xml));
//! let data = extract_invoice(xml).unwrap();
//! assert_eq!(data.invoice_number, "RE-2024-001");
//! assert_eq!(data.invoice_date, "15.06.2024");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `pdf` (default) | Embedded-XML lookup in PDF/A files via `lopdf` |

pub mod cii;
pub mod core;
pub mod tree;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export the main entry points at crate root for convenience
pub use crate::cii::{extract_invoice, is_zugferd_xml};
pub use crate::core::*;

#[cfg(feature = "pdf")]
pub use crate::pdf::{embedded_invoice_xml, extract_from_pdf};

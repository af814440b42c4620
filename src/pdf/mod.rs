//! Embedded invoice XML lookup inside PDF/A files.
//!
//! ZUGFeRD/Factur-X hybrids carry their CII XML as an embedded file
//! stream. This module navigates the PDF object graph (catalog →
//! `Names` → `EmbeddedFiles` → flat name/filespec pair array, with an
//! `AF` fallback) and hands back the decoded XML text. "No attachment"
//! is an ordinary absent result, distinct from a malformed PDF.

mod extract;

pub use extract::{embedded_invoice_xml, extract_from_pdf};

use thiserror::Error;

/// Errors surfaced by the extraction entry points.
///
/// Deliberately small: missing optional elements, absent attributes, and
/// unexpected scalar/array shapes never error — they degrade to empty or
/// absent fields. Real-world invoices vary too widely in optional-field
/// completeness for anything stricter to be usable.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The designated CII root element is entirely missing — the input is
    /// not recognizably a CII/ZUGFeRD document.
    #[error("not a recognizable CII/ZUGFeRD document")]
    Unrecognized,

    /// The source could not be read at all: XML that fails to tokenize, or
    /// PDF bytes that fail to load into an object graph.
    #[error("malformed source: {0}")]
    Malformed(String),
}

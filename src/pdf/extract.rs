use lopdf::{Dictionary, Document, Object};

use crate::core::ExtractError;

/// Load PDF bytes and look up the embedded invoice XML.
///
/// Bytes that do not load into an object graph are a
/// [`ExtractError::Malformed`] error; a well-formed PDF without an
/// embedded XML file is an ordinary `Ok(None)`.
pub fn extract_from_pdf(pdf_bytes: &[u8]) -> Result<Option<String>, ExtractError> {
    let doc = Document::load_mem(pdf_bytes)
        .map_err(|e| ExtractError::Malformed(format!("failed to load PDF: {e}")))?;
    Ok(embedded_invoice_xml(&doc))
}

/// Find the first embedded file whose name ends in `.xml` (case-insensitive)
/// and return its decoded content.
///
/// Walks catalog → `Names` → `EmbeddedFiles` → `Names`, a flat array of
/// alternating name/file-specification pairs, then falls back to the
/// catalog `AF` associated-files array. A missing object at any step means
/// "keep scanning", never an error; the result is `None` only once every
/// candidate is exhausted.
pub fn embedded_invoice_xml(doc: &Document) -> Option<String> {
    find_via_names(doc).or_else(|| find_via_af(doc))
}

fn find_via_names(doc: &Document) -> Option<String> {
    let catalog = doc.catalog().ok()?;
    let names_dict = resolve_dict(doc, catalog.get(b"Names").ok()?)?;
    let ef_dict = resolve_dict(doc, names_dict.get(b"EmbeddedFiles").ok()?)?;
    let names_array = resolve_obj(doc, ef_dict.get(b"Names").ok()?)?.as_array().ok()?;

    // Flat pair array: [name1, filespec1, name2, filespec2, ...]
    for chunk in names_array.chunks(2) {
        if chunk.len() < 2 {
            continue;
        }
        let Some(name) = obj_to_string(&chunk[0]) else {
            continue;
        };
        if !is_xml_filename(&name) {
            continue;
        }
        if let Some(xml) = filespec_xml(doc, &chunk[1]) {
            return Some(xml);
        }
    }
    None
}

fn find_via_af(doc: &Document) -> Option<String> {
    let catalog = doc.catalog().ok()?;
    let af_array = resolve_obj(doc, catalog.get(b"AF").ok()?)?.as_array().ok()?;

    for obj in af_array {
        let Some(fs_dict) = resolve_dict(doc, obj) else {
            continue;
        };
        // Filename from UF, falling back to F
        let name = fs_dict
            .get(b"UF")
            .or_else(|_| fs_dict.get(b"F"))
            .ok()
            .and_then(obj_to_string)
            .unwrap_or_default();
        if !is_xml_filename(&name) {
            continue;
        }
        if let Some(xml) = filespec_dict_xml(doc, fs_dict) {
            return Some(xml);
        }
    }
    None
}

fn filespec_xml(doc: &Document, obj: &Object) -> Option<String> {
    filespec_dict_xml(doc, resolve_dict(doc, obj)?)
}

fn filespec_dict_xml(doc: &Document, fs_dict: &Dictionary) -> Option<String> {
    let ef_dict = resolve_dict(doc, fs_dict.get(b"EF").ok()?)?;
    let stream_obj = resolve_obj(doc, ef_dict.get(b"F").ok()?)?;
    let stream = stream_obj.as_stream().ok()?;

    // decompressed_content() fails when no Filter key exists (uncompressed
    // stream), so fall back to raw content in that case.
    let content = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    String::from_utf8(content).ok()
}

fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(d) => Some(d),
        _ => None,
    }
}

fn resolve_obj<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Decode a PDF string object. lopdf stores both literal and hex strings
/// as decoded bytes, so one match arm covers both encodings.
fn obj_to_string(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

fn is_xml_filename(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".xml")
}

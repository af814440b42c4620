//! Extract invoice data from a ZUGFeRD PDF or CII XML file.
//!
//! Run with: `cargo run --example extract -- path/to/invoice.pdf`

use std::path::PathBuf;

use zugferd_extract::{extract_from_pdf, extract_invoice, is_zugferd_xml};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .ok_or("usage: extract <invoice.pdf|invoice.xml>")?
        .into();

    let bytes = std::fs::read(&path)?;

    let xml = if path.extension().and_then(|ext| ext.to_str()) == Some("pdf") {
        extract_from_pdf(&bytes)?.ok_or("no embedded invoice XML found in PDF")?
    } else {
        String::from_utf8(bytes)?
    };

    if !is_zugferd_xml(&xml) {
        return Err("not a CII/ZUGFeRD document".into());
    }

    let data = extract_invoice(&xml)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

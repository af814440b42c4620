//! Code → label reference tables.
//!
//! Read-only data resolved at extraction time: ZUGFeRD/Factur-X profile
//! identifiers (BT-23) and UNTDID 4461 payment means type codes (BT-81).
//! Unrecognized codes always pass through verbatim so an exotic document
//! still renders something meaningful.

/// Resolve a business-process / profile identifier to its display label.
///
/// Covers the Factur-X 1.0 guideline URNs, the legacy ZUGFeRD 1.0 URNs,
/// the XRechnung 3.0 customization ID, and the Peppol BIS billing process
/// in both URN and bare numeric form. Unknown codes come back unchanged.
pub fn profile_label(code: &str) -> &str {
    match PROFILE_LABELS.binary_search_by_key(&code, |&(c, _)| c) {
        Ok(idx) => PROFILE_LABELS[idx].1,
        Err(_) => code,
    }
}

/// Resolve a UNTDID 4461 payment means type code to its display label.
///
/// Unknown codes come back unchanged.
pub fn payment_means_label(code: &str) -> &str {
    match PAYMENT_MEANS_LABELS.binary_search_by_key(&code, |&(c, _)| c) {
        Ok(idx) => PAYMENT_MEANS_LABELS[idx].1,
        Err(_) => code,
    }
}

/// Profile identifiers (sorted by code for binary search).
static PROFILE_LABELS: &[(&str, &str)] = &[
    ("01", "Peppol BIS Billing"),
    ("urn:cen.eu:en16931:2017", "EN 16931"),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:factur-x.eu:1p0:basic",
        "Basic",
    ),
    (
        "urn:cen.eu:en16931:2017#compliant#urn:xeinkauf.de:kosit:xrechnung_3.0",
        "XRechnung",
    ),
    (
        "urn:cen.eu:en16931:2017#conformant#urn:factur-x.eu:1p0:extended",
        "Extended",
    ),
    ("urn:factur-x.eu:1p0:basicwl", "Basic WL"),
    ("urn:factur-x.eu:1p0:minimum", "Minimum"),
    (
        "urn:fdc:peppol.eu:2017:poacc:billing:01:1.0",
        "Peppol BIS Billing",
    ),
    (
        "urn:ferd:CrossIndustryDocument:invoice:1p0:basic",
        "ZUGFeRD 1.0 Basic",
    ),
    (
        "urn:ferd:CrossIndustryDocument:invoice:1p0:comfort",
        "ZUGFeRD 1.0 Comfort",
    ),
    (
        "urn:ferd:CrossIndustryDocument:invoice:1p0:extended",
        "ZUGFeRD 1.0 Extended",
    ),
];

/// UNTDID 4461 — payment means type codes (sorted for binary search).
static PAYMENT_MEANS_LABELS: &[(&str, &str)] = &[
    ("1", "Nicht definiert"),
    ("10", "Barzahlung"),
    ("20", "Scheck"),
    ("30", "Überweisung"),
    ("42", "Zahlung auf Bankkonto"),
    ("48", "Bankkarte"),
    ("49", "Lastschrift"),
    ("57", "Dauerauftrag"),
    ("58", "SEPA-Überweisung"),
    ("59", "SEPA-Lastschrift"),
    ("68", "Online-Zahlungsdienst"),
    ("97", "Verrechnung"),
];

use serde::{Deserialize, Serialize};

/// Postal address of a trade party.
///
/// All fields are plain text, required structurally; an address element
/// missing from the source yields empty strings, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// BT-27 / BT-44: Party name.
    pub name: String,
    /// BT-35 / BT-50: Street + house number.
    pub street: String,
    /// BT-38 / BT-53: Postal code.
    pub postal_code: String,
    /// BT-37 / BT-52: City.
    pub city: String,
    /// BT-40 / BT-55: Country code (ISO 3166-1 alpha-2).
    pub country: String,
}

/// BG-25: One invoice line.
///
/// Everything is text — the model preserves the source's own formatting
/// instead of re-deriving numeric precision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// BT-126: Line position number.
    pub position: String,
    /// BT-153: Item name.
    pub description: String,
    /// BT-129: Invoiced quantity.
    pub quantity: String,
    /// BT-130: Unit of measure (UNECE Rec 20, e.g. "C62"); empty when the
    /// source omits the unitCode attribute.
    pub unit: String,
    /// BT-146: Item net price per unit.
    pub unit_price: String,
    /// BT-152: Tax rate with trailing `%`, or empty when the line states
    /// no rate (empty, not `0%` — "not stated" is distinct from zero).
    pub tax_rate: String,
    /// Line net total.
    pub line_total: String,
}

/// BG-23: One document-level VAT breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    /// BT-119: Tax rate, `%`-suffixed.
    pub rate: String,
    /// BT-116: Taxable basis amount.
    pub basis: String,
    /// BT-117: Calculated tax amount.
    pub tax_amount: String,
}

/// The flat, render-ready invoice model handed to the host renderer.
///
/// Constructed once per extraction call and never mutated afterwards.
/// `invoice_number`, `invoice_date`, `currency`, the three totals, and both
/// addresses are always present (as text, possibly empty) in a successful
/// extraction — only a document that is not CII/ZUGFeRD at all fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    /// Guideline parameter identifier, verbatim (ZUGFeRD/Factur-X URN).
    pub version: Option<String>,
    /// Profile label resolved from the business-process parameter;
    /// unrecognized codes pass through verbatim.
    pub profile: Option<String>,

    /// BG-4: Seller.
    pub seller: Address,
    /// BG-7: Buyer.
    pub buyer: Address,

    /// BT-32: Seller tax number (scheme FC, Steuernummer).
    pub seller_tax_id: Option<String>,
    /// BT-31: Seller VAT identifier (scheme VA).
    pub seller_vat_id: Option<String>,
    /// BT-41: Seller contact point name.
    pub seller_contact_name: Option<String>,
    /// BT-42: Seller contact telephone.
    pub seller_contact_phone: Option<String>,
    /// BT-43: Seller contact email.
    pub seller_contact_email: Option<String>,

    /// BT-48: Buyer VAT identifier.
    pub buyer_vat_id: Option<String>,
    /// BT-10: Buyer reference (Leitweg-ID for XRechnung).
    pub buyer_reference: Option<String>,

    /// BT-1: Invoice number.
    pub invoice_number: String,
    /// BT-2: Issue date, reformatted to `DD.MM.YYYY` for format code 102.
    pub invoice_date: String,
    /// BT-9: Payment due date.
    pub due_date: Option<String>,
    /// BT-72: Actual delivery date.
    pub delivery_date: Option<String>,
    /// BT-13: Purchase order reference.
    pub order_reference: Option<String>,

    /// BT-5: Invoice currency code (ISO 4217).
    pub currency: String,

    /// BG-25: Invoice lines, in document order.
    pub line_items: Vec<LineItem>,

    /// BT-109: Total net amount.
    pub total_net: String,
    /// BT-110: Total tax amount.
    pub total_tax: String,
    /// BT-112: Total gross amount.
    pub total_gross: String,

    /// BG-23: VAT breakdown, one entry per declared category/rate pair;
    /// empty when the document declares none.
    pub tax_breakdown: Vec<TaxBreakdown>,

    /// BT-20: Payment terms free text.
    pub payment_terms: Option<String>,
    /// BT-81: Payment means label (resolved from the UNTDID 4461 code).
    pub payment_means: Option<String>,
    /// BT-85: Payment account name.
    pub bank_name: Option<String>,
    /// BT-84: IBAN.
    pub iban: Option<String>,
    /// BT-86: BIC.
    pub bic: Option<String>,
    /// BT-83: Payment reference (Verwendungszweck).
    pub payment_reference: Option<String>,

    /// BT-22: Free-text notes, newline-joined; absent when every note in
    /// the source is empty.
    pub notes: Option<String>,
}

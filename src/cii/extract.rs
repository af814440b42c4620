use crate::core::{Address, ExtractError, InvoiceData, LineItem, TaxBreakdown};
use crate::tree::{Node, as_sequence};

use super::codes;

/// The recognized CII root element (namespace prefix already stripped).
const ROOT_ELEMENT: &str = "CrossIndustryInvoice";

const TRANSACTION: &str = "SupplyChainTradeTransaction";
const AGREEMENT: &str = "SupplyChainTradeTransaction.ApplicableHeaderTradeAgreement";
const DELIVERY: &str = "SupplyChainTradeTransaction.ApplicableHeaderTradeDelivery";
const SETTLEMENT: &str = "SupplyChainTradeTransaction.ApplicableHeaderTradeSettlement";

/// Check whether `xml` is a CII/ZUGFeRD document.
///
/// True iff the text parses as XML and the tree carries the
/// `CrossIndustryInvoice` root. Syntax errors yield `false`, never an error.
pub fn is_zugferd_xml(xml: &str) -> bool {
    Node::parse(xml)
        .map(|tree| tree.get(ROOT_ELEMENT).is_some())
        .unwrap_or(false)
}

/// Map a CII XML document to the flat [`InvoiceData`] model.
///
/// Fails only on XML that cannot be tokenized ([`ExtractError::Malformed`])
/// or on a document without the CII root ([`ExtractError::Unrecognized`]).
/// Partial or incomplete invoices extract with empty/absent fields.
pub fn extract_invoice(xml: &str) -> Result<InvoiceData, ExtractError> {
    let tree = Node::parse(xml)?;
    let root = tree.get(ROOT_ELEMENT).ok_or(ExtractError::Unrecognized)?;

    let version = opt(root.text_at(
        "ExchangedDocumentContext.GuidelineSpecifiedDocumentContextParameter.ID",
    ));
    let profile = opt(root.text_at(
        "ExchangedDocumentContext.BusinessProcessSpecifiedDocumentContextParameter.ID",
    ))
    .map(|code| codes::profile_label(&code).to_string());

    let seller_party = root.get(&format!("{AGREEMENT}.SellerTradeParty"));
    let buyer_party = root.get(&format!("{AGREEMENT}.BuyerTradeParty"));

    let (seller_vat_id, seller_tax_id) = seller_tax_registrations(seller_party);
    let buyer_vat_id = buyer_vat_registration(buyer_party);

    let payment_means_code =
        root.text_at(&format!("{SETTLEMENT}.SpecifiedTradeSettlementPaymentMeans.TypeCode"));

    Ok(InvoiceData {
        version,
        profile,
        seller: party_address(seller_party),
        buyer: party_address(buyer_party),
        seller_tax_id,
        seller_vat_id,
        seller_contact_name: opt(text_of(seller_party, "DefinedTradeContact.PersonName")),
        seller_contact_phone: opt(text_of(
            seller_party,
            "DefinedTradeContact.TelephoneUniversalCommunication.CompleteNumber",
        )),
        seller_contact_email: opt(text_of(
            seller_party,
            "DefinedTradeContact.EmailURIUniversalCommunication.URIID",
        )),
        buyer_vat_id,
        buyer_reference: opt(root.text_at(&format!("{AGREEMENT}.BuyerReference"))),
        invoice_number: root.text_at("ExchangedDocument.ID"),
        invoice_date: format_date(&root.text_at("ExchangedDocument.IssueDateTime.DateTimeString")),
        due_date: opt(root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradePaymentTerms.DueDateDateTime.DateTimeString"
        )))
        .map(|raw| format_date(&raw)),
        delivery_date: opt(root.text_at(&format!(
            "{DELIVERY}.ActualDeliverySupplyChainEvent.OccurrenceDateTime.DateTimeString"
        )))
        .map(|raw| format_date(&raw)),
        order_reference: opt(
            root.text_at(&format!("{AGREEMENT}.BuyerOrderReferencedDocument.IssuerAssignedID"))
        ),
        currency: root.text_at(&format!("{SETTLEMENT}.InvoiceCurrencyCode")),
        line_items: line_items(root),
        total_net: root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementHeaderMonetarySummation.TaxBasisTotalAmount"
        )),
        total_tax: root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementHeaderMonetarySummation.TaxTotalAmount"
        )),
        total_gross: root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementHeaderMonetarySummation.GrandTotalAmount"
        )),
        tax_breakdown: tax_breakdown(root),
        payment_terms: opt(
            root.text_at(&format!("{SETTLEMENT}.SpecifiedTradePaymentTerms.Description"))
        ),
        payment_means: opt(payment_means_code)
            .map(|code| codes::payment_means_label(&code).to_string()),
        bank_name: opt(root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementPaymentMeans.PayeePartyCreditorFinancialAccount.AccountName"
        ))),
        iban: opt(root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementPaymentMeans.PayeePartyCreditorFinancialAccount.IBANID"
        ))),
        bic: opt(root.text_at(&format!(
            "{SETTLEMENT}.SpecifiedTradeSettlementPaymentMeans.PayeeSpecifiedCreditorFinancialInstitution.BICID"
        ))),
        payment_reference: opt(root.text_at(&format!("{SETTLEMENT}.PaymentReference"))),
        notes: notes(root),
    })
}

/// Rewrite an 8-digit `YYYYMMDD` date (CII format code 102) to `DD.MM.YYYY`.
/// Anything else passes through unchanged.
pub fn format_date(raw: &str) -> String {
    let bytes = raw.as_bytes();
    if bytes.len() == 8 && bytes.iter().all(u8::is_ascii_digit) {
        format!("{}.{}.{}", &raw[6..8], &raw[4..6], &raw[0..4])
    } else {
        raw.to_string()
    }
}

fn opt(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn text_of(node: Option<&Node>, path: &str) -> String {
    node.map(|n| n.text_at(path)).unwrap_or_default()
}

fn party_address(party: Option<&Node>) -> Address {
    Address {
        name: text_of(party, "Name"),
        street: text_of(party, "PostalTradeAddress.LineOne"),
        postal_code: text_of(party, "PostalTradeAddress.PostcodeCode"),
        city: text_of(party, "PostalTradeAddress.CityName"),
        country: text_of(party, "PostalTradeAddress.CountryID"),
    }
}

/// Seller tax registrations: one left-to-right scan, the last registration
/// per scheme wins. Scheme VA is the VAT identifier, FC the tax number.
fn seller_tax_registrations(party: Option<&Node>) -> (Option<String>, Option<String>) {
    let mut vat_id = None;
    let mut tax_id = None;
    for reg in as_sequence(party.and_then(|p| p.get("SpecifiedTaxRegistration"))) {
        match reg.text_at("ID.@_schemeID").as_str() {
            "VA" => vat_id = Some(reg.text_at("ID")),
            "FC" => tax_id = Some(reg.text_at("ID")),
            _ => {}
        }
    }
    (vat_id.and_then(opt), tax_id.and_then(opt))
}

/// Buyer VAT id: the first VA registration wins. The first/last asymmetry
/// against the seller scan is intentional, kept for compatibility with the
/// reference behavior.
fn buyer_vat_registration(party: Option<&Node>) -> Option<String> {
    let mut vat_id = None;
    for reg in as_sequence(party.and_then(|p| p.get("SpecifiedTaxRegistration"))) {
        if vat_id.is_none() && reg.text_at("ID.@_schemeID") == "VA" {
            vat_id = Some(reg.text_at("ID"));
        }
    }
    vat_id.and_then(opt)
}

fn line_items(root: &Node) -> Vec<LineItem> {
    as_sequence(root.get(&format!("{TRANSACTION}.IncludedSupplyChainTradeLineItem")))
        .into_iter()
        .map(|item| LineItem {
            position: item.text_at("AssociatedDocumentLineDocument.LineID"),
            description: item.text_at("SpecifiedTradeProduct.Name"),
            quantity: item.text_at("SpecifiedLineTradeDelivery.BilledQuantity"),
            unit: item.text_at("SpecifiedLineTradeDelivery.BilledQuantity.@_unitCode"),
            unit_price: item
                .text_at("SpecifiedLineTradeAgreement.NetPriceProductTradePrice.ChargeAmount"),
            tax_rate: line_tax_rate(item),
            line_total: item.text_at(
                "SpecifiedLineTradeSettlement.SpecifiedTradeSettlementLineMonetarySummation.LineTotalAmount",
            ),
        })
        .collect()
}

/// Line tax rate: the single-element path first, then the first element of
/// the materialized `ApplicableTradeTax` sequence. A stated rate gets a
/// `%` suffix; an absent rate stays empty — "not stated" is not `0%`.
fn line_tax_rate(item: &Node) -> String {
    let mut rate = item.text_at("SpecifiedLineTradeSettlement.ApplicableTradeTax.RateApplicablePercent");
    if rate.is_empty() {
        rate = as_sequence(item.get("SpecifiedLineTradeSettlement.ApplicableTradeTax"))
            .first()
            .map(|tax| tax.text_at("RateApplicablePercent"))
            .unwrap_or_default();
    }
    if rate.is_empty() {
        rate
    } else {
        format!("{rate}%")
    }
}

fn tax_breakdown(root: &Node) -> Vec<TaxBreakdown> {
    as_sequence(root.get(&format!("{SETTLEMENT}.ApplicableTradeTax")))
        .into_iter()
        .map(|tax| TaxBreakdown {
            rate: format!("{}%", tax.text_at("RateApplicablePercent")),
            basis: tax.text_at("BasisAmount"),
            tax_amount: tax.text_at("CalculatedAmount"),
        })
        .collect()
}

fn notes(root: &Node) -> Option<String> {
    let joined = as_sequence(root.get("ExchangedDocument.IncludedNote"))
        .into_iter()
        .map(|note| note.text_at("Content"))
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    opt(joined)
}

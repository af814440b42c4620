use criterion::{Criterion, black_box, criterion_group, criterion_main};

use zugferd_extract::{extract_invoice, is_zugferd_xml};

/// Build a CII invoice with `n` line items.
fn invoice_xml(n: usize) -> String {
    let mut lines = String::new();
    for i in 1..=n {
        lines.push_str(&format!(
            r#"<ram:IncludedSupplyChainTradeLineItem>
              <ram:AssociatedDocumentLineDocument><ram:LineID>{i}</ram:LineID></ram:AssociatedDocumentLineDocument>
              <ram:SpecifiedTradeProduct><ram:Name>Service item {i}</ram:Name></ram:SpecifiedTradeProduct>
              <ram:SpecifiedLineTradeAgreement>
                <ram:NetPriceProductTradePrice><ram:ChargeAmount>120.00</ram:ChargeAmount></ram:NetPriceProductTradePrice>
              </ram:SpecifiedLineTradeAgreement>
              <ram:SpecifiedLineTradeDelivery><ram:BilledQuantity unitCode="HUR">5</ram:BilledQuantity></ram:SpecifiedLineTradeDelivery>
              <ram:SpecifiedLineTradeSettlement>
                <ram:ApplicableTradeTax><ram:RateApplicablePercent>19</ram:RateApplicablePercent></ram:ApplicableTradeTax>
                <ram:SpecifiedTradeSettlementLineMonetarySummation><ram:LineTotalAmount>600.00</ram:LineTotalAmount></ram:SpecifiedTradeSettlementLineMonetarySummation>
              </ram:SpecifiedLineTradeSettlement>
            </ram:IncludedSupplyChainTradeLineItem>"#
        ));
    }
    format!(
        r#"<rsm:CrossIndustryInvoice xmlns:rsm="urn:r" xmlns:ram="urn:a" xmlns:udt="urn:u">
          <rsm:ExchangedDocument>
            <ram:ID>BENCH-001</ram:ID>
            <ram:IssueDateTime><udt:DateTimeString format="102">20240615</udt:DateTimeString></ram:IssueDateTime>
          </rsm:ExchangedDocument>
          <rsm:SupplyChainTradeTransaction>
            {lines}
            <ram:ApplicableHeaderTradeAgreement>
              <ram:SellerTradeParty><ram:Name>Benchmark GmbH</ram:Name></ram:SellerTradeParty>
              <ram:BuyerTradeParty><ram:Name>Kunde AG</ram:Name></ram:BuyerTradeParty>
            </ram:ApplicableHeaderTradeAgreement>
            <ram:ApplicableHeaderTradeSettlement>
              <ram:InvoiceCurrencyCode>EUR</ram:InvoiceCurrencyCode>
              <ram:SpecifiedTradeSettlementHeaderMonetarySummation>
                <ram:TaxBasisTotalAmount>6000.00</ram:TaxBasisTotalAmount>
                <ram:TaxTotalAmount currencyID="EUR">1140.00</ram:TaxTotalAmount>
                <ram:GrandTotalAmount>7140.00</ram:GrandTotalAmount>
              </ram:SpecifiedTradeSettlementHeaderMonetarySummation>
            </ram:ApplicableHeaderTradeSettlement>
          </rsm:SupplyChainTradeTransaction>
        </rsm:CrossIndustryInvoice>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let small = invoice_xml(10);
    let large = invoice_xml(1000);

    c.bench_function("extract_invoice_10_lines", |b| {
        b.iter(|| extract_invoice(black_box(&small)).unwrap())
    });

    c.bench_function("extract_invoice_1000_lines", |b| {
        b.iter(|| extract_invoice(black_box(&large)).unwrap())
    });

    c.bench_function("is_zugferd_xml_10_lines", |b| {
        b.iter(|| is_zugferd_xml(black_box(&small)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ncf_validation::core::*;
use ncf_validation::verify::build_request;

fn ecf_document() -> FiscalDocument {
    FiscalDocument {
        document_type: DocumentType::InInvoice,
        fiscal_number: Some("E310000000001".into()),
        is_electronic: true,
        security_code: Some("Ab12Cd".into()),
        owner_company_tax_id: Some("131793916".into()),
        counterparty_tax_id: Some("00113918205".into()),
        country_code: "DO".into(),
        uses_fiscal_documents: true,
        numbering: NumberingSource::Manual,
    }
}

fn bench_format_checks(c: &mut Criterion) {
    c.bench_function("validate_taxpayer_id", |b| {
        b.iter(|| validate_taxpayer_id(black_box("00113918205")))
    });

    c.bench_function("validate_fiscal_number_format", |b| {
        b.iter(|| validate_fiscal_number_format(black_box("E310000000001")))
    });

    c.bench_function("parse_fiscal_number", |b| {
        b.iter(|| FiscalNumber::parse(black_box("B0100000001")).map(|n| n.kind_name()))
    });
}

fn bench_build_request(c: &mut Criterion) {
    let doc = ecf_document();
    let policy = ValidationPolicy::new(ValidationTarget::Both).with_electronic_validation(true);

    c.bench_function("build_request_ecf", |b| {
        b.iter(|| build_request(black_box(&doc), black_box(&policy)))
    });

    c.bench_function("is_eligible_for_validation", |b| {
        b.iter(|| is_eligible_for_validation(black_box(&doc), black_box(&policy)))
    });
}

criterion_group!(benches, bench_format_checks, bench_build_request);
criterion_main!(benches);

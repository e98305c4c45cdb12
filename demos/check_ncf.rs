//! Check NCFs from the command line against a verification endpoint.
//!
//! ```sh
//! NCF_API_URL=https://ncf.example.do/validate NCF_API_TOKEN=... \
//!   RUST_LOG=ncf_validation=debug cargo run --example check_ncf -- 131793916 B0100000001
//! ```

use ncf_validation::core::*;
use ncf_validation::verify::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((rnc, numbers)) = args.split_first() else {
        eprintln!("usage: check_ncf <rnc> <ncf>...");
        std::process::exit(2);
    };

    // ── 1. Local format checks (no network) ───────────────────────────
    println!("=== Format ===");
    match validate_taxpayer_id(rnc) {
        Ok(()) => println!("  {rnc} => valid RNC/Cédula"),
        Err(e) => println!("  {rnc} => INVALID: {e}"),
    }
    for ncf in numbers {
        match FiscalNumber::parse(ncf) {
            Ok(n) => println!(
                "  {n} => series={:?}, type={} ({})",
                n.series(),
                n.type_code(),
                n.kind_name().unwrap_or("unknown kind")
            ),
            Err(e) => println!("  {ncf} => INVALID: {e}"),
        }
    }

    // ── 2. Posting gate against the configured endpoint ───────────────
    println!("\n=== Verification ===");
    let validator = match NcfValidator::from_params(&EnvParams) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("  {e}");
            std::process::exit(1);
        }
    };

    let documents: Vec<FiscalDocument> = numbers
        .iter()
        .map(|ncf| FiscalDocument {
            document_type: DocumentType::InInvoice,
            fiscal_number: Some(ncf.clone()),
            is_electronic: false,
            security_code: None,
            owner_company_tax_id: Some(rnc.clone()),
            counterparty_tax_id: None,
            country_code: DOMINICAN_REPUBLIC.into(),
            uses_fiscal_documents: true,
            numbering: NumberingSource::Manual,
        })
        .collect();
    let policy = ValidationPolicy::new(ValidationTarget::Both);

    match validator.post_with(&documents, &policy, |docs| docs.len()) {
        Ok(n) => println!("  {n} document(s) may be posted"),
        Err(e) if e.is_input_error() => println!("  fix the document first: {e}"),
        Err(e) => println!("  posting blocked: {e}"),
    }
}

use std::collections::BTreeMap;

use ncf_validation::core::*;
use ncf_validation::verify::build_request;

fn doc(document_type: DocumentType) -> FiscalDocument {
    FiscalDocument {
        document_type,
        fiscal_number: Some("B0100000001".into()),
        is_electronic: false,
        security_code: None,
        owner_company_tax_id: Some("131793916".into()),
        counterparty_tax_id: Some("00113918205".into()),
        country_code: "DO".into(),
        uses_fiscal_documents: true,
        numbering: NumberingSource::Internal,
    }
}

// ---------------------------------------------------------------------------
// Taxpayer ids
// ---------------------------------------------------------------------------

#[test]
fn rnc_and_cedula_lengths() {
    assert!(validate_taxpayer_id("123456789").is_ok());
    assert!(validate_taxpayer_id("12345678901").is_ok());
    assert!(validate_taxpayer_id("1234567890").is_err());
}

#[test]
fn taxpayer_id_with_spaces_rejected() {
    assert!(validate_taxpayer_id(" 123456789").is_err());
    assert!(validate_taxpayer_id("123 456 789").is_err());
}

#[test]
fn taxpayer_error_keeps_value() {
    match validate_taxpayer_id("abc") {
        Err(NcfError::InvalidTaxpayerId { value }) => assert_eq!(value, "abc"),
        other => panic!("unexpected: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Fiscal numbers
// ---------------------------------------------------------------------------

#[test]
fn series_and_length_not_cross_checked() {
    // An 11-character E-series and a 13-character B-series both pass.
    assert!(validate_fiscal_number_format("E3100000001").is_ok());
    assert!(validate_fiscal_number_format("B010000000001").is_ok());
}

#[test]
fn non_ascii_counted_by_character() {
    // 11 characters, 12 bytes.
    assert!(validate_fiscal_number_format("B01000000ñ1").is_ok());
}

#[test]
fn kind_names() {
    let cases = [
        ("B0200000001", Some("Factura de Consumo")),
        ("B0400000001", Some("Nota de Crédito")),
        ("B1500000001", Some("Comprobante Gubernamental")),
        ("E340000000001", Some("Nota de Crédito Electrónica")),
        ("E990000000001", None),
    ];
    for (ncf, expected) in cases {
        assert_eq!(FiscalNumber::parse(ncf).unwrap().kind_name(), expected, "{ncf}");
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

#[test]
fn taxpayer_id_follows_direction() {
    assert_eq!(doc(DocumentType::OutInvoice).taxpayer_id(), Some("00113918205"));
    assert_eq!(doc(DocumentType::OutRefund).taxpayer_id(), Some("00113918205"));
    assert_eq!(doc(DocumentType::InInvoice).taxpayer_id(), Some("131793916"));
    assert_eq!(doc(DocumentType::InRefund).taxpayer_id(), Some("131793916"));
}

#[test]
fn buyer_id_is_the_other_side() {
    assert_eq!(doc(DocumentType::OutInvoice).buyer_taxpayer_id(), Some("131793916"));
    assert_eq!(doc(DocumentType::InRefund).buyer_taxpayer_id(), Some("00113918205"));
}

#[test]
fn request_for_customer_invoice() {
    let req = build_request(
        &doc(DocumentType::OutInvoice),
        &ValidationPolicy::new(ValidationTarget::Both),
    )
    .unwrap();
    assert_eq!(req.fiscal_number, "B0100000001");
    assert_eq!(req.taxpayer_id, "00113918205");
    assert!(!req.is_electronic_check());
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_from_btreemap() {
    let mut params = BTreeMap::new();
    params.insert(PARAM_API_URL.to_string(), " https://api.example.do/ncf ".to_string());
    params.insert(PARAM_API_TOKEN.to_string(), "tok".to_string());

    let cfg = NcfApiConfig::from_params(&params).unwrap();
    assert_eq!(cfg.url, "https://api.example.do/ncf");
    assert_eq!(cfg.token.as_deref(), Some("tok"));
}

#[test]
fn config_error_message_names_parameter() {
    let params: BTreeMap<String, String> = BTreeMap::new();
    let err = NcfApiConfig::from_params(&params).unwrap_err();
    assert!(err.to_string().contains("ncf.api.url"));
}

#[test]
fn fiscal_document_deserializes_from_host_json() {
    let json = r#"{
        "document_type": "in_refund",
        "fiscal_number": "B0400000012",
        "is_electronic": false,
        "security_code": null,
        "owner_company_tax_id": "131793916",
        "counterparty_tax_id": "123456789",
        "country_code": "DO",
        "uses_fiscal_documents": true,
        "numbering": "manual"
    }"#;
    let d: FiscalDocument = serde_json::from_str(json).unwrap();
    assert_eq!(d.document_type, DocumentType::InRefund);
    assert_eq!(d.numbering, NumberingSource::Manual);
    assert_eq!(d.taxpayer_id(), Some("131793916"));
}

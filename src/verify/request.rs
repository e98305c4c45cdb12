//! Verification request payload.

use serde::Serialize;

use crate::core::{
    FiscalDocument, NcfError, ValidationPolicy, validate_fiscal_number_format,
    validate_security_code, validate_taxpayer_id,
};

/// Query parameters sent to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    /// NCF / e-NCF being verified.
    #[serde(rename = "ncf")]
    pub fiscal_number: String,
    /// RNC/Cédula of the taxpayer side.
    #[serde(rename = "rnc")]
    pub taxpayer_id: String,
    /// RNC/Cédula of the buyer side (e-CF only).
    #[serde(rename = "buyerRNC", skip_serializing_if = "Option::is_none")]
    pub buyer_taxpayer_id: Option<String>,
    /// e-CF security code (e-CF only).
    #[serde(rename = "securityCode", skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
}

impl VerificationRequest {
    /// Whether the request carries the e-CF fields.
    pub fn is_electronic_check(&self) -> bool {
        self.security_code.is_some()
    }

    /// Parameters as `(name, value)` pairs, in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("ncf", self.fiscal_number.as_str()),
            ("rnc", self.taxpayer_id.as_str()),
        ];
        if let Some(ref buyer) = self.buyer_taxpayer_id {
            pairs.push(("buyerRNC", buyer.as_str()));
        }
        if let Some(ref code) = self.security_code {
            pairs.push(("securityCode", code.as_str()));
        }
        pairs
    }
}

/// Format-check a document and compose its verification request.
///
/// Checks run in this order: taxpayer id, fiscal number, and for e-CF
/// documents under a policy requiring electronic validation, the security
/// code and buyer id. The first failure is returned.
///
/// # Errors
///
/// `InvalidTaxpayerId`, `InvalidFiscalNumberFormat` or `InvalidSecurityCode`.
pub fn build_request(
    document: &FiscalDocument,
    policy: &ValidationPolicy,
) -> Result<VerificationRequest, NcfError> {
    let taxpayer_id = document.taxpayer_id().unwrap_or_default();
    validate_taxpayer_id(taxpayer_id)?;

    let fiscal_number = document.fiscal_number.as_deref().unwrap_or_default();
    validate_fiscal_number_format(fiscal_number)?;

    let mut request = VerificationRequest {
        fiscal_number: fiscal_number.to_string(),
        taxpayer_id: taxpayer_id.to_string(),
        buyer_taxpayer_id: None,
        security_code: None,
    };

    if document.is_electronic && policy.require_electronic_validation {
        let code = validate_security_code(document.security_code.as_deref())?;
        let buyer = document.buyer_taxpayer_id().unwrap_or_default();
        validate_taxpayer_id(buyer)?;
        request.buyer_taxpayer_id = Some(buyer.to_string());
        request.security_code = Some(code.to_string());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DocumentType, NumberingSource, ValidationTarget};

    fn ecf_bill() -> FiscalDocument {
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

    #[test]
    fn electronic_request_uses_both_sides() {
        let policy = ValidationPolicy::new(ValidationTarget::Both).with_electronic_validation(true);
        let req = build_request(&ecf_bill(), &policy).unwrap();
        assert_eq!(req.taxpayer_id, "131793916");
        assert_eq!(req.buyer_taxpayer_id.as_deref(), Some("00113918205"));
        assert_eq!(req.security_code.as_deref(), Some("Ab12Cd"));
        assert!(req.is_electronic_check());
    }

    #[test]
    fn electronic_fields_skipped_without_policy() {
        let policy = ValidationPolicy::new(ValidationTarget::Both);
        let req = build_request(&ecf_bill(), &policy).unwrap();
        assert!(req.buyer_taxpayer_id.is_none());
        assert!(req.security_code.is_none());
    }

    #[test]
    fn serializes_with_endpoint_names() {
        let policy = ValidationPolicy::new(ValidationTarget::Both).with_electronic_validation(true);
        let req = build_request(&ecf_bill(), &policy).unwrap();
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"ncf\":\"E310000000001\""));
        assert!(json.contains("\"rnc\":\"131793916\""));
        assert!(json.contains("\"buyerRNC\":\"00113918205\""));
        assert!(json.contains("\"securityCode\":\"Ab12Cd\""));
    }

    #[test]
    fn legacy_query_has_two_pairs() {
        let req = VerificationRequest {
            fiscal_number: "B0100000001".into(),
            taxpayer_id: "123456789".into(),
            buyer_taxpayer_id: None,
            security_code: None,
        };
        assert_eq!(
            req.query_pairs(),
            vec![("ncf", "B0100000001"), ("rnc", "123456789")]
        );
    }

    #[test]
    fn missing_fiscal_number_is_format_error() {
        let mut doc = ecf_bill();
        doc.fiscal_number = None;
        let err = build_request(&doc, &ValidationPolicy::default()).unwrap_err();
        assert!(matches!(err, NcfError::InvalidFiscalNumberFormat { .. }));
    }
}

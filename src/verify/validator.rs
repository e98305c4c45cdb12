//! The NCF posting gate.

use super::request::build_request;
use super::response::VerificationResult;
use super::transport::Transport;
use crate::core::{
    FiscalDocument, FiscalNumber, NcfError, ValidationPolicy, is_eligible_for_validation,
};

/// Status the service returns when the access token is rejected.
const STATUS_FORBIDDEN: u16 = 403;

/// Checks fiscal documents against the verification service before posting.
///
/// Documents are checked one at a time, in order. The validator holds no
/// state besides its transport.
#[derive(Debug, Clone)]
pub struct NcfValidator<T> {
    transport: T,
}

impl<T: Transport> NcfValidator<T> {
    /// Create a validator sending requests through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Verify one document's NCF with the service.
    ///
    /// All format checks run before the request is sent. A 403 response maps
    /// to `AuthenticationFailed`; any other response is decoded, and a body
    /// that cannot be decoded yields `valid == false`.
    ///
    /// # Errors
    ///
    /// Input errors from [`build_request`], `ServiceUnavailable` when the
    /// service cannot be reached, `AuthenticationFailed` on 403, or
    /// `Transport` for other transport failures.
    pub fn check_ncf(
        &self,
        document: &FiscalDocument,
        policy: &ValidationPolicy,
    ) -> Result<VerificationResult, NcfError> {
        let request = build_request(document, policy)?;
        let kind = FiscalNumber::parse(&request.fiscal_number)
            .ok()
            .and_then(|n| n.kind_name());

        tracing::debug!(
            ncf = %request.fiscal_number,
            rnc = %request.taxpayer_id,
            electronic = request.is_electronic_check(),
            kind = kind.unwrap_or("unknown"),
            "requesting NCF verification"
        );

        let response = self.transport.send(&request).inspect_err(|e| {
            if let NcfError::ServiceUnavailable(reason) = e {
                tracing::warn!(
                    ncf = %request.fiscal_number,
                    %reason,
                    "NCF verification service unreachable"
                );
            }
        })?;

        if response.status == STATUS_FORBIDDEN {
            tracing::warn!(
                ncf = %request.fiscal_number,
                "NCF verification service rejected the access token"
            );
            return Err(NcfError::AuthenticationFailed);
        }
        if !(200..300).contains(&response.status) {
            tracing::warn!(
                ncf = %request.fiscal_number,
                status = response.status,
                "unexpected status from NCF verification service"
            );
        }

        let result = VerificationResult::from_body(&response.body);
        tracing::info!(ncf = %request.fiscal_number, valid = result.valid, "NCF verified");
        Ok(result)
    }

    /// Check every eligible document, stopping at the first failure.
    ///
    /// Ineligible documents are skipped without contacting the service.
    /// Documents after a failing one are left unchecked.
    ///
    /// # Errors
    ///
    /// `NcfValidationFailed` naming the first rejected NCF, or the first
    /// error returned by [`check_ncf`](Self::check_ncf).
    pub fn gate_posting(
        &self,
        documents: &[FiscalDocument],
        policy: &ValidationPolicy,
    ) -> Result<(), NcfError> {
        for document in documents {
            if !is_eligible_for_validation(document, policy) {
                tracing::debug!(
                    ncf = document.fiscal_number.as_deref().unwrap_or(""),
                    "document not subject to NCF validation, skipping"
                );
                continue;
            }

            let result = self.check_ncf(document, policy)?;
            if !result.valid {
                let fiscal_number = document.fiscal_number.clone().unwrap_or_default();
                tracing::warn!(ncf = %fiscal_number, "NCF rejected, blocking posting");
                return Err(NcfError::NcfValidationFailed { fiscal_number });
            }
        }
        Ok(())
    }

    /// Run [`gate_posting`](Self::gate_posting), then hand the batch to the
    /// host's finalization step.
    ///
    /// `finalize` is not called when the gate fails.
    pub fn post_with<R>(
        &self,
        documents: &[FiscalDocument],
        policy: &ValidationPolicy,
        finalize: impl FnOnce(&[FiscalDocument]) -> R,
    ) -> Result<R, NcfError> {
        self.gate_posting(documents, policy)?;
        Ok(finalize(documents))
    }
}

#[cfg(feature = "http")]
impl NcfValidator<super::http::HttpTransport> {
    /// Create a validator over HTTP, configured from the host's parameters.
    pub fn from_params(params: &impl crate::core::ParamStore) -> Result<Self, NcfError> {
        Ok(Self::new(super::http::HttpTransport::from_params(params)?))
    }
}

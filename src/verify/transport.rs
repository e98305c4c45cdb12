use super::request::VerificationRequest;
use crate::core::NcfError;

/// Status and body of one verification response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Create a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a verification request to the service.
///
/// Implementations perform exactly one blocking round-trip per call and map
/// unreachable-service failures (connect, DNS, timeout) to
/// `NcfError::ServiceUnavailable`. Status codes are returned as-is; the
/// validator interprets them.
pub trait Transport {
    /// Send `request` and return the raw response.
    fn send(&self, request: &VerificationRequest) -> Result<RawResponse, NcfError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &VerificationRequest) -> Result<RawResponse, NcfError> {
        (**self).send(request)
    }
}

use thiserror::Error;

/// Errors that block an NCF validation or the posting of a fiscal document.
///
/// Every variant is meant to be surfaced to whoever triggered posting, so the
/// messages are written for the end user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NcfError {
    /// The RNC/Cédula is missing, non-numeric, or not 9 or 11 digits long.
    #[error("a valid RNC/Cédula is required to request a NCF validation (got '{value}')")]
    InvalidTaxpayerId {
        /// The rejected value (empty when the document had none).
        value: String,
    },

    /// The fiscal number is missing or does not look like an NCF / e-NCF.
    #[error("NCF '{value}' has an invalid format, please fix it and try again")]
    InvalidFiscalNumberFormat {
        /// The rejected value (empty when the document had none).
        value: String,
    },

    /// The e-CF security code is missing, blank, or not 6 characters long.
    #[error("e-CF security code must be a 6 character alphanumeric value")]
    InvalidSecurityCode,

    /// The verification service could not be reached.
    #[error("could not establish communication with the NCF verification service, try again later: {0}")]
    ServiceUnavailable(String),

    /// The verification service rejected the configured access token (HTTP 403).
    #[error("could not authenticate with the NCF verification service")]
    AuthenticationFailed,

    /// The verification service reported the NCF as not valid.
    #[error("cannot validate fiscal invoice because {fiscal_number} is not a valid NCF")]
    NcfValidationFailed {
        /// The fiscal number that was rejected.
        fiscal_number: String,
    },

    /// Missing or malformed `ncf.api.*` configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Any other transport failure (TLS, malformed HTTP, body read errors).
    #[error("transport error: {0}")]
    Transport(String),
}

impl NcfError {
    /// Whether the error was raised before any request left the process.
    ///
    /// Input errors are the caller's to fix; the others depend on the service.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTaxpayerId { .. }
                | Self::InvalidFiscalNumberFormat { .. }
                | Self::InvalidSecurityCode
        )
    }
}

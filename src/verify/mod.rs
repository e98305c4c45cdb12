//! NCF verification against the external service and the posting gate.
//!
//! # Example
//!
//! ```ignore
//! use ncf_validation::core::*;
//! use ncf_validation::verify::*;
//!
//! let validator = NcfValidator::from_params(&EnvParams)?;
//! let policy = ValidationPolicy::new(ValidationTarget::Both);
//!
//! // Blocks posting if any eligible document carries a rejected NCF.
//! validator.post_with(&documents, &policy, |docs| host.post(docs))?;
//! ```

#[cfg(feature = "http")]
mod http;
mod request;
mod response;
mod transport;
mod validator;

#[cfg(feature = "http")]
pub use http::{ACCESS_TOKEN_HEADER, HttpTransport};
pub use request::{VerificationRequest, build_request};
pub use response::{VerificationResult, parse_verdict};
pub use transport::{RawResponse, Transport};
pub use validator::NcfValidator;

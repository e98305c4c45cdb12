//! # ncf-validation
//!
//! Posting gate for Dominican Republic fiscal documents: checks the NCF
//! (Número de Comprobante Fiscal) of invoices and credit notes against an
//! external verification service before the host lets them be posted.
//!
//! Format errors in the RNC/Cédula, the NCF or the e-CF security code are
//! caught locally and never reach the service.
//!
//! ## Quick Start
//!
//! ```rust
//! use ncf_validation::core::*;
//!
//! assert!(validate_taxpayer_id("131793916").is_ok());
//! assert!(validate_fiscal_number_format("B0100000001").is_ok());
//! assert!(validate_fiscal_number_format("X0100000001").is_err());
//!
//! let ncf = FiscalNumber::parse("E310000000001").unwrap();
//! assert_eq!(ncf.series(), Series::Electronic);
//! assert_eq!(ncf.type_code(), "31");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, format checks, eligibility, verification gate |
//! | `http` (default) | Blocking `reqwest` transport for the verification endpoint |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod verify;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

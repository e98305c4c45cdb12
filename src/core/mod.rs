//! Fiscal document types, format checks, and validation eligibility.
//!
//! Everything here is pure: no network access and no host state beyond the
//! values passed in.

mod config;
mod eligibility;
mod error;
pub mod format;
mod roles;
mod types;

pub use config::*;
pub use eligibility::*;
pub use error::*;
pub use format::{
    FiscalNumber, Series, validate_fiscal_number_format, validate_security_code,
    validate_taxpayer_id,
};
pub use roles::*;
pub use types::*;

use serde::{Deserialize, Serialize};

use super::roles::PartyRole;

/// ISO 3166-1 alpha-2 code of the Dominican Republic.
pub const DOMINICAN_REPUBLIC: &str = "DO";

/// Host move type of a fiscal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Plain journal entry.
    Entry,
    /// Customer invoice.
    OutInvoice,
    /// Customer credit note.
    OutRefund,
    /// Vendor bill.
    InInvoice,
    /// Vendor credit note.
    InRefund,
}

impl DocumentType {
    /// Vendor bills and vendor credit notes.
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::InInvoice | Self::InRefund)
    }
}

/// Where a document's fiscal number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingSource {
    /// Generated by the host's own NCF sequence.
    Internal,
    /// Typed in by a user or imported from the counterparty.
    Manual,
}

/// Read model of an invoice or credit note, filled in by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalDocument {
    /// Host move type.
    pub document_type: DocumentType,
    /// The NCF or e-NCF (e.g. "B0100000001", "E310000000001").
    pub fiscal_number: Option<String>,
    /// Whether this is an electronic fiscal receipt (e-CF).
    pub is_electronic: bool,
    /// e-CF security code, only set on electronic documents.
    pub security_code: Option<String>,
    /// RNC of the company that owns the document.
    pub owner_company_tax_id: Option<String>,
    /// RNC/Cédula of the customer or vendor.
    pub counterparty_tax_id: Option<String>,
    /// Country of the owning company (ISO 3166-1 alpha-2).
    pub country_code: String,
    /// Whether the document uses the managed fiscal numbering scheme.
    pub uses_fiscal_documents: bool,
    /// Origin of the fiscal number.
    pub numbering: NumberingSource,
}

impl FiscalDocument {
    /// Resolve a party role to the tax id stored for that side.
    pub fn tax_id_for(&self, role: PartyRole) -> Option<&str> {
        match role {
            PartyRole::OwnerCompany => self.owner_company_tax_id.as_deref(),
            PartyRole::Counterparty => self.counterparty_tax_id.as_deref(),
        }
    }

    /// The tax id sent as `rnc` for this document's direction.
    pub fn taxpayer_id(&self) -> Option<&str> {
        self.tax_id_for(self.document_type.party_roles().taxpayer)
    }

    /// The tax id sent as `buyerRNC` for electronic documents.
    pub fn buyer_taxpayer_id(&self) -> Option<&str> {
        self.tax_id_for(self.document_type.party_roles().buyer)
    }

    /// Whether the owning company is in the Dominican Republic.
    pub fn is_dominican(&self) -> bool {
        self.country_code.eq_ignore_ascii_case(DOMINICAN_REPUBLIC)
    }
}

/// Which documents a company wants checked against the verification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationTarget {
    /// Never validate.
    #[default]
    None,
    /// Only documents numbered by the host's own sequence.
    Internal,
    /// Only documents carrying a manually supplied number.
    External,
    /// Every fiscal document.
    Both,
}

/// Per-company NCF validation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Which documents require validation.
    pub validation_target: ValidationTarget,
    /// Whether e-CF documents must also pass security-code verification.
    pub require_electronic_validation: bool,
}

impl ValidationPolicy {
    /// Create a policy with electronic validation disabled.
    pub fn new(validation_target: ValidationTarget) -> Self {
        Self {
            validation_target,
            require_electronic_validation: false,
        }
    }

    /// Require e-CF security-code verification.
    pub fn with_electronic_validation(mut self, enabled: bool) -> Self {
        self.require_electronic_validation = enabled;
        self
    }
}

//! Which side of a document is the taxpayer and which is the buyer.

use serde::{Deserialize, Serialize};

use super::types::DocumentType;

/// One side of a fiscal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    /// The company that owns the document in the host.
    OwnerCompany,
    /// The customer or vendor on the document.
    Counterparty,
}

impl PartyRole {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::OwnerCompany => Self::Counterparty,
            Self::Counterparty => Self::OwnerCompany,
        }
    }
}

/// Roles used when composing a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRoles {
    /// Side whose id is sent as `rnc`.
    pub taxpayer: PartyRole,
    /// Side whose id is sent as `buyerRNC` for e-CF checks.
    pub buyer: PartyRole,
}

impl DocumentType {
    /// Direction mapping for this move type.
    ///
    /// Vendor documents take the owner company as taxpayer; everything else
    /// takes the counterparty. The buyer is always the other side.
    pub fn party_roles(&self) -> PartyRoles {
        let taxpayer = if self.is_vendor() {
            PartyRole::OwnerCompany
        } else {
            PartyRole::Counterparty
        };
        PartyRoles {
            taxpayer,
            buyer: taxpayer.opposite(),
        }
    }
}

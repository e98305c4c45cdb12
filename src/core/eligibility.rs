use super::types::{FiscalDocument, NumberingSource, ValidationPolicy, ValidationTarget};

/// Decide whether a document must be checked against the verification service.
///
/// Only Dominican documents using managed fiscal numbering are considered.
/// The policy target then selects by numbering source:
///
/// | Target     | Checked documents         |
/// |------------|---------------------------|
/// | `None`     | none                      |
/// | `Internal` | host-generated numbers    |
/// | `External` | manually supplied numbers |
/// | `Both`     | all                       |
pub fn is_eligible_for_validation(document: &FiscalDocument, policy: &ValidationPolicy) -> bool {
    if !document.is_dominican() || !document.uses_fiscal_documents {
        return false;
    }
    match policy.validation_target {
        ValidationTarget::None => false,
        ValidationTarget::Both => true,
        ValidationTarget::Internal => document.numbering == NumberingSource::Internal,
        ValidationTarget::External => document.numbering == NumberingSource::Manual,
    }
}

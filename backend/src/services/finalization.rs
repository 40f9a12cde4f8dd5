//! Finalization rule applied to every inspection update.
//!
//! Recording a verdict (`Sim`, `Não` or `Condicional`) in
//! `a_peca_foi_aprovada` also stamps `data_finalizacao` with the server's
//! current time in the same statement. Any other value, `Avaliação`
//! included, leaves the timestamp alone.

use crate::models::{
    fields::{FieldError, InspectionFields},
    inspection::{ApprovalStatus, APPROVAL_COLUMN, FINALIZED_AT_COLUMN},
};

/// An update request after the finalization rule ran.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionUpdate {
    pub fields: InspectionFields,
    pub stamp_finalized: bool,
}

impl InspectionUpdate {
    pub fn prepare(mut fields: InspectionFields) -> Result<Self, FieldError> {
        let stamp_finalized = records_verdict(&fields);
        if stamp_finalized {
            // The server clock wins over a client-supplied timestamp.
            fields.remove(FINALIZED_AT_COLUMN);
        }
        if fields.is_empty() && !stamp_finalized {
            return Err(FieldError::Empty);
        }
        Ok(Self {
            fields,
            stamp_finalized,
        })
    }
}

/// True when the approval column carries one of the three verdict literals.
pub fn records_verdict(fields: &InspectionFields) -> bool {
    fields
        .get(APPROVAL_COLUMN)
        .and_then(|value| value.as_str())
        .and_then(|value| ApprovalStatus::from_db(Some(value)))
        .is_some_and(|status| status.is_verdict())
}

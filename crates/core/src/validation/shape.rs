//! Group transaction shape rules.
//!
//! Each group type carries exactly one kind of sub-transaction payload.

use crate::ledger::{GroupTransactionInput, GroupTransactionType};

use super::error::TxError;

/// Checks that `group` populates only the slot `transaction_type` permits, and
/// that the permitted slot is populated.
///
/// An empty `feeTransactions` list counts as unpopulated.
///
/// # Errors
///
/// `WrongTransactionKind` naming the first foreign slot in declaration order,
/// otherwise `MissingField` naming the permitted slot.
pub fn validate_shape(
    transaction_type: GroupTransactionType,
    group: &GroupTransactionInput,
) -> Result<(), TxError> {
    let permitted = transaction_type.permitted_field();

    if let Some(field) = group.populated_fields().find(|field| *field != permitted) {
        return Err(TxError::WrongTransactionKind {
            transaction_type,
            field,
        });
    }

    if !group.is_populated(permitted) {
        return Err(TxError::MissingField {
            field: permitted.as_str(),
        });
    }

    Ok(())
}

//! Validation rules for proposed ledger changes.
//!
//! # Modules
//!
//! - `base` - Structural and referential checks shared by every transaction
//! - `role` - Cash, fixed-income, interest, and fee rules
//! - `shape` - Group transaction payload shape
//! - `asset` - Fixed-income asset admission
//! - `service` - Orchestration over a whole group transaction
//! - `error` - Rejection taxonomy

pub mod asset;
pub mod base;
pub mod error;
pub mod role;
pub mod service;
pub mod shape;

#[cfg(test)]
mod base_props;
#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod role_props;
#[cfg(test)]
mod shape_props;

pub use asset::validate_fixed_income_asset;
pub use base::{validate_base_transaction, validate_base_transaction_update};
pub use error::{EntityKind, TxError};
pub use role::{
    validate_cash_transaction, validate_fee_transaction, validate_fixed_income_transaction,
    validate_interest_transaction,
};
pub use service::TransactionValidator;
pub use shape::validate_shape;

/// Returns the value if it is set and not blank.
pub(crate) fn present<T: AsRef<str>>(value: Option<&T>) -> Option<&T> {
    value.filter(|v| !v.as_ref().trim().is_empty())
}

//! Validation error types.
//!
//! Every validator fails fast with exactly one of these. The reducer decides
//! how a rejection surfaces to the user; this module only classifies.

use rust_decimal::Decimal;
use thiserror::Error;
use rwa_shared::types::{AccountId, TransactionId};

use crate::ledger::{GroupTransactionType, SubTransactionField};
use crate::portfolio::AssetRole;

/// The collection a dangling reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Portfolio asset.
    Asset,
    /// Own account of a transaction.
    Account,
    /// Counterparty account of a transaction.
    CounterPartyAccount,
    /// Special-purpose vehicle.
    Spv,
    /// Fixed-income instrument type.
    FixedIncomeType,
    /// Logged transaction.
    Transaction,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Account => write!(f, "Account"),
            Self::CounterPartyAccount => write!(f, "Counter party account"),
            Self::Spv => write!(f, "SPV"),
            Self::FixedIncomeType => write!(f, "Fixed income type"),
            Self::Transaction => write!(f, "Transaction"),
        }
    }
}

/// Errors raised when a proposed transaction or asset is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    // ========== Structural Errors ==========
    /// A required field is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A date-bearing field does not parse.
    #[error("{field} must be a valid date")]
    InvalidDate {
        /// Wire name of the field.
        field: &'static str,
    },

    // ========== Referential Errors ==========
    /// A referenced id does not exist.
    #[error("{entity} with id {id} does not exist")]
    NotFound {
        /// The collection that was searched.
        entity: EntityKind,
        /// The dangling id.
        id: String,
    },

    /// A transaction id is already in the log.
    #[error("Transaction with id {0} already exists")]
    DuplicateId(TransactionId),

    // ========== Role Errors ==========
    /// The resolved asset has the wrong role for this transaction kind.
    #[error("Expected {expected} asset")]
    WrongAssetRole {
        /// The role the transaction kind requires.
        expected: AssetRole,
    },

    /// The counterparty fails a role-specific identity check.
    #[error("Invalid counter party: {0}")]
    InvalidCounterparty(&'static str),

    /// The counterparty is not a known service provider.
    #[error("Counter party with id {0} must be a known service provider")]
    UnknownCounterparty(AccountId),

    /// The amount violates the sign convention of the transaction kind.
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        /// The offending amount.
        amount: Decimal,
        /// The violated constraint.
        reason: &'static str,
    },

    // ========== Shape Errors ==========
    /// A group transaction carries a sub-transaction its type does not permit.
    #[error("{transaction_type} transaction cannot carry {field}")]
    WrongTransactionKind {
        /// The declared type.
        transaction_type: GroupTransactionType,
        /// The offending slot.
        field: SubTransactionField,
    },
}

impl TxError {
    pub(crate) fn not_found(entity: EntityKind, id: impl AsRef<str>) -> Self {
        Self::NotFound {
            entity,
            id: id.as_ref().to_string(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::WrongAssetRole { .. } => "WRONG_ASSET_ROLE",
            Self::InvalidCounterparty(_) => "INVALID_COUNTERPARTY",
            Self::UnknownCounterparty(_) => "UNKNOWN_COUNTERPARTY",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::WrongTransactionKind { .. } => "WRONG_TRANSACTION_KIND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - malformed or rule-violating input
            Self::MissingField { .. }
            | Self::InvalidDate { .. }
            | Self::WrongAssetRole { .. }
            | Self::InvalidCounterparty(_)
            | Self::UnknownCounterparty(_)
            | Self::InvalidAmount { .. }
            | Self::WrongTransactionKind { .. } => 400,

            // 404 Not Found
            Self::NotFound { .. } => 404,

            // 409 Conflict
            Self::DuplicateId(_) => 409,
        }
    }
}

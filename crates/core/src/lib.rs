//! Ledger-transaction validation engine for real-world-asset portfolios.
//!
//! This crate contains pure validation logic with ZERO I/O. Every check is a
//! function of an immutable ledger snapshot and the proposed change.
//!
//! # Modules
//!
//! - `portfolio` - Assets and the reference data they point at
//! - `ledger` - Transactions, the ledger state and its indexed snapshot
//! - `validation` - Base, role-specific, shape, and asset admission rules
//! - `date` - Parsing of date-bearing document fields

pub mod date;
pub mod ledger;
pub mod portfolio;
pub mod validation;

pub use ledger::{
    BaseTransaction, GroupTransaction, GroupTransactionInput, GroupTransactionKind,
    GroupTransactionType, LedgerSnapshot, RealWorldAssetsState, SubTransactionField,
};
pub use portfolio::{Account, Asset, AssetRole, Cash, FixedIncome, FixedIncomeType, ServiceProvider, Spv};
pub use validation::{EntityKind, TransactionValidator, TxError};

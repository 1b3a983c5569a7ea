//! Ledger transactions and state.
//!
//! This module implements the ledger side of the data model:
//! - Base transactions and the group transactions that carry them
//! - The real-world-assets state aggregate
//! - An indexed, read-only snapshot the validators run against

pub mod snapshot;
pub mod state;
pub mod transaction;

pub use snapshot::{LedgerSnapshot, ServiceProviderIndex};
pub use state::RealWorldAssetsState;
pub use transaction::{
    BaseTransaction, GroupTransaction, GroupTransactionInput, GroupTransactionKind,
    GroupTransactionType, SubTransactionField,
};

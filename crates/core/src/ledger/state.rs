//! The real-world-assets ledger state.

use serde::{Deserialize, Serialize};
use rwa_shared::types::AccountId;

use super::transaction::GroupTransaction;
use crate::portfolio::{Account, Asset, FixedIncomeType, ServiceProvider, Spv};

/// The aggregate owned by the surrounding document.
///
/// The engine only ever reads it; mutation belongs to the reducer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealWorldAssetsState {
    /// Ledger accounts.
    pub accounts: Vec<Account>,
    /// Designated counterparty for principal draws and returns. Need not be listed in `accounts`.
    pub principal_lender_account_id: Option<AccountId>,
    /// Special-purpose vehicles.
    pub spvs: Vec<Spv>,
    /// Service providers.
    pub fee_types: Vec<ServiceProvider>,
    /// Fixed-income instrument classes.
    pub fixed_income_types: Vec<FixedIncomeType>,
    /// Assets.
    pub portfolio: Vec<Asset>,
    /// Committed transaction log.
    pub transactions: Vec<GroupTransaction>,
}

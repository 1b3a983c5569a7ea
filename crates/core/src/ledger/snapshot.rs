//! Read-only, indexed view over a ledger state.

use std::collections::{HashMap, HashSet};

use rwa_shared::types::AccountId;

use super::state::RealWorldAssetsState;
use crate::portfolio::{Account, Asset, FixedIncomeType, ServiceProvider, Spv};

/// Indexes a collection by key. The first entry wins on duplicate keys; blank keys are skipped.
fn index_by<'a, T, K, F>(items: &'a [T], key: F) -> HashMap<&'a str, &'a T>
where
    K: AsRef<str> + 'a,
    F: Fn(&'a T) -> Option<&'a K>,
{
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        if let Some(k) = key(item)
            .map(<K as AsRef<str>>::as_ref)
            .filter(|k| !k.trim().is_empty())
        {
            index.entry(k).or_insert(item);
        }
    }
    index
}

/// Service providers keyed by their own id and by their settlement account id.
#[derive(Debug, Default)]
pub struct ServiceProviderIndex<'a> {
    by_id: HashMap<&'a str, &'a ServiceProvider>,
    by_account_id: HashMap<&'a str, &'a ServiceProvider>,
}

impl<'a> ServiceProviderIndex<'a> {
    /// Builds both indexes.
    #[must_use]
    pub fn new(providers: &'a [ServiceProvider]) -> Self {
        Self {
            by_id: index_by(providers, |p| Some(&p.id)),
            by_account_id: index_by(providers, |p| p.account_id.as_ref()),
        }
    }

    /// Looks a provider up by provider id, then by account id.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a ServiceProvider> {
        self.by_id
            .get(key)
            .or_else(|| self.by_account_id.get(key))
            .copied()
    }

    /// Returns true if `key` is a provider id or a provider's account id.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_id.contains_key(key) || self.by_account_id.contains_key(key)
    }
}

/// An immutable snapshot of the ledger with O(1) lookups.
///
/// Borrows the state, so the engine can never observe or cause a mutation
/// while validating.
#[derive(Debug)]
pub struct LedgerSnapshot<'a> {
    state: &'a RealWorldAssetsState,
    accounts: HashMap<&'a str, &'a Account>,
    assets: HashMap<&'a str, &'a Asset>,
    spvs: HashMap<&'a str, &'a Spv>,
    fixed_income_types: HashMap<&'a str, &'a FixedIncomeType>,
    transaction_ids: HashSet<&'a str>,
    service_providers: ServiceProviderIndex<'a>,
}

impl<'a> LedgerSnapshot<'a> {
    /// Indexes `state`.
    #[must_use]
    pub fn new(state: &'a RealWorldAssetsState) -> Self {
        let mut transaction_ids = HashSet::new();
        for group in &state.transactions {
            transaction_ids.insert(group.id.as_str());
            transaction_ids.extend(
                group
                    .transactions()
                    .iter()
                    .filter_map(|tx| tx.id.as_ref())
                    .filter(|id| !id.is_blank())
                    .map(|id| id.as_str()),
            );
        }

        Self {
            state,
            accounts: index_by(&state.accounts, |a| Some(&a.id)),
            assets: index_by(&state.portfolio, |a| Some(a.id())),
            spvs: index_by(&state.spvs, |s| Some(&s.id)),
            fixed_income_types: index_by(&state.fixed_income_types, |t| Some(&t.id)),
            transaction_ids,
            service_providers: ServiceProviderIndex::new(&state.fee_types),
        }
    }

    /// Returns the underlying state.
    #[must_use]
    pub fn state(&self) -> &'a RealWorldAssetsState {
        self.state
    }

    /// Looks up an account.
    #[must_use]
    pub fn account(&self, id: &str) -> Option<&'a Account> {
        self.accounts.get(id).copied()
    }

    /// Looks up an asset.
    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&'a Asset> {
        self.assets.get(id).copied()
    }

    /// Looks up an SPV.
    #[must_use]
    pub fn spv(&self, id: &str) -> Option<&'a Spv> {
        self.spvs.get(id).copied()
    }

    /// Looks up a fixed-income type.
    #[must_use]
    pub fn fixed_income_type(&self, id: &str) -> Option<&'a FixedIncomeType> {
        self.fixed_income_types.get(id).copied()
    }

    /// Returns true if a group or sub-transaction with this id is in the log.
    #[must_use]
    pub fn has_transaction(&self, id: &str) -> bool {
        self.transaction_ids.contains(id)
    }

    /// Looks up a service provider by provider id or account id.
    #[must_use]
    pub fn service_provider(&self, key: &str) -> Option<&'a ServiceProvider> {
        self.service_providers.get(key)
    }

    /// Returns true if `key` identifies a service provider.
    #[must_use]
    pub fn is_known_service_provider(&self, key: &str) -> bool {
        self.service_providers.contains(key)
    }

    /// Returns the principal lender account, if one is designated.
    #[must_use]
    pub fn principal_lender_account_id(&self) -> Option<&'a AccountId> {
        self.state
            .principal_lender_account_id
            .as_ref()
            .filter(|id| !id.is_blank())
    }
}

impl<'a> From<&'a RealWorldAssetsState> for LedgerSnapshot<'a> {
    fn from(state: &'a RealWorldAssetsState) -> Self {
        Self::new(state)
    }
}

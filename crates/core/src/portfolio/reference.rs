//! Reference entities that transactions and assets point at.

use serde::{Deserialize, Serialize};
use rwa_shared::types::{AccountId, FixedIncomeTypeId, ServiceProviderId, SpvId};

/// A ledger account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account id.
    pub id: AccountId,
    /// External reference (wallet address, bank account number).
    #[serde(default)]
    pub reference: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: Option<String>,
}

/// A special-purpose vehicle holding assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spv {
    /// SPV id.
    pub id: SpvId,
    /// Legal name.
    #[serde(default)]
    pub name: String,
}

/// A class of fixed-income instrument (T-bill, corporate bond, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIncomeType {
    /// Type id.
    pub id: FixedIncomeTypeId,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A counterparty eligible to receive or pay interest and fees.
///
/// A provider is recognised either by its own id or by the id of the ledger
/// account it settles through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    /// Provider id; `""` for providers known only by their account.
    #[serde(default = "ServiceProviderId::unset")]
    pub id: ServiceProviderId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Kind of fee charged (custody, management, ...).
    #[serde(default)]
    pub fee_type: String,
    /// Settlement account.
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

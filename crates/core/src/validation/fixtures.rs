//! Builders shared by the validation tests.

use rust_decimal::Decimal;
use rwa_shared::types::{
    AccountId, AssetId, FixedIncomeTypeId, ServiceProviderId, SpvId, TransactionId,
};

use crate::ledger::{BaseTransaction, GroupTransaction, GroupTransactionKind, RealWorldAssetsState};
use crate::portfolio::{
    Account, Asset, Cash, FixedIncome, FixedIncomeType, ServiceProvider, Spv,
};

pub(crate) const PRINCIPAL_LENDER: &str = "pl1";
pub(crate) const PROVIDER_ID: &str = "sp1";
pub(crate) const PROVIDER_ACCOUNT: &str = "sp-account";
pub(crate) const CASH_ASSET: &str = "cash1";
pub(crate) const FIXED_INCOME_ASSET: &str = "fi1";
pub(crate) const LOGGED_GROUP: &str = "g1";
pub(crate) const LOGGED_TX: &str = "tx1";
pub(crate) const ENTRY_TIME: &str = "2024-01-15T10:30:00Z";

pub(crate) fn cash_asset(id: &str) -> Asset {
    Asset::Cash(Cash {
        id: AssetId::from(id),
        spv_id: Some(SpvId::from("spv1")),
        currency: "USD".to_string(),
        balance: Decimal::ZERO,
    })
}

pub(crate) fn fixed_income(id: &str) -> FixedIncome {
    FixedIncome {
        id: AssetId::from(id),
        fixed_income_type_id: FixedIncomeTypeId::from("t-bill"),
        name: "US T-Bill".to_string(),
        spv_id: SpvId::from("spv1"),
        maturity: "2026-11-30".to_string(),
        purchase_date: "2026-05-30".to_string(),
        notional: Decimal::new(1_000_000, 0),
        purchase_price: Decimal::new(975, 3),
        purchase_proceeds: Decimal::new(975_000, 0),
        total_discount: Decimal::new(25_000, 0),
        market_value: Decimal::ZERO,
        annualized_yield: Decimal::ZERO,
        realized_surplus: Decimal::ZERO,
        total_surplus: Decimal::ZERO,
        isin: None,
        cusip: None,
        coupon: None,
        current_value: None,
    }
}

pub(crate) fn fixed_income_asset(id: &str) -> Asset {
    Asset::FixedIncome(fixed_income(id))
}

pub(crate) fn account(id: &str) -> Account {
    Account {
        id: AccountId::from(id),
        reference: String::new(),
        label: None,
    }
}

pub(crate) fn provider(id: &str, account_id: Option<&str>) -> ServiceProvider {
    ServiceProvider {
        id: ServiceProviderId::from(id),
        name: "Custodian".to_string(),
        fee_type: "custody".to_string(),
        account_id: account_id.map(AccountId::from),
    }
}

/// A complete transaction against `asset_id`.
pub(crate) fn transaction(id: &str, asset_id: &str, amount: Decimal) -> BaseTransaction {
    BaseTransaction {
        id: Some(TransactionId::from(id)),
        asset_id: Some(AssetId::from(asset_id)),
        amount: Some(amount),
        entry_time: Some(ENTRY_TIME.to_string()),
        ..Default::default()
    }
}

/// `transaction` with a counterparty.
pub(crate) fn transaction_with_counterparty(
    id: &str,
    asset_id: &str,
    amount: Decimal,
    counterparty: &str,
) -> BaseTransaction {
    BaseTransaction {
        counter_party_account_id: Some(AccountId::from(counterparty)),
        ..transaction(id, asset_id, amount)
    }
}

/// A state with one of everything and a single logged principal draw.
pub(crate) fn ledger_state() -> RealWorldAssetsState {
    RealWorldAssetsState {
        accounts: vec![
            account("acc1"),
            account(PRINCIPAL_LENDER),
            account(PROVIDER_ACCOUNT),
        ],
        principal_lender_account_id: Some(AccountId::from(PRINCIPAL_LENDER)),
        spvs: vec![Spv {
            id: SpvId::from("spv1"),
            name: "SPV One".to_string(),
        }],
        fee_types: vec![provider(PROVIDER_ID, Some(PROVIDER_ACCOUNT))],
        fixed_income_types: vec![FixedIncomeType {
            id: FixedIncomeTypeId::from("t-bill"),
            name: "T-Bill".to_string(),
        }],
        portfolio: vec![cash_asset(CASH_ASSET), fixed_income_asset(FIXED_INCOME_ASSET)],
        transactions: vec![GroupTransaction::new(
            TransactionId::from(LOGGED_GROUP),
            GroupTransactionKind::PrincipalDraw(transaction_with_counterparty(
                LOGGED_TX,
                CASH_ASSET,
                Decimal::new(100, 0),
                PRINCIPAL_LENDER,
            )),
        )],
    }
}

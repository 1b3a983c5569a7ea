//! Role-specific transaction rules.
//!
//! Each transaction kind moves a specific asset class with a specific kind
//! of counterparty:
//!
//! | Kind | Asset | Counterparty | Amount |
//! |---|---|---|---|
//! | Cash | cash | principal lender | any |
//! | Fixed income | fixed income | any | any |
//! | Interest | fixed income | service provider | > 0 |
//! | Fee | fixed income | service provider | < 0 |
//!
//! Interest receipts are inflows and fee payments outflows, hence the
//! opposite sign conventions.

use rust_decimal::Decimal;

use crate::ledger::{BaseTransaction, LedgerSnapshot};
use crate::portfolio::{Asset, AssetRole};

use super::error::{EntityKind, TxError};
use super::present;

/// Sign convention for service-provider movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountSign {
    Positive,
    Negative,
}

impl AmountSign {
    fn admits(self, amount: Decimal) -> bool {
        match self {
            Self::Positive => amount > Decimal::ZERO,
            Self::Negative => amount < Decimal::ZERO,
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Self::Positive => "must be positive",
            Self::Negative => "must be negative",
        }
    }
}

fn resolve_asset<'a>(
    snapshot: &LedgerSnapshot<'a>,
    tx: &BaseTransaction,
) -> Result<&'a Asset, TxError> {
    let asset_id =
        present(tx.asset_id.as_ref()).ok_or(TxError::MissingField { field: "assetId" })?;
    snapshot
        .asset(asset_id.as_str())
        .ok_or_else(|| TxError::not_found(EntityKind::Asset, asset_id))
}

fn require_role(asset: &Asset, expected: AssetRole) -> Result<(), TxError> {
    if asset.role() == expected {
        Ok(())
    } else {
        Err(TxError::WrongAssetRole { expected })
    }
}

/// Validates a principal draw or return.
///
/// The counterparty must be the principal lender and the asset must be cash.
///
/// # Errors
///
/// `InvalidCounterparty` or `WrongAssetRole`, checked in that order.
pub fn validate_cash_transaction(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    let is_principal_lender = matches!(
        (
            present(tx.counter_party_account_id.as_ref()),
            snapshot.principal_lender_account_id(),
        ),
        (Some(counterparty), Some(lender)) if counterparty == lender
    );
    if !is_principal_lender {
        return Err(TxError::InvalidCounterparty("must be principal lender"));
    }

    require_role(resolve_asset(snapshot, tx)?, AssetRole::Cash)
}

/// Validates an asset purchase or sale. The asset must be fixed income.
///
/// # Errors
///
/// `WrongAssetRole` if the asset is cash.
pub fn validate_fixed_income_transaction(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    require_role(resolve_asset(snapshot, tx)?, AssetRole::FixedIncome)
}

/// Validates an interest draw or return.
///
/// # Errors
///
/// `WrongAssetRole`, `MissingField`, `UnknownCounterparty`, or
/// `InvalidAmount` when the amount is not positive.
pub fn validate_interest_transaction(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    validate_service_provider_movement(snapshot, tx, AmountSign::Positive)
}

/// Validates a fee payment.
///
/// # Errors
///
/// `WrongAssetRole`, `MissingField`, `UnknownCounterparty`, or
/// `InvalidAmount` when the amount is not negative.
pub fn validate_fee_transaction(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    validate_service_provider_movement(snapshot, tx, AmountSign::Negative)
}

fn validate_service_provider_movement(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
    sign: AmountSign,
) -> Result<(), TxError> {
    require_role(resolve_asset(snapshot, tx)?, AssetRole::FixedIncome)?;

    let counterparty = present(tx.counter_party_account_id.as_ref()).ok_or(
        TxError::MissingField {
            field: "counterPartyAccount",
        },
    )?;
    if !snapshot.is_known_service_provider(counterparty.as_str()) {
        return Err(TxError::UnknownCounterparty(counterparty.clone()));
    }

    let amount = tx.amount.ok_or(TxError::MissingField { field: "amount" })?;
    if !sign.admits(amount) {
        return Err(TxError::InvalidAmount {
            amount,
            reason: sign.reason(),
        });
    }

    Ok(())
}

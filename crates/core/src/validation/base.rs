//! Structural and referential checks shared by every transaction kind.

use crate::date::is_valid_timestamp;
use crate::ledger::{BaseTransaction, LedgerSnapshot};

use super::error::{EntityKind, TxError};
use super::present;

/// Validates a transaction about to be appended to the log.
///
/// Checks, in order, stopping at the first failure:
/// 1. `id` is set and not already in the log
/// 2. `assetId` is set and resolves in the portfolio
/// 3. `amount` is set (zero counts as set)
/// 4. `entryTime` is set and is a valid date
/// 5. `tradeTime` and `settlementTime`, when set, are valid dates
/// 6. `accountId` and `counterPartyAccountId`, when set, resolve in the accounts
///
/// # Errors
///
/// Returns the first violated rule as a `TxError`.
pub fn validate_base_transaction(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    let id = present(tx.id.as_ref()).ok_or(TxError::MissingField { field: "id" })?;
    if snapshot.has_transaction(id.as_str()) {
        return Err(TxError::DuplicateId(id.clone()));
    }

    validate_body(snapshot, tx)
}

/// Validates an edit to a transaction that is already in the log.
///
/// Same checks as [`validate_base_transaction`], except the id must already
/// exist instead of being new.
///
/// # Errors
///
/// Returns the first violated rule as a `TxError`.
pub fn validate_base_transaction_update(
    snapshot: &LedgerSnapshot<'_>,
    tx: &BaseTransaction,
) -> Result<(), TxError> {
    let id = present(tx.id.as_ref()).ok_or(TxError::MissingField { field: "id" })?;
    if !snapshot.has_transaction(id.as_str()) {
        return Err(TxError::not_found(EntityKind::Transaction, id));
    }

    validate_body(snapshot, tx)
}

fn validate_body(snapshot: &LedgerSnapshot<'_>, tx: &BaseTransaction) -> Result<(), TxError> {
    let asset_id =
        present(tx.asset_id.as_ref()).ok_or(TxError::MissingField { field: "assetId" })?;
    if snapshot.asset(asset_id.as_str()).is_none() {
        return Err(TxError::not_found(EntityKind::Asset, asset_id));
    }

    if tx.amount.is_none() {
        return Err(TxError::MissingField { field: "amount" });
    }

    let entry_time =
        present(tx.entry_time.as_ref()).ok_or(TxError::MissingField { field: "entryTime" })?;
    check_date(entry_time, "entryTime")?;
    if let Some(trade_time) = present(tx.trade_time.as_ref()) {
        check_date(trade_time, "tradeTime")?;
    }
    if let Some(settlement_time) = present(tx.settlement_time.as_ref()) {
        check_date(settlement_time, "settlementTime")?;
    }

    if let Some(account_id) = present(tx.account_id.as_ref())
        && snapshot.account(account_id.as_str()).is_none()
    {
        return Err(TxError::not_found(EntityKind::Account, account_id));
    }
    if let Some(counterparty) = present(tx.counter_party_account_id.as_ref())
        && snapshot.account(counterparty.as_str()).is_none()
    {
        return Err(TxError::not_found(EntityKind::CounterPartyAccount, counterparty));
    }

    Ok(())
}

fn check_date(value: &str, field: &'static str) -> Result<(), TxError> {
    if is_valid_timestamp(value) {
        Ok(())
    } else {
        Err(TxError::InvalidDate { field })
    }
}

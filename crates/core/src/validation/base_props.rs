//! Property-based tests for the base transaction rules.
//!
//! Feature: transaction-validation, Property 1: Base Transaction Rules

use proptest::prelude::*;
use rust_decimal::Decimal;
use rwa_shared::types::{AssetId, TransactionId};

use super::base::validate_base_transaction;
use super::error::{EntityKind, TxError};
use super::fixtures::{CASH_ASSET, FIXED_INCOME_ASSET, LOGGED_GROUP, LOGGED_TX, ledger_state, transaction};
use crate::ledger::{BaseTransaction, LedgerSnapshot};

/// Strategy to generate any amount, zero and negatives included.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an id that is not in the fixture state.
fn fresh_id() -> impl Strategy<Value = String> {
    "new-[a-z0-9]{1,12}"
}

/// Strategy to pick one of the portfolio assets.
fn known_asset() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(CASH_ASSET), Just(FIXED_INCOME_ASSET)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1.1: Logged ids are rejected as duplicates.
    ///
    /// *For any* transaction reusing a group or sub-transaction id from the
    /// log, validation SHALL reject it with `DuplicateId`.
    #[test]
    fn prop_logged_id_rejected(
        logged in prop_oneof![Just(LOGGED_GROUP), Just(LOGGED_TX)],
        asset in known_asset(),
        amount in any_amount(),
    ) {
        let state = ledger_state();
        let tx = transaction(logged, asset, amount);

        let result = validate_base_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert_eq!(result, Err(TxError::DuplicateId(TransactionId::from(logged))));
    }

    /// Property 1.2: Unknown assets are rejected.
    ///
    /// *For any* fresh transaction whose asset is not in the portfolio,
    /// validation SHALL reject it with `NotFound(Asset)`.
    #[test]
    fn prop_unknown_asset_rejected(
        id in fresh_id(),
        asset in "ghost-[a-z0-9]{1,12}",
        amount in any_amount(),
    ) {
        let state = ledger_state();
        let tx = BaseTransaction {
            asset_id: Some(AssetId::from(asset.as_str())),
            ..transaction(&id, CASH_ASSET, amount)
        };

        let result = validate_base_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert_eq!(result, Err(TxError::not_found(EntityKind::Asset, &asset)));
    }

    /// Property 1.3: Complete transactions are accepted for any amount.
    ///
    /// *For any* fresh transaction against a known asset, validation SHALL
    /// accept it regardless of the amount's sign.
    #[test]
    fn prop_complete_transaction_accepted(
        id in fresh_id(),
        asset in known_asset(),
        amount in any_amount(),
    ) {
        let state = ledger_state();
        let tx = transaction(&id, asset, amount);

        let result = validate_base_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert!(result.is_ok(), "Complete transaction should be accepted, got: {:?}", result);
    }

    /// Property 1.4: Validation is deterministic.
    ///
    /// *For any* transaction, validating twice against the same snapshot
    /// SHALL produce the same outcome.
    #[test]
    fn prop_validation_is_idempotent(
        id in prop_oneof![fresh_id(), Just(LOGGED_TX.to_string())],
        asset in prop_oneof![Just("ghost"), known_asset()],
        amount in any_amount(),
        entry_time in prop_oneof![Just("2024-01-15"), Just("invalid date")],
    ) {
        let state = ledger_state();
        let snapshot = LedgerSnapshot::new(&state);
        let tx = BaseTransaction {
            entry_time: Some(entry_time.to_string()),
            ..transaction(&id, asset, amount)
        };

        let first = validate_base_transaction(&snapshot, &tx);
        let second = validate_base_transaction(&snapshot, &tx);
        prop_assert_eq!(first, second);
    }
}

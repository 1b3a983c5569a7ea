//! Property-based tests for the role-specific rules.
//!
//! Feature: transaction-validation, Property 2: Role Rules

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::TxError;
use super::fixtures::{
    CASH_ASSET, FIXED_INCOME_ASSET, PRINCIPAL_LENDER, PROVIDER_ACCOUNT, PROVIDER_ID, ledger_state,
    transaction_with_counterparty,
};
use super::role::{validate_cash_transaction, validate_fee_transaction, validate_interest_transaction};
use crate::ledger::LedgerSnapshot;

/// Strategy to generate any amount, zero and negatives included.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick either key a service provider is known by.
fn provider_key() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(PROVIDER_ID), Just(PROVIDER_ACCOUNT)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 2.1: Interest accepts exactly the positive amounts.
    ///
    /// *For any* interest transaction with a known provider and a
    /// fixed-income asset, validation SHALL accept it iff amount > 0.
    #[test]
    fn prop_interest_sign(amount in any_amount(), provider in provider_key()) {
        let state = ledger_state();
        let tx = transaction_with_counterparty("t", FIXED_INCOME_ASSET, amount, provider);

        let result = validate_interest_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert_eq!(result.is_ok(), amount > Decimal::ZERO, "amount {} got {:?}", amount, result);
        if result.is_err() {
            let is_invalid_amount = matches!(result, Err(TxError::InvalidAmount { .. }));
            prop_assert!(is_invalid_amount);
        }
    }

    /// Property 2.2: Fees accept exactly the negative amounts.
    ///
    /// *For any* fee transaction with a known provider and a fixed-income
    /// asset, validation SHALL accept it iff amount < 0.
    #[test]
    fn prop_fee_sign(amount in any_amount(), provider in provider_key()) {
        let state = ledger_state();
        let tx = transaction_with_counterparty("t", FIXED_INCOME_ASSET, amount, provider);

        let result = validate_fee_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert_eq!(result.is_ok(), amount < Decimal::ZERO, "amount {} got {:?}", amount, result);
    }

    /// Property 2.3: Cash transactions accept exactly the principal lender.
    ///
    /// *For any* counterparty, a cash transaction against a cash asset
    /// SHALL be accepted iff the counterparty is the principal lender.
    #[test]
    fn prop_cash_counterparty(
        counterparty in prop_oneof![
            Just(PRINCIPAL_LENDER.to_string()),
            Just(PROVIDER_ACCOUNT.to_string()),
            "[a-z0-9]{1,8}",
        ],
        amount in any_amount(),
    ) {
        let state = ledger_state();
        let tx = transaction_with_counterparty("t", CASH_ASSET, amount, &counterparty);

        let result = validate_cash_transaction(&LedgerSnapshot::new(&state), &tx);
        prop_assert_eq!(result.is_ok(), counterparty == PRINCIPAL_LENDER);
    }
}

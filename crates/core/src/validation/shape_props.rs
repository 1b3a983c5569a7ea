//! Property-based tests for the group transaction shape rule.
//!
//! Feature: transaction-validation, Property 3: Group Shape

use proptest::prelude::*;
use rwa_shared::types::TransactionId;

use super::error::TxError;
use super::shape::validate_shape;
use crate::ledger::{BaseTransaction, GroupTransactionInput, GroupTransactionType, SubTransactionField};

/// Strategy to generate a group transaction type.
fn group_type() -> impl Strategy<Value = GroupTransactionType> {
    proptest::sample::select(GroupTransactionType::ALL.to_vec())
}

/// Builds a group with the slots selected by `mask` populated, one bit per
/// slot in declaration order.
fn group_with(transaction_type: GroupTransactionType, mask: u8) -> GroupTransactionInput {
    let mut input = GroupTransactionInput::new(TransactionId::from("group1"), transaction_type);
    let tx = BaseTransaction::default();
    if mask & 0b0001 != 0 {
        input.cash_transaction = Some(tx.clone());
    }
    if mask & 0b0010 != 0 {
        input.fixed_income_transaction = Some(tx.clone());
    }
    if mask & 0b0100 != 0 {
        input.interest_transaction = Some(tx.clone());
    }
    if mask & 0b1000 != 0 {
        input.fee_transactions = Some(vec![tx]);
    }
    input
}

fn bit(field: SubTransactionField) -> u8 {
    match field {
        SubTransactionField::CashTransaction => 0b0001,
        SubTransactionField::FixedIncomeTransaction => 0b0010,
        SubTransactionField::InterestTransaction => 0b0100,
        SubTransactionField::FeeTransactions => 0b1000,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 3.1: A group is accepted iff it populates exactly its permitted slot.
    ///
    /// *For any* type and any subset of populated slots, shape validation
    /// SHALL accept the group iff the subset is exactly the permitted slot.
    #[test]
    fn prop_accepts_exactly_permitted_slot(
        transaction_type in group_type(),
        mask in 0u8..16,
    ) {
        let input = group_with(transaction_type, mask);
        let expected = bit(transaction_type.permitted_field());

        let result = validate_shape(transaction_type, &input);
        prop_assert_eq!(result.is_ok(), mask == expected, "mask {:04b} got {:?}", mask, result);
    }

    /// Property 3.2: Foreign slots are reported before a missing slot.
    ///
    /// *For any* group populating a foreign slot, shape validation SHALL
    /// report `WrongTransactionKind` naming the first foreign slot.
    #[test]
    fn prop_foreign_slot_reported_first(
        transaction_type in group_type(),
        mask in 1u8..16,
    ) {
        let permitted = transaction_type.permitted_field();
        let foreign = SubTransactionField::ALL
            .into_iter()
            .find(|field| *field != permitted && mask & bit(*field) != 0);
        prop_assume!(foreign.is_some());

        let result = validate_shape(transaction_type, &group_with(transaction_type, mask));
        prop_assert_eq!(
            result,
            Err(TxError::WrongTransactionKind {
                transaction_type,
                field: foreign.unwrap_or(permitted),
            })
        );
    }
}

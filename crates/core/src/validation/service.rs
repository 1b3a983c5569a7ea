//! Transaction validator service.
//!
//! Runs every rule that applies to a proposed group transaction or asset
//! against one ledger snapshot. The validators are pure; this type only
//! sequences them and records the outcome.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::ledger::{
    BaseTransaction, GroupTransaction, GroupTransactionInput, LedgerSnapshot,
    RealWorldAssetsState, SubTransactionField,
};
use crate::portfolio::Asset;

use super::asset::validate_fixed_income_asset;
use super::base::validate_base_transaction;
use super::error::TxError;
use super::role::{
    validate_cash_transaction, validate_fee_transaction, validate_fixed_income_transaction,
    validate_interest_transaction,
};

type RoleCheck = fn(&LedgerSnapshot<'_>, &BaseTransaction) -> Result<(), TxError>;

/// Returns the role rule for the sub-transactions stored in `field`.
fn role_check(field: SubTransactionField) -> RoleCheck {
    match field {
        SubTransactionField::CashTransaction => validate_cash_transaction,
        SubTransactionField::FixedIncomeTransaction => validate_fixed_income_transaction,
        SubTransactionField::InterestTransaction => validate_interest_transaction,
        SubTransactionField::FeeTransactions => validate_fee_transaction,
    }
}

/// Validates proposed changes against a single ledger state.
#[derive(Debug)]
pub struct TransactionValidator<'a> {
    snapshot: LedgerSnapshot<'a>,
}

impl<'a> TransactionValidator<'a> {
    /// Indexes `state` for validation.
    #[must_use]
    pub fn new(state: &'a RealWorldAssetsState) -> Self {
        Self {
            snapshot: LedgerSnapshot::new(state),
        }
    }

    /// Returns the snapshot the validator reads from.
    #[must_use]
    pub fn snapshot(&self) -> &LedgerSnapshot<'a> {
        &self.snapshot
    }

    /// Validates a group transaction about to be appended to the log.
    ///
    /// Steps, stopping at the first failure:
    /// 1. The group id is set and not already in the log
    /// 2. Ids within the group are unique, the group id included
    /// 3. Every sub-transaction passes the base rules
    /// 4. Every sub-transaction passes the role rule of the group type
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a `TxError`.
    pub fn validate_group_transaction(&self, group: &GroupTransaction) -> Result<(), TxError> {
        let result = self.check_group(group);
        match &result {
            Ok(()) => trace!(
                group_id = %group.id,
                transaction_type = %group.transaction_type(),
                "Group transaction accepted"
            ),
            Err(err) => debug!(
                group_id = %group.id,
                transaction_type = %group.transaction_type(),
                code = err.error_code(),
                error = %err,
                "Group transaction rejected"
            ),
        }
        result
    }

    /// Checks the shape of a wire-form group, then validates it as
    /// [`validate_group_transaction`](Self::validate_group_transaction) does.
    ///
    /// Returns the typed group on success.
    ///
    /// # Errors
    ///
    /// `WrongTransactionKind` or `MissingField` for a malformed shape,
    /// otherwise any error of `validate_group_transaction`.
    pub fn validate_group_input(
        &self,
        input: &GroupTransactionInput,
    ) -> Result<GroupTransaction, TxError> {
        let group = GroupTransaction::try_from(input.clone()).inspect_err(|err| {
            debug!(
                group_id = %input.id,
                transaction_type = %input.transaction_type,
                code = err.error_code(),
                error = %err,
                "Group transaction has wrong shape"
            );
        })?;
        self.validate_group_transaction(&group)?;
        Ok(group)
    }

    /// Validates a fixed-income asset before it is admitted to the portfolio.
    ///
    /// # Errors
    ///
    /// See [`validate_fixed_income_asset`].
    pub fn validate_fixed_income_asset(&self, asset: &Asset) -> Result<(), TxError> {
        let result = validate_fixed_income_asset(&self.snapshot, asset);
        match &result {
            Ok(()) => trace!(asset_id = %asset.id(), "Asset accepted"),
            Err(err) => debug!(
                asset_id = %asset.id(),
                code = err.error_code(),
                error = %err,
                "Asset rejected"
            ),
        }
        result
    }

    fn check_group(&self, group: &GroupTransaction) -> Result<(), TxError> {
        if group.id.is_blank() {
            return Err(TxError::MissingField { field: "id" });
        }
        if self.snapshot.has_transaction(group.id.as_str()) {
            return Err(TxError::DuplicateId(group.id.clone()));
        }

        let mut seen = HashSet::from([group.id.as_str()]);
        for id in group
            .transactions()
            .iter()
            .filter_map(|tx| tx.id.as_ref())
            .filter(|id| !id.is_blank())
        {
            if !seen.insert(id.as_str()) {
                return Err(TxError::DuplicateId(id.clone()));
            }
        }

        let role = role_check(group.transaction_type().permitted_field());
        for tx in group.transactions() {
            validate_base_transaction(&self.snapshot, tx)?;
            role(&self.snapshot, tx)?;
        }

        Ok(())
    }
}

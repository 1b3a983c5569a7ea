//! Admission rules for fixed-income assets entering the portfolio.

use crate::date::is_valid_timestamp;
use crate::ledger::LedgerSnapshot;
use crate::portfolio::{Asset, AssetRole};

use super::error::{EntityKind, TxError};
use super::present;

/// Validates a fixed-income asset before it is added or edited.
///
/// The instrument type and SPV must be chosen and must exist; the maturity
/// must be a valid date.
///
/// # Errors
///
/// `WrongAssetRole` for cash assets, then `MissingField`/`NotFound` for the
/// type and SPV references, then `InvalidDate` for the maturity.
pub fn validate_fixed_income_asset(
    snapshot: &LedgerSnapshot<'_>,
    asset: &Asset,
) -> Result<(), TxError> {
    let Some(asset) = asset.as_fixed_income() else {
        return Err(TxError::WrongAssetRole {
            expected: AssetRole::FixedIncome,
        });
    };

    let type_id = present(Some(&asset.fixed_income_type_id)).ok_or(TxError::MissingField {
        field: "fixedIncomeTypeId",
    })?;
    if snapshot.fixed_income_type(type_id.as_str()).is_none() {
        return Err(TxError::not_found(EntityKind::FixedIncomeType, type_id));
    }

    let spv_id = present(Some(&asset.spv_id)).ok_or(TxError::MissingField { field: "spvId" })?;
    if snapshot.spv(spv_id.as_str()).is_none() {
        return Err(TxError::not_found(EntityKind::Spv, spv_id));
    }

    if !is_valid_timestamp(&asset.maturity) {
        return Err(TxError::InvalidDate { field: "maturity" });
    }

    Ok(())
}

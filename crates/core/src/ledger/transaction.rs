//! Base and group transaction types.
//!
//! A group transaction travels over the document boundary as an optional
//! bag (`GroupTransactionInput`) with one slot per sub-transaction kind. Inside
//! the engine it is a `GroupTransaction` whose `GroupTransactionKind` carries
//! exactly the payload its type permits. The only way from one to the other
//! is the shape validator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use rwa_shared::types::{AccountId, AssetId, TransactionId};

use crate::validation::{TxError, validate_shape};

/// A single ledger movement.
///
/// Every field is optional on the wire; which ones are required is decided
/// by the validators. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseTransaction {
    /// Transaction id, unique across the whole transaction log.
    pub id: Option<TransactionId>,
    /// The asset moved.
    pub asset_id: Option<AssetId>,
    /// Signed amount.
    pub amount: Option<Decimal>,
    /// When the entry was recorded.
    pub entry_time: Option<String>,
    /// Own account.
    pub account_id: Option<AccountId>,
    /// Counterparty account.
    pub counter_party_account_id: Option<AccountId>,
    /// When the trade was agreed.
    pub trade_time: Option<String>,
    /// When the trade settled.
    pub settlement_time: Option<String>,
    /// External reference (on-chain hash, wire reference).
    pub tx_ref: Option<String>,
}

/// Declared type of a group transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupTransactionType {
    /// Cash drawn from the principal lender.
    PrincipalDraw,
    /// Cash returned to the principal lender.
    PrincipalReturn,
    /// Purchase of a fixed-income asset.
    AssetPurchase,
    /// Sale of a fixed-income asset.
    AssetSale,
    /// Interest drawn from a service provider.
    InterestDraw,
    /// Interest returned to a service provider.
    InterestReturn,
    /// Fees paid to service providers.
    FeesPayment,
}

impl GroupTransactionType {
    /// All group transaction types.
    pub const ALL: [Self; 7] = [
        Self::PrincipalDraw,
        Self::PrincipalReturn,
        Self::AssetPurchase,
        Self::AssetSale,
        Self::InterestDraw,
        Self::InterestReturn,
        Self::FeesPayment,
    ];

    /// Returns the only sub-transaction field this type may carry.
    #[must_use]
    pub const fn permitted_field(self) -> SubTransactionField {
        match self {
            Self::PrincipalDraw | Self::PrincipalReturn => SubTransactionField::CashTransaction,
            Self::AssetPurchase | Self::AssetSale => SubTransactionField::FixedIncomeTransaction,
            Self::InterestDraw | Self::InterestReturn => SubTransactionField::InterestTransaction,
            Self::FeesPayment => SubTransactionField::FeeTransactions,
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrincipalDraw => "PrincipalDraw",
            Self::PrincipalReturn => "PrincipalReturn",
            Self::AssetPurchase => "AssetPurchase",
            Self::AssetSale => "AssetSale",
            Self::InterestDraw => "InterestDraw",
            Self::InterestReturn => "InterestReturn",
            Self::FeesPayment => "FeesPayment",
        }
    }
}

impl std::fmt::Display for GroupTransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupTransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown group transaction type: {s}"))
    }
}

/// The sub-transaction slots of a group transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubTransactionField {
    /// `cashTransaction`
    CashTransaction,
    /// `fixedIncomeTransaction`
    FixedIncomeTransaction,
    /// `interestTransaction`
    InterestTransaction,
    /// `feeTransactions`
    FeeTransactions,
}

impl SubTransactionField {
    /// All slots, in wire declaration order.
    pub const ALL: [Self; 4] = [
        Self::CashTransaction,
        Self::FixedIncomeTransaction,
        Self::InterestTransaction,
        Self::FeeTransactions,
    ];

    /// Returns the wire field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CashTransaction => "cashTransaction",
            Self::FixedIncomeTransaction => "fixedIncomeTransaction",
            Self::InterestTransaction => "interestTransaction",
            Self::FeeTransactions => "feeTransactions",
        }
    }
}

impl std::fmt::Display for SubTransactionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire form of a group transaction: one optional slot per sub-transaction kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTransactionInput {
    /// Group id.
    pub id: TransactionId,
    /// Declared type.
    #[serde(rename = "type")]
    pub transaction_type: GroupTransactionType,
    /// When the group was recorded.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// Principal draw/return movement.
    #[serde(default)]
    pub cash_transaction: Option<BaseTransaction>,
    /// Asset purchase/sale movement.
    #[serde(default)]
    pub fixed_income_transaction: Option<BaseTransaction>,
    /// Interest movement.
    #[serde(default)]
    pub interest_transaction: Option<BaseTransaction>,
    /// Fee movements, in payment order.
    #[serde(default)]
    pub fee_transactions: Option<Vec<BaseTransaction>>,
}

impl GroupTransactionInput {
    /// Creates an input with every slot empty.
    #[must_use]
    pub fn new(id: TransactionId, transaction_type: GroupTransactionType) -> Self {
        Self {
            id,
            transaction_type,
            entry_time: None,
            cash_transaction: None,
            fixed_income_transaction: None,
            interest_transaction: None,
            fee_transactions: None,
        }
    }

    /// Returns true if the slot carries a movement. An empty fee list carries none.
    #[must_use]
    pub fn is_populated(&self, field: SubTransactionField) -> bool {
        match field {
            SubTransactionField::CashTransaction => self.cash_transaction.is_some(),
            SubTransactionField::FixedIncomeTransaction => self.fixed_income_transaction.is_some(),
            SubTransactionField::InterestTransaction => self.interest_transaction.is_some(),
            SubTransactionField::FeeTransactions => {
                self.fee_transactions.as_ref().is_some_and(|fees| !fees.is_empty())
            }
        }
    }

    /// Returns the populated slots in wire declaration order.
    pub fn populated_fields(&self) -> impl Iterator<Item = SubTransactionField> + '_ {
        SubTransactionField::ALL
            .into_iter()
            .filter(|field| self.is_populated(*field))
    }
}

/// The payload of a group transaction, one variant per type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupTransactionKind {
    /// Cash drawn from the principal lender.
    PrincipalDraw(BaseTransaction),
    /// Cash returned to the principal lender.
    PrincipalReturn(BaseTransaction),
    /// Purchase of a fixed-income asset.
    AssetPurchase(BaseTransaction),
    /// Sale of a fixed-income asset.
    AssetSale(BaseTransaction),
    /// Interest drawn from a service provider.
    InterestDraw(BaseTransaction),
    /// Interest returned to a service provider.
    InterestReturn(BaseTransaction),
    /// Fees paid to service providers; never empty.
    FeesPayment(Vec<BaseTransaction>),
}

impl GroupTransactionKind {
    /// Returns the declared type.
    #[must_use]
    pub fn transaction_type(&self) -> GroupTransactionType {
        match self {
            Self::PrincipalDraw(_) => GroupTransactionType::PrincipalDraw,
            Self::PrincipalReturn(_) => GroupTransactionType::PrincipalReturn,
            Self::AssetPurchase(_) => GroupTransactionType::AssetPurchase,
            Self::AssetSale(_) => GroupTransactionType::AssetSale,
            Self::InterestDraw(_) => GroupTransactionType::InterestDraw,
            Self::InterestReturn(_) => GroupTransactionType::InterestReturn,
            Self::FeesPayment(_) => GroupTransactionType::FeesPayment,
        }
    }

    /// Returns the sub-transactions carried by this group.
    #[must_use]
    pub fn transactions(&self) -> &[BaseTransaction] {
        match self {
            Self::PrincipalDraw(tx)
            | Self::PrincipalReturn(tx)
            | Self::AssetPurchase(tx)
            | Self::AssetSale(tx)
            | Self::InterestDraw(tx)
            | Self::InterestReturn(tx) => std::slice::from_ref(tx),
            Self::FeesPayment(fees) => fees,
        }
    }
}

/// A shape-checked group transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupTransactionInput", into = "GroupTransactionInput")]
pub struct GroupTransaction {
    /// Group id.
    pub id: TransactionId,
    /// When the group was recorded.
    pub entry_time: Option<String>,
    /// Typed payload.
    pub kind: GroupTransactionKind,
}

impl GroupTransaction {
    /// Creates a group transaction.
    #[must_use]
    pub fn new(id: TransactionId, kind: GroupTransactionKind) -> Self {
        Self {
            id,
            entry_time: None,
            kind,
        }
    }

    /// Returns the declared type.
    #[must_use]
    pub fn transaction_type(&self) -> GroupTransactionType {
        self.kind.transaction_type()
    }

    /// Returns the sub-transactions carried by this group.
    #[must_use]
    pub fn transactions(&self) -> &[BaseTransaction] {
        self.kind.transactions()
    }
}

impl TryFrom<GroupTransactionInput> for GroupTransaction {
    type Error = TxError;

    fn try_from(input: GroupTransactionInput) -> Result<Self, Self::Error> {
        validate_shape(input.transaction_type, &input)?;

        let GroupTransactionInput {
            id,
            transaction_type,
            entry_time,
            cash_transaction,
            fixed_income_transaction,
            interest_transaction,
            fee_transactions,
        } = input;
        let missing = || TxError::MissingField {
            field: transaction_type.permitted_field().as_str(),
        };

        let kind = match transaction_type {
            GroupTransactionType::PrincipalDraw => {
                GroupTransactionKind::PrincipalDraw(cash_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::PrincipalReturn => {
                GroupTransactionKind::PrincipalReturn(cash_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::AssetPurchase => {
                GroupTransactionKind::AssetPurchase(fixed_income_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::AssetSale => {
                GroupTransactionKind::AssetSale(fixed_income_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::InterestDraw => {
                GroupTransactionKind::InterestDraw(interest_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::InterestReturn => {
                GroupTransactionKind::InterestReturn(interest_transaction.ok_or_else(missing)?)
            }
            GroupTransactionType::FeesPayment => GroupTransactionKind::FeesPayment(
                fee_transactions
                    .filter(|fees| !fees.is_empty())
                    .ok_or_else(missing)?,
            ),
        };

        Ok(Self {
            id,
            entry_time,
            kind,
        })
    }
}

impl From<GroupTransaction> for GroupTransactionInput {
    fn from(group: GroupTransaction) -> Self {
        let mut input = Self::new(group.id, group.kind.transaction_type());
        input.entry_time = group.entry_time;

        match group.kind {
            GroupTransactionKind::PrincipalDraw(tx) | GroupTransactionKind::PrincipalReturn(tx) => {
                input.cash_transaction = Some(tx);
            }
            GroupTransactionKind::AssetPurchase(tx) | GroupTransactionKind::AssetSale(tx) => {
                input.fixed_income_transaction = Some(tx);
            }
            GroupTransactionKind::InterestDraw(tx) | GroupTransactionKind::InterestReturn(tx) => {
                input.interest_transaction = Some(tx);
            }
            GroupTransactionKind::FeesPayment(fees) => input.fee_transactions = Some(fees),
        }

        input
    }
}

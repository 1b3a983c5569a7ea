//! Portfolio assets.
//!
//! An asset is either a cash position or a fixed-income instrument. Documents
//! carry no explicit tag: an entry with a `fixedIncomeTypeId` key is fixed
//! income, any other entry is cash. Once decoded the role is an explicit enum
//! variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use rwa_shared::types::{AssetId, FixedIncomeTypeId, SpvId};

/// The financial role an asset plays in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRole {
    /// A cash position.
    Cash,
    /// A debt-like instrument with a maturity.
    FixedIncome,
}

impl std::fmt::Display for AssetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::FixedIncome => write!(f, "fixed income"),
        }
    }
}

/// A cash position held by an SPV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cash {
    /// Asset id.
    pub id: AssetId,
    /// Holding SPV, if assigned.
    #[serde(default)]
    pub spv_id: Option<SpvId>,
    /// ISO 4217 currency code; `""` when not chosen yet.
    #[serde(default)]
    pub currency: String,
    /// Current balance.
    #[serde(default)]
    pub balance: Decimal,
}

/// A fixed-income instrument held by an SPV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedIncome {
    /// Asset id.
    pub id: AssetId,
    /// Instrument class; `""` when not chosen yet.
    pub fixed_income_type_id: FixedIncomeTypeId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Holding SPV; `""` when not chosen yet.
    #[serde(default = "SpvId::unset")]
    pub spv_id: SpvId,
    /// Maturity date as stored in the document.
    #[serde(default)]
    pub maturity: String,
    /// Purchase date as stored in the document.
    #[serde(default)]
    pub purchase_date: String,
    /// Face value.
    #[serde(default)]
    pub notional: Decimal,
    /// Price paid per unit of notional.
    #[serde(default)]
    pub purchase_price: Decimal,
    /// Total cash paid.
    #[serde(default)]
    pub purchase_proceeds: Decimal,
    /// Notional minus proceeds.
    #[serde(default)]
    pub total_discount: Decimal,
    /// Latest market value.
    #[serde(default)]
    pub market_value: Decimal,
    /// Annualized yield.
    #[serde(default)]
    pub annualized_yield: Decimal,
    /// Realized surplus.
    #[serde(default)]
    pub realized_surplus: Decimal,
    /// Realized plus unrealized surplus.
    #[serde(default)]
    pub total_surplus: Decimal,
    /// International Securities Identification Number.
    #[serde(rename = "ISIN", default)]
    pub isin: Option<String>,
    /// CUSIP identifier.
    #[serde(rename = "CUSIP", default)]
    pub cusip: Option<String>,
    /// Coupon rate.
    #[serde(default)]
    pub coupon: Option<Decimal>,
    /// Current carrying value.
    #[serde(default)]
    pub current_value: Option<Decimal>,
}

/// A portfolio asset.
///
/// Encodes as the bare variant fields. Decoding goes through `AssetRecord`
/// so that the presence of `fixedIncomeTypeId` alone decides the role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Asset {
    /// Fixed-income instrument.
    FixedIncome(FixedIncome),
    /// Cash position.
    Cash(Cash),
}

/// Wire form of a portfolio entry: the union of both roles' fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetRecord {
    id: AssetId,
    #[serde(default)]
    fixed_income_type_id: Option<FixedIncomeTypeId>,
    #[serde(default)]
    spv_id: Option<SpvId>,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    balance: Decimal,
    #[serde(default)]
    name: String,
    #[serde(default)]
    maturity: String,
    #[serde(default)]
    purchase_date: String,
    #[serde(default)]
    notional: Decimal,
    #[serde(default)]
    purchase_price: Decimal,
    #[serde(default)]
    purchase_proceeds: Decimal,
    #[serde(default)]
    total_discount: Decimal,
    #[serde(default)]
    market_value: Decimal,
    #[serde(default)]
    annualized_yield: Decimal,
    #[serde(default)]
    realized_surplus: Decimal,
    #[serde(default)]
    total_surplus: Decimal,
    #[serde(rename = "ISIN", default)]
    isin: Option<String>,
    #[serde(rename = "CUSIP", default)]
    cusip: Option<String>,
    #[serde(default)]
    coupon: Option<Decimal>,
    #[serde(default)]
    current_value: Option<Decimal>,
}

impl From<AssetRecord> for Asset {
    fn from(record: AssetRecord) -> Self {
        let Some(fixed_income_type_id) = record.fixed_income_type_id else {
            return Self::Cash(Cash {
                id: record.id,
                spv_id: record.spv_id,
                currency: record.currency,
                balance: record.balance,
            });
        };

        Self::FixedIncome(FixedIncome {
            id: record.id,
            fixed_income_type_id,
            name: record.name,
            spv_id: record.spv_id.unwrap_or_else(SpvId::unset),
            maturity: record.maturity,
            purchase_date: record.purchase_date,
            notional: record.notional,
            purchase_price: record.purchase_price,
            purchase_proceeds: record.purchase_proceeds,
            total_discount: record.total_discount,
            market_value: record.market_value,
            annualized_yield: record.annualized_yield,
            realized_surplus: record.realized_surplus,
            total_surplus: record.total_surplus,
            isin: record.isin,
            cusip: record.cusip,
            coupon: record.coupon,
            current_value: record.current_value,
        })
    }
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AssetRecord::deserialize(deserializer).map(Self::from)
    }
}

impl Asset {
    /// Returns the asset id.
    #[must_use]
    pub fn id(&self) -> &AssetId {
        match self {
            Self::FixedIncome(asset) => &asset.id,
            Self::Cash(asset) => &asset.id,
        }
    }

    /// Returns the asset role.
    #[must_use]
    pub fn role(&self) -> AssetRole {
        match self {
            Self::FixedIncome(_) => AssetRole::FixedIncome,
            Self::Cash(_) => AssetRole::Cash,
        }
    }

    /// Returns true if this is a cash position.
    #[must_use]
    pub fn is_cash(&self) -> bool {
        matches!(self, Self::Cash(_))
    }

    /// Returns true if this is a fixed-income instrument.
    #[must_use]
    pub fn is_fixed_income(&self) -> bool {
        matches!(self, Self::FixedIncome(_))
    }

    /// Returns the cash details, if this is a cash position.
    #[must_use]
    pub fn as_cash(&self) -> Option<&Cash> {
        match self {
            Self::Cash(asset) => Some(asset),
            Self::FixedIncome(_) => None,
        }
    }

    /// Returns the instrument details, if this is a fixed-income asset.
    #[must_use]
    pub fn as_fixed_income(&self) -> Option<&FixedIncome> {
        match self {
            Self::FixedIncome(asset) => Some(asset),
            Self::Cash(_) => None,
        }
    }
}

impl From<Cash> for Asset {
    fn from(asset: Cash) -> Self {
        Self::Cash(asset)
    }
}

impl From<FixedIncome> for Asset {
    fn from(asset: FixedIncome) -> Self {
        Self::FixedIncome(asset)
    }
}

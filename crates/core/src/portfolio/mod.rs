//! Portfolio assets and the reference data they point at.

pub mod asset;
pub mod reference;

pub use asset::{Asset, AssetRole, Cash, FixedIncome};
pub use reference::{Account, FixedIncomeType, ServiceProvider, Spv};

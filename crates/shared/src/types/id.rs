//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `AssetId` where an `AccountId` is expected.
//! Document ids are free-form strings chosen by the editor (`"asset1"`, UUIDs, ...), so the
//! wrappers hold a `String` rather than a parsed UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// The empty id the document layer stores for an unset reference.
            #[must_use]
            pub fn unset() -> Self {
                Self(String::new())
            }

            /// Wraps an existing identifier.
            #[must_use]
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Returns true if the id is empty or whitespace only.
            ///
            /// The document layer initializes unset references to `""`.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

typed_id!(AccountId, "Unique identifier for a ledger account.");
typed_id!(AssetId, "Unique identifier for a portfolio asset.");
typed_id!(SpvId, "Unique identifier for a special-purpose vehicle.");
typed_id!(
    FixedIncomeTypeId,
    "Unique identifier for a fixed-income instrument type."
);
typed_id!(
    ServiceProviderId,
    "Unique identifier for a service provider (fee type)."
);
typed_id!(
    TransactionId,
    "Unique identifier for a group or base transaction."
);

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;

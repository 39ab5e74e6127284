//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque string keys assigned by the catalog / order store
//! (e.g. `inv-001`, `ORD-2023-001`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

/// Identifier of a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting empty / whitespace-only keys.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty key", $name)));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_string_id!(ItemId, "ItemId");
impl_string_id!(OrderId, "OrderId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keys_are_rejected() {
        assert!(matches!(ItemId::new("  "), Err(DomainError::InvalidId(_))));
        assert!(matches!("".parse::<OrderId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn ids_round_trip_through_json_as_plain_strings() {
        let id: ItemId = serde_json::from_str("\"inv-001\"").unwrap();
        assert_eq!(id.as_str(), "inv-001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"inv-001\"");

        let err = serde_json::from_str::<OrderId>("\"\"");
        assert!(err.is_err());
    }
}

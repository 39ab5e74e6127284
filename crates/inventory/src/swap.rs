use serde::{Deserialize, Serialize};

use swapwise_core::Money;

/// Regulatory / policy approval marker attached to a substitute.
///
/// Tags are free-form as ingested; only an exact match against the approved
/// tag makes a candidate usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceTag(String);

impl ComplianceTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison.
    pub fn is(&self, tag: &str) -> bool {
        self.0 == tag
    }
}

impl From<&str> for ComplianceTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for ComplianceTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A prospective substitute product offered by some vendor.
///
/// Savings are not stored here; they depend on the parent item's unit price
/// (see [`crate::InventoryItem::savings_per_unit`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapCandidate {
    pub name: String,
    pub price_per_unit: Money,
    #[serde(default)]
    pub manufacturer: String,
    /// Lead-time description, informational only.
    #[serde(default)]
    pub shipping: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub compliance: ComplianceTag,
}

impl SwapCandidate {
    pub fn new(
        name: impl Into<String>,
        vendor: impl Into<String>,
        price_per_unit: Money,
        compliance: impl Into<ComplianceTag>,
    ) -> Self {
        Self {
            name: name.into(),
            price_per_unit,
            manufacturer: String::new(),
            shipping: String::new(),
            vendor: vendor.into(),
            compliance: compliance.into(),
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn with_shipping(mut self, shipping: impl Into<String>) -> Self {
        self.shipping = shipping.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn compliance_match_is_exact_and_case_sensitive() {
        let tag = ComplianceTag::new("Approved");
        assert!(tag.is("Approved"));
        assert!(!tag.is("approved"));
        assert!(!tag.is("Approved "));
        assert!(!ComplianceTag::default().is("Approved"));
    }

    #[test]
    fn deserializes_source_shape_with_missing_optional_fields() {
        let json = r#"{
            "name": "Economy Gloves",
            "pricePerUnit": 0.12,
            "vendor": "Discount Medical",
            "compliance": "Pending Review"
        }"#;
        let swap: SwapCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(swap.price_per_unit, Money::new(dec!(0.12)));
        assert_eq!(swap.compliance.as_str(), "Pending Review");
        assert!(swap.manufacturer.is_empty());
        assert!(swap.shipping.is_empty());
    }
}

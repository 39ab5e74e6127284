use serde::{Deserialize, Serialize};

use swapwise_core::{DomainError, DomainResult, Entity, ItemId, Money};

use crate::swap::SwapCandidate;

/// An inventory record as supplied by the catalog source.
///
/// Nothing is enforced at this level: counts are signed and prices unchecked so
/// that malformed rows survive ingestion and can be reported per item. Convert
/// into an [`InventoryItem`] with [`InventoryRecord::validate`] before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub current_stock: i64,
    /// Nominal full-stock capacity.
    pub total_stock: i64,
    #[serde(default)]
    pub category: String,
    /// Shelf-life description (e.g. "6 months").
    #[serde(default)]
    pub expires_in: String,
    pub unit_price: Money,
    #[serde(default)]
    pub last_purchase_price: Option<Money>,
    /// Demand forecast.
    #[serde(default)]
    pub required_units: i64,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub swaps: Vec<SwapCandidate>,
}

impl InventoryRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        current_stock: i64,
        total_stock: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: String::new(),
            current_stock,
            total_stock,
            category: String::new(),
            expires_in: String::new(),
            unit_price,
            last_purchase_price: None,
            required_units: 0,
            vendor: String::new(),
            manufacturer: String::new(),
            swaps: Vec::new(),
        }
    }

    pub fn with_swap(mut self, swap: SwapCandidate) -> Self {
        self.swaps.push(swap);
        self
    }

    pub fn with_swaps(mut self, swaps: impl IntoIterator<Item = SwapCandidate>) -> Self {
        self.swaps.extend(swaps);
        self
    }

    /// Check every structural invariant and produce the validated item.
    pub fn validate(&self) -> DomainResult<InventoryItem> {
        InventoryItem::try_from(self.clone())
    }
}

/// A validated inventory item.
///
/// Invariants (checked on construction):
/// - `total_stock > 0`
/// - `current_stock <= total_stock`
/// - all prices are non-negative
/// - `last_purchase_price`, when present, equals `unit_price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InventoryRecord", into = "InventoryRecord")]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    sku: String,
    current_stock: u64,
    total_stock: u64,
    category: String,
    expires_in: String,
    unit_price: Money,
    required_units: u64,
    vendor: String,
    manufacturer: String,
    swaps: Vec<SwapCandidate>,
}

impl InventoryItem {
    pub fn id_typed(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn current_stock(&self) -> u64 {
        self.current_stock
    }

    pub fn total_stock(&self) -> u64 {
        self.total_stock
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn expires_in(&self) -> &str {
        &self.expires_in
    }

    /// Per-unit acquisition cost (same figure as the last purchase price).
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn required_units(&self) -> u64 {
        self.required_units
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Substitutes in the order the catalog listed them.
    pub fn swaps(&self) -> &[SwapCandidate] {
        &self.swaps
    }

    /// Cost of the forecast demand at the current price, `None` when out of
    /// range.
    pub fn demand_cost(&self) -> Option<Money> {
        self.unit_price.checked_times(self.required_units)
    }

    /// `unit_price - candidate.price_per_unit`; negative when the candidate is
    /// more expensive.
    pub fn savings_per_unit(&self, candidate: &SwapCandidate) -> Money {
        self.unit_price - candidate.price_per_unit
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn ensure_count(id: &str, field: &str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::invalid_record(format!("{id}: {field} cannot be negative ({value})")))
}

fn ensure_price(id: &str, field: &str, price: Money) -> Result<(), DomainError> {
    if price.is_negative() {
        return Err(DomainError::invalid_record(format!(
            "{id}: {field} cannot be negative ({price})"
        )));
    }
    Ok(())
}

/// Full-stock cost at `price` must be representable, so that savings scaled to
/// capacity can be computed exactly.
fn ensure_capacity_cost(id: &str, field: &str, price: Money, total_stock: u64) -> Result<(), DomainError> {
    if price.checked_times(total_stock).is_none() {
        return Err(DomainError::invalid_record(format!(
            "{id}: {field} x totalStock is out of range ({price} x {total_stock})"
        )));
    }
    Ok(())
}

impl TryFrom<InventoryRecord> for InventoryItem {
    type Error = DomainError;

    fn try_from(record: InventoryRecord) -> Result<Self, Self::Error> {
        let id = ItemId::new(record.id.clone())
            .map_err(|e| DomainError::invalid_record(e.to_string()))?;
        let key = id.as_str();

        let current_stock = ensure_count(key, "currentStock", record.current_stock)?;
        let total_stock = ensure_count(key, "totalStock", record.total_stock)?;
        let required_units = ensure_count(key, "requiredUnits", record.required_units)?;

        if total_stock == 0 {
            return Err(DomainError::invalid_record(format!(
                "{key}: totalStock must be greater than zero"
            )));
        }
        if current_stock > total_stock {
            return Err(DomainError::invalid_record(format!(
                "{key}: currentStock ({current_stock}) exceeds totalStock ({total_stock})"
            )));
        }

        ensure_price(key, "unitPrice", record.unit_price)?;
        if let Some(last) = record.last_purchase_price {
            ensure_price(key, "lastPurchasePrice", last)?;
            if last != record.unit_price {
                return Err(DomainError::invalid_record(format!(
                    "{key}: lastPurchasePrice ({last}) disagrees with unitPrice ({})",
                    record.unit_price
                )));
            }
        }
        ensure_capacity_cost(key, "unitPrice", record.unit_price, total_stock)?;
        for (idx, swap) in record.swaps.iter().enumerate() {
            let field = format!("swaps[{idx}].pricePerUnit");
            ensure_price(key, &field, swap.price_per_unit)?;
            ensure_capacity_cost(key, &field, swap.price_per_unit, total_stock)?;
        }

        Ok(Self {
            id,
            name: record.name,
            sku: record.sku,
            current_stock,
            total_stock,
            category: record.category,
            expires_in: record.expires_in,
            unit_price: record.unit_price,
            required_units,
            vendor: record.vendor,
            manufacturer: record.manufacturer,
            swaps: record.swaps,
        })
    }
}

impl From<InventoryItem> for InventoryRecord {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id.into(),
            name: item.name,
            sku: item.sku,
            current_stock: item.current_stock as i64,
            total_stock: item.total_stock as i64,
            category: item.category,
            expires_in: item.expires_in,
            unit_price: item.unit_price,
            last_purchase_price: Some(item.unit_price),
            required_units: item.required_units as i64,
            vendor: item.vendor,
            manufacturer: item.manufacturer,
            swaps: item.swaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn gloves() -> InventoryRecord {
        InventoryRecord::new("inv-001", "Surgical Gloves (Medium)", 75, 100, Money::new(dec!(0.23)))
    }

    fn assert_invalid(record: &InventoryRecord, needle: &str) {
        match record.validate() {
            Err(DomainError::InvalidRecord(msg)) if msg.contains(needle) => {}
            other => panic!("expected InvalidRecord containing {needle:?}, got {other:?}"),
        }
    }

    #[test]
    fn valid_record_becomes_item() {
        let item = gloves()
            .with_swap(SwapCandidate::new("Gloves", "MedSupply Inc.", Money::new(dec!(0.18)), "Approved"))
            .validate()
            .unwrap();
        assert_eq!(item.id_typed().as_str(), "inv-001");
        assert_eq!(item.current_stock(), 75);
        assert_eq!(item.total_stock(), 100);
        assert_eq!(item.swaps().len(), 1);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let mut record = gloves();
        record.current_stock = 0;
        record.total_stock = 0;
        assert_invalid(&record, "totalStock must be greater than zero");
    }

    #[test]
    fn negative_current_stock_is_invalid() {
        let mut record = gloves();
        record.current_stock = -1;
        assert_invalid(&record, "currentStock cannot be negative");
    }

    #[test]
    fn stock_above_capacity_is_invalid() {
        let mut record = gloves();
        record.current_stock = 101;
        assert_invalid(&record, "exceeds totalStock");
    }

    #[test]
    fn negative_prices_are_invalid() {
        let mut record = gloves();
        record.unit_price = Money::new(dec!(-0.01));
        assert_invalid(&record, "unitPrice cannot be negative");

        let record = gloves().with_swap(SwapCandidate::new("x", "y", Money::new(dec!(-1)), "Approved"));
        assert_invalid(&record, "swaps[0].pricePerUnit");
    }

    #[test]
    fn last_purchase_price_must_agree_with_unit_price() {
        let mut record = gloves();
        record.last_purchase_price = Some(Money::new(dec!(0.23)));
        assert!(record.validate().is_ok());

        record.last_purchase_price = Some(Money::new(dec!(0.25)));
        assert_invalid(&record, "disagrees with unitPrice");
    }

    #[test]
    fn unrepresentable_capacity_cost_is_invalid() {
        let mut record = gloves();
        record.current_stock = 1;
        record.total_stock = 10_000_000_000;
        record.unit_price = Money::new(dec!(100000000000000000000));
        assert_invalid(&record, "unitPrice x totalStock is out of range");

        let record = gloves().with_swap(SwapCandidate::new(
            "x",
            "y",
            Money::new(rust_decimal::Decimal::MAX),
            "Approved",
        ));
        assert_invalid(&record, "swaps[0].pricePerUnit x totalStock");
    }

    #[test]
    fn empty_id_is_invalid_record() {
        let mut record = gloves();
        record.id = "  ".to_string();
        assert!(matches!(record.validate(), Err(DomainError::InvalidRecord(_))));
    }

    #[test]
    fn demand_cost_uses_required_units() {
        let mut record = gloves();
        record.required_units = 200;
        assert_eq!(record.validate().unwrap().demand_cost(), Some(Money::new(dec!(46))));
        assert_eq!(gloves().validate().unwrap().demand_cost(), Some(Money::ZERO));
    }

    #[test]
    fn savings_per_unit_is_signed() {
        let item = gloves().validate().unwrap();
        let cheaper = SwapCandidate::new("a", "v", Money::new(dec!(0.12)), "Approved");
        let pricier = SwapCandidate::new("b", "v", Money::new(dec!(0.30)), "Approved");
        assert_eq!(item.savings_per_unit(&cheaper), Money::new(dec!(0.11)));
        assert_eq!(item.savings_per_unit(&pricier), Money::new(dec!(-0.07)));
    }

    #[test]
    fn deserializing_item_runs_validation() {
        let ok = r#"{"id":"inv-9","name":"Mask","currentStock":5,"totalStock":10,"unitPrice":1.5}"#;
        let item: InventoryItem = serde_json::from_str(ok).unwrap();
        assert_eq!(item.unit_price(), Money::new(dec!(1.5)));

        let bad = r#"{"id":"inv-9","name":"Mask","currentStock":0,"totalStock":0,"unitPrice":1.5}"#;
        assert!(serde_json::from_str::<InventoryItem>(bad).is_err());

        // Raw records always deserialize; validation is deferred.
        let record: InventoryRecord = serde_json::from_str(bad).unwrap();
        assert_eq!(record.total_stock, 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: validation accepts exactly the records with
        /// `0 <= current <= total` and `total > 0`.
        #[test]
        fn stock_invariant_matches_validation(current in -5i64..200, total in -5i64..200) {
            let mut record = gloves();
            record.current_stock = current;
            record.total_stock = total;
            let expected_ok = total > 0 && current >= 0 && current <= total;
            prop_assert_eq!(record.validate().is_ok(), expected_ok);
        }
    }
}

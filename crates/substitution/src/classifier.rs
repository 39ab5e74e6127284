use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use swapwise_core::{DomainError, DomainResult};
use swapwise_inventory::InventoryItem;

use crate::config::EngineConfig;

/// Urgency tier derived from the current-to-capacity stock ratio.
///
/// Ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Urgent,
    Low,
    Stock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Urgent => "Urgent",
            StockStatus::Low => "Low",
            StockStatus::Stock => "Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered-threshold stock classifier.
///
/// `ratio < urgent_below` is `Urgent`, `ratio < low_below` is `Low`, anything
/// else is `Stock`. A ratio exactly on a threshold belongs to the less urgent
/// band. Ratios are compared exactly as `current < threshold * total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatusClassifier {
    urgent_below: Decimal,
    low_below: Decimal,
}

impl Default for StockStatusClassifier {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl StockStatusClassifier {
    /// Build from an already validated config.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            urgent_below: config.urgent_below,
            low_below: config.low_below,
        }
    }

    pub fn classify(&self, item: &InventoryItem) -> StockStatus {
        // total_stock > 0 is an InventoryItem invariant.
        self.tier(item.current_stock(), item.total_stock())
    }

    /// Classify raw stock levels.
    ///
    /// Fails with `InvalidRecord` when `total_stock == 0` (a zero-capacity item
    /// is malformed, not empty).
    pub fn classify_levels(&self, current_stock: u64, total_stock: u64) -> DomainResult<StockStatus> {
        if total_stock == 0 {
            return Err(DomainError::invalid_record("totalStock must be greater than zero"));
        }
        Ok(self.tier(current_stock, total_stock))
    }

    fn tier(&self, current_stock: u64, total_stock: u64) -> StockStatus {
        let current = Decimal::from(current_stock);
        let total = Decimal::from(total_stock);

        if current < self.urgent_below * total {
            StockStatus::Urgent
        } else if current < self.low_below * total {
            StockStatus::Low
        } else {
            StockStatus::Stock
        }
    }
}

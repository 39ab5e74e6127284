//! Engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use swapwise_core::{DomainError, DomainResult};

/// Default approval marker for substitutes.
pub const DEFAULT_APPROVED_TAG: &str = "Approved";

/// Tunables for a [`crate::SubstitutionEngine`].
///
/// Defaults reproduce the standard policy: only `"Approved"` substitutes are
/// usable, below 20% of capacity is `Urgent`, below 40% is `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Exact (case-sensitive) compliance tag a substitute must carry.
    pub approved_tag: String,
    /// Stock ratio strictly below this is `Urgent`.
    pub urgent_below: Decimal,
    /// Stock ratio strictly below this (and not urgent) is `Low`.
    pub low_below: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            approved_tag: DEFAULT_APPROVED_TAG.to_string(),
            urgent_below: Decimal::new(20, 2),
            low_below: Decimal::new(40, 2),
        }
    }
}

impl EngineConfig {
    pub fn with_approved_tag(mut self, tag: impl Into<String>) -> Self {
        self.approved_tag = tag.into();
        self
    }

    pub fn with_thresholds(mut self, urgent_below: Decimal, low_below: Decimal) -> Self {
        self.urgent_below = urgent_below;
        self.low_below = low_below;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.approved_tag.is_empty() {
            return Err(DomainError::validation("approved_tag cannot be empty"));
        }
        if self.urgent_below <= Decimal::ZERO {
            return Err(DomainError::validation("urgent_below must be positive"));
        }
        if self.low_below <= self.urgent_below {
            return Err(DomainError::validation(format!(
                "low_below ({}) must be greater than urgent_below ({})",
                self.low_below, self.urgent_below
            )));
        }
        if self.low_below > Decimal::ONE {
            return Err(DomainError::validation("low_below cannot exceed 1"));
        }
        Ok(())
    }
}

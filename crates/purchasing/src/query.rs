//! Order filtering and sorting as used by order list screens.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::order::{Order, OrderStatus};

/// Column an order list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortKey {
    Id,
    Date,
    Vendors,
    /// Numeric.
    ItemCount,
    /// Numeric.
    Total,
    Status,
    EstimatedDelivery,
    PaymentTerms,
    DeliveryTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Clicking the same column again flips the direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl OrderSortKey {
    /// Numbers compare numerically, dates chronologically, everything else as
    /// case-insensitive text.
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderSortKey::ItemCount => a.item_count().cmp(&b.item_count()),
            OrderSortKey::Total => a.total().cmp(&b.total()),
            OrderSortKey::Date => a.date().cmp(&b.date()),
            OrderSortKey::Id => text_cmp(a.id_typed().as_str(), b.id_typed().as_str()),
            OrderSortKey::Vendors => text_cmp(&a.vendors().join(","), &b.vendors().join(",")),
            OrderSortKey::Status => text_cmp(a.status().as_str(), b.status().as_str()),
            OrderSortKey::EstimatedDelivery => text_cmp(a.estimated_delivery(), b.estimated_delivery()),
            OrderSortKey::PaymentTerms => text_cmp(a.payment_terms(), b.payment_terms()),
            OrderSortKey::DeliveryTime => text_cmp(a.delivery_time(), b.delivery_time()),
        }
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Text + status filter over orders, with an optional sort.
///
/// - `text` matches the order id or any vendor name (case-insensitive substring).
/// - `statuses` empty means any status.
/// - Without `sort_by` results stay in input order; sorting is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub statuses: Vec<OrderStatus>,
    #[serde(default)]
    pub sort_by: Option<OrderSortKey>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl OrderQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    pub fn sorted_by(mut self, key: OrderSortKey, direction: SortDirection) -> Self {
        self.sort_by = Some(key);
        self.direction = direction;
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.matches_text(order) && self.matches_status(order)
    }

    /// Matching orders, sorted when a sort key is set.
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        let mut hits: Vec<&Order> = orders.iter().filter(|o| self.matches(o)).collect();
        if let Some(key) = self.sort_by {
            hits.sort_by(|a, b| match self.direction {
                SortDirection::Asc => key.compare(a, b),
                SortDirection::Desc => key.compare(b, a),
            });
        }
        hits
    }

    fn matches_text(&self, order: &Order) -> bool {
        let needle = match self.text.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        order.id_typed().as_str().to_lowercase().contains(&needle)
            || order.vendors().iter().any(|v| v.to_lowercase().contains(&needle))
    }

    fn matches_status(&self, order: &Order) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&order.status())
    }
}

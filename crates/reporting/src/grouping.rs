//! Grouping orders for list views.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use swapwise_core::{Money, OrderId};
use swapwise_purchasing::Order;

pub const DEFAULT_DEPARTMENT: &str = "General";
pub const NO_VENDOR: &str = "No Vendor";
pub const DEFAULT_URGENCY: &str = "Normal";

/// Key used to bucket orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderGrouping {
    /// Missing department falls into [`DEFAULT_DEPARTMENT`].
    Department,
    /// An order lands in one group per vendor; none falls into [`NO_VENDOR`].
    Vendor,
    Status,
    /// Missing urgency falls into [`DEFAULT_URGENCY`].
    Urgency,
}

/// Orders sharing a grouping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGroup {
    /// In input order.
    pub order_ids: Vec<OrderId>,
    pub total: Money,
}

impl OrderGroup {
    fn push(&mut self, order: &Order) {
        self.order_ids.push(order.id_typed().clone());
        self.total = self.total.saturating_add(order.total());
    }
}

/// Bucket `orders` by `by`, keyed and ordered by group name.
///
/// With [`OrderGrouping::Vendor`] a multi-vendor order is counted in each of
/// its vendors' groups, so group totals may exceed overall spend.
pub fn group_orders(orders: &[Order], by: OrderGrouping) -> BTreeMap<String, OrderGroup> {
    let mut groups: BTreeMap<String, OrderGroup> = BTreeMap::new();

    for order in orders {
        match by {
            OrderGrouping::Department => {
                let key = order.department().unwrap_or(DEFAULT_DEPARTMENT);
                groups.entry(key.to_string()).or_default().push(order);
            }
            OrderGrouping::Vendor => {
                if order.vendors().is_empty() {
                    groups.entry(NO_VENDOR.to_string()).or_default().push(order);
                }
                for vendor in order.vendors() {
                    groups.entry(vendor.clone()).or_default().push(order);
                }
            }
            OrderGrouping::Status => {
                groups.entry(order.status().to_string()).or_default().push(order);
            }
            OrderGrouping::Urgency => {
                let key = order.urgency().unwrap_or(DEFAULT_URGENCY);
                groups.entry(key.to_string()).or_default().push(order);
            }
        }
    }

    groups
}

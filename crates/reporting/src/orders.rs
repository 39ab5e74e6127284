//! Order history rollup.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use swapwise_core::Money;
use swapwise_purchasing::{Order, OrderStatus};

/// Summary counters over a set of orders.
///
/// Per-status maps only contain statuses that occur in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRollup {
    pub order_count: usize,
    pub totals_by_status: BTreeMap<OrderStatus, Money>,
    pub orders_by_status: BTreeMap<OrderStatus, usize>,
    /// Distinct vendor names across all orders (drafts without vendors add none).
    pub distinct_vendors: usize,
    /// Distinct departments across orders that name one.
    pub distinct_departments: usize,
    /// Sum of every order's recorded total, regardless of status. Sums clamp
    /// at the representable range.
    pub total_spend: Money,
    pub pending_orders: usize,
    /// `total_spend / order_count` rounded to cents; `None` without orders.
    pub average_order_value: Option<Money>,
}

/// Aggregate `orders` into an [`OrderRollup`]. Never fails.
pub fn summarize(orders: &[Order]) -> OrderRollup {
    let mut totals_by_status: BTreeMap<OrderStatus, Money> = BTreeMap::new();
    let mut orders_by_status: BTreeMap<OrderStatus, usize> = BTreeMap::new();
    let mut vendors: HashSet<&str> = HashSet::new();
    let mut departments: HashSet<&str> = HashSet::new();
    let mut total_spend = Money::ZERO;

    for order in orders {
        let status = order.status();
        let status_total = totals_by_status.entry(status).or_insert(Money::ZERO);
        *status_total = status_total.saturating_add(order.total());
        *orders_by_status.entry(status).or_insert(0) += 1;

        vendors.extend(order.vendors().iter().map(String::as_str));
        if let Some(department) = order.department() {
            departments.insert(department);
        }
        total_spend = total_spend.saturating_add(order.total());
    }

    OrderRollup {
        order_count: orders.len(),
        pending_orders: orders_by_status.get(&OrderStatus::Pending).copied().unwrap_or(0),
        totals_by_status,
        orders_by_status,
        distinct_vendors: vendors.len(),
        distinct_departments: departments.len(),
        total_spend,
        average_order_value: total_spend.divided_by(orders.len() as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use swapwise_purchasing::OrderRecord;

    fn order(id: &str, status: OrderStatus, total: Money, vendors: &[&str]) -> Order {
        OrderRecord::new(id, NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(), status, total)
            .with_vendors(vendors.iter().copied())
            .validate()
            .unwrap()
    }

    fn history() -> Vec<Order> {
        vec![
            order("ORD-2023-001", OrderStatus::Completed, Money::new(dec!(1245.67)), &["MedSupply Inc.", "Hospital Direct"]),
            order("ORD-2023-002", OrderStatus::Processing, Money::new(dec!(876.5)), &["Hospital Direct"]),
            order("ORD-2023-003", OrderStatus::Pending, Money::new(dec!(345.25)), &["PPE Direct", "MedSupply Inc."]),
            order("ORD-2023-004", OrderStatus::Completed, Money::new(dec!(567.8)), &["Discount Medical"]),
            order("ORD-2023-008", OrderStatus::Draft, Money::new(dec!(543.21)), &[]),
        ]
    }

    #[test]
    fn counts_and_sums_by_status() {
        let rollup = summarize(&history());
        assert_eq!(rollup.order_count, 5);
        assert_eq!(rollup.totals_by_status[&OrderStatus::Completed], Money::new(dec!(1813.47)));
        assert_eq!(rollup.totals_by_status[&OrderStatus::Draft], Money::new(dec!(543.21)));
        assert_eq!(rollup.orders_by_status[&OrderStatus::Completed], 2);
        assert!(!rollup.totals_by_status.contains_key(&OrderStatus::Cancelled));
        assert_eq!(rollup.pending_orders, 1);
        assert_eq!(rollup.total_spend, Money::new(dec!(3578.43)));
        assert_eq!(rollup.average_order_value, Some(Money::new(dec!(715.69))));
    }

    #[test]
    fn vendorless_draft_counts_as_order_but_not_vendor() {
        let rollup = summarize(&history());
        // MedSupply, Hospital Direct, PPE Direct, Discount Medical.
        assert_eq!(rollup.distinct_vendors, 4);

        let only_draft = summarize(&history()[4..]);
        assert_eq!(only_draft.order_count, 1);
        assert_eq!(only_draft.distinct_vendors, 0);
    }

    #[test]
    fn departments_skip_missing_values() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let orders = vec![
            OrderRecord::new("A", date, OrderStatus::Pending, Money::ZERO).with_department("Surgery"),
            OrderRecord::new("B", date, OrderStatus::Pending, Money::ZERO).with_department("Surgery"),
            OrderRecord::new("C", date, OrderStatus::Pending, Money::ZERO).with_department("ICU"),
            OrderRecord::new("D", date, OrderStatus::Pending, Money::ZERO),
        ]
        .into_iter()
        .map(|r| r.validate().unwrap())
        .collect::<Vec<_>>();

        assert_eq!(summarize(&orders).distinct_departments, 2);
    }

    #[test]
    fn huge_totals_clamp_instead_of_overflowing() {
        let max = Money::new(rust_decimal::Decimal::MAX);
        let orders = vec![
            order("A", OrderStatus::Completed, max, &[]),
            order("B", OrderStatus::Completed, max, &[]),
        ];
        let rollup = summarize(&orders);
        assert_eq!(rollup.total_spend, max);
        assert_eq!(rollup.totals_by_status[&OrderStatus::Completed], max);
        assert_eq!(rollup.order_count, 2);
    }

    #[test]
    fn empty_history_has_no_average() {
        let rollup = summarize(&[]);
        assert_eq!(rollup, OrderRollup::default());
        assert_eq!(rollup.average_order_value, None);
    }

    proptest! {
        /// Property: summarizing the same orders twice gives the same rollup, and
        /// per-status totals add up to total spend.
        #[test]
        fn rollup_is_idempotent_and_consistent(
            rows in prop::collection::vec((0usize..5, 0i64..1_000_000, 0usize..4), 0..30)
        ) {
            let vendors = ["MedSupply Inc.", "Hospital Direct", "PPE Direct"];
            let orders: Vec<Order> = rows
                .iter()
                .enumerate()
                .map(|(i, (s, cents, v))| order(&format!("O-{i}"), OrderStatus::ALL[*s], Money::from_minor(*cents), &vendors[..*v]))
                .collect();

            let first = summarize(&orders);
            let second = summarize(&orders);
            prop_assert_eq!(&first, &second);

            let by_status: Money = first.totals_by_status.values().sum();
            prop_assert_eq!(by_status, first.total_spend);
            prop_assert_eq!(first.orders_by_status.values().sum::<usize>(), orders.len());
        }
    }
}

use std::collections::BTreeMap;

use tracing::info;

use swapwise_purchasing::Order;
use swapwise_substitution::{EvaluatedItem, ItemEvaluation};

use crate::grouping::{OrderGroup, OrderGrouping, group_orders};
use crate::inventory::{InventoryRollup, summarize_evaluations, top_opportunities};
use crate::orders::{OrderRollup, summarize};

/// Entry point for dashboard rollups.
///
/// Stateless; every call recomputes from its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollupReporter;

impl RollupReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, orders: &[Order]) -> OrderRollup {
        let rollup = summarize(orders);
        info!(
            orders = rollup.order_count,
            vendors = rollup.distinct_vendors,
            departments = rollup.distinct_departments,
            total_spend = %rollup.total_spend,
            "summarized order history"
        );
        rollup
    }

    pub fn summarize_evaluations(&self, evaluations: &[ItemEvaluation]) -> InventoryRollup {
        let rollup = summarize_evaluations(evaluations);
        info!(
            evaluated = rollup.evaluated,
            invalid = rollup.invalid,
            urgent = rollup.urgent,
            potential_savings = %rollup.total_potential_savings,
            "summarized inventory evaluation"
        );
        rollup
    }

    pub fn group_orders(&self, orders: &[Order], by: OrderGrouping) -> BTreeMap<String, OrderGroup> {
        group_orders(orders, by)
    }

    pub fn top_opportunities<'a>(&self, evaluations: &'a [ItemEvaluation], k: usize) -> Vec<&'a EvaluatedItem> {
        top_opportunities(evaluations, k)
    }
}

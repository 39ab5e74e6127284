//! Rollup over evaluated inventory.

use serde::Serialize;

use swapwise_core::Money;
use swapwise_substitution::{EvaluatedItem, ItemEvaluation, StockStatus};

/// Dashboard counters for one evaluation pass over a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRollup {
    pub evaluated: usize,
    pub invalid: usize,
    pub urgent: usize,
    pub low: usize,
    pub stock: usize,
    /// Items with a chosen swap (whatever the sign of its saving).
    pub with_opportunity: usize,
    /// Signed sum of per-item potential savings (facility-wide headline),
    /// clamped at the representable range.
    pub total_potential_savings: Money,
    /// Sum of the positive per-item figures only.
    pub realizable_savings: Money,
}

pub fn summarize_evaluations(evaluations: &[ItemEvaluation]) -> InventoryRollup {
    let mut rollup = InventoryRollup::default();

    for evaluation in evaluations {
        let Some(item) = evaluation.evaluated() else {
            rollup.invalid += 1;
            continue;
        };

        rollup.evaluated += 1;
        match item.status {
            StockStatus::Urgent => rollup.urgent += 1,
            StockStatus::Low => rollup.low += 1,
            StockStatus::Stock => rollup.stock += 1,
        }
        if item.has_opportunity() {
            rollup.with_opportunity += 1;
        }
        rollup.total_potential_savings = rollup.total_potential_savings.saturating_add(item.potential_savings);
        rollup.realizable_savings = rollup.realizable_savings.saturating_add(item.display_savings());
    }

    rollup
}

/// Evaluated items with a chosen swap, largest potential savings first.
///
/// Ties keep input order. At most `k` items are returned.
pub fn top_opportunities(evaluations: &[ItemEvaluation], k: usize) -> Vec<&EvaluatedItem> {
    let mut ranked: Vec<&EvaluatedItem> = evaluations
        .iter()
        .filter_map(ItemEvaluation::evaluated)
        .filter(|item| item.has_opportunity())
        .collect();
    // Stable sort: equal savings stay in catalog order.
    ranked.sort_by(|a, b| b.potential_savings.cmp(&a.potential_savings));
    ranked.truncate(k);
    ranked
}

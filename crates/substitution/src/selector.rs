use serde::Serialize;

use swapwise_core::Money;
use swapwise_inventory::{InventoryItem, SwapCandidate};

use crate::compliance::ComplianceFilter;

/// The substitute picked for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenSwap {
    pub candidate: SwapCandidate,
    /// Index of the candidate in the item's swap list.
    pub position: usize,
    /// `item.unit_price - candidate.price_per_unit`, may be zero or negative.
    pub savings_per_unit: Money,
}

/// Picks the compliant substitute with the largest per-unit saving.
///
/// Ties go to the candidate listed first. The sign of the saving is not
/// filtered: a more expensive compliant candidate is still returned when it is
/// the only one (callers decide whether to surface it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestSwapSelector {
    filter: ComplianceFilter,
}

impl BestSwapSelector {
    pub fn new(filter: ComplianceFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ComplianceFilter {
        &self.filter
    }

    pub fn select_best(&self, item: &InventoryItem) -> Option<ChosenSwap> {
        let mut best: Option<(usize, &SwapCandidate, Money)> = None;

        for (position, candidate) in self.filter.eligible(item) {
            let savings = item.savings_per_unit(candidate);
            // Strictly greater only: earlier candidates win ties.
            let better = match best {
                Some((_, _, current)) => savings > current,
                None => true,
            };
            if better {
                best = Some((position, candidate, savings));
            }
        }

        best.map(|(position, candidate, savings_per_unit)| ChosenSwap {
            candidate: candidate.clone(),
            position,
            savings_per_unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use swapwise_inventory::InventoryRecord;

    fn swap(name: &str, price: Decimal, tag: &str) -> SwapCandidate {
        SwapCandidate::new(name, "Vendor", Money::new(price), tag)
    }

    fn item(swaps: Vec<SwapCandidate>) -> InventoryItem {
        InventoryRecord::new("inv-001", "Surgical Gloves (Medium)", 75, 100, Money::new(dec!(0.23)))
            .with_swaps(swaps)
            .validate()
            .unwrap()
    }

    #[test]
    fn picks_largest_saving() {
        let item = item(vec![swap("a", dec!(0.18), "Approved"), swap("b", dec!(0.12), "Approved")]);
        let chosen = BestSwapSelector::default().select_best(&item).unwrap();
        assert_eq!(chosen.candidate.name, "b");
        assert_eq!(chosen.position, 1);
        assert_eq!(chosen.savings_per_unit, Money::new(dec!(0.11)));
    }

    #[test]
    fn skips_non_compliant_candidates() {
        let item = item(vec![swap("a", dec!(0.18), "Approved"), swap("b", dec!(0.12), "Pending Review")]);
        let chosen = BestSwapSelector::default().select_best(&item).unwrap();
        assert_eq!(chosen.candidate.name, "a");
        assert_eq!(chosen.savings_per_unit, Money::new(dec!(0.05)));
    }

    #[test]
    fn ties_go_to_the_earliest_candidate() {
        let item = item(vec![
            swap("first", dec!(0.15), "Approved"),
            swap("second", dec!(0.15), "Approved"),
            swap("third", dec!(0.20), "Approved"),
        ]);
        let chosen = BestSwapSelector::default().select_best(&item).unwrap();
        assert_eq!(chosen.candidate.name, "first");
        assert_eq!(chosen.position, 0);
    }

    #[test]
    fn no_swaps_or_no_compliant_swaps_is_none() {
        assert_eq!(BestSwapSelector::default().select_best(&item(vec![])), None);
        let item = item(vec![swap("a", dec!(0.01), "approved"), swap("b", dec!(0.02), "")]);
        assert_eq!(BestSwapSelector::default().select_best(&item), None);
    }

    #[test]
    fn negative_saving_is_still_selected_when_best() {
        let item = item(vec![swap("pricier", dec!(0.30), "Approved"), swap("even-pricier", dec!(0.40), "Approved")]);
        let chosen = BestSwapSelector::default().select_best(&item).unwrap();
        assert_eq!(chosen.candidate.name, "pricier");
        assert_eq!(chosen.savings_per_unit, Money::new(dec!(-0.07)));
    }

    #[test]
    fn zero_saving_is_selectable() {
        let item = item(vec![swap("same", dec!(0.23), "Approved")]);
        let chosen = BestSwapSelector::default().select_best(&item).unwrap();
        assert!(chosen.savings_per_unit.is_zero());
    }

    proptest! {
        /// Property: the chosen candidate is compliant, no compliant candidate
        /// saves more, and no earlier compliant candidate saves as much.
        #[test]
        fn selection_is_optimal_and_stable(
            swaps in prop::collection::vec((0i64..100, any::<bool>()), 0..12)
        ) {
            let candidates: Vec<SwapCandidate> = swaps
                .iter()
                .enumerate()
                .map(|(i, (cents, ok))| {
                    swap(&format!("c{i}"), Decimal::new(*cents, 2), if *ok { "Approved" } else { "Rejected" })
                })
                .collect();
            let item = item(candidates);
            let chosen = BestSwapSelector::default().select_best(&item);

            let compliant: Vec<(usize, i64)> = swaps
                .iter()
                .enumerate()
                .filter(|(_, (_, ok))| *ok)
                .map(|(i, (cents, _))| (i, *cents))
                .collect();

            match chosen {
                None => prop_assert!(compliant.is_empty()),
                Some(chosen) => {
                    let min_price = compliant.iter().map(|(_, c)| *c).min().unwrap();
                    let first_at_min = compliant.iter().find(|(_, c)| *c == min_price).unwrap().0;
                    prop_assert_eq!(chosen.position, first_at_min);
                }
            }
        }
    }
}

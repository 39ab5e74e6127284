use swapwise_core::Money;
use swapwise_inventory::InventoryItem;

use crate::selector::ChosenSwap;

/// Scales a per-unit saving to the item's full-stock capacity.
///
/// `potential_savings = savings_per_unit(best) * total_stock`, or zero when
/// there is no swap. The result keeps its sign; a negative figure is a cost
/// increase and is reported as such.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavingsAggregator;

impl SavingsAggregator {
    pub fn potential_savings(&self, item: &InventoryItem, best: Option<&ChosenSwap>) -> Money {
        match best {
            None => Money::ZERO,
            // Validated items keep every price x capacity in range, so this
            // never saturates for them.
            Some(chosen) => item
                .savings_per_unit(&chosen.candidate)
                .saturating_times(item.total_stock()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use swapwise_inventory::{InventoryRecord, SwapCandidate};

    fn item(current: i64, total: i64) -> InventoryItem {
        InventoryRecord::new("inv-001", "Gloves", current, total, Money::new(dec!(0.23)))
            .validate()
            .unwrap()
    }

    fn chosen(price: rust_decimal::Decimal) -> ChosenSwap {
        ChosenSwap {
            candidate: SwapCandidate::new("b", "v", Money::new(price), "Approved"),
            position: 0,
            savings_per_unit: Money::new(dec!(0.23) - price),
        }
    }

    #[test]
    fn absent_swap_is_zero() {
        assert_eq!(SavingsAggregator.potential_savings(&item(10, 100), None), Money::ZERO);
    }

    #[test]
    fn scales_by_capacity_not_current_stock() {
        let best = chosen(dec!(0.12));
        assert_eq!(
            SavingsAggregator.potential_savings(&item(15, 100), Some(&best)),
            Money::new(dec!(11.00))
        );
        assert_eq!(
            SavingsAggregator.potential_savings(&item(100, 100), Some(&best)),
            Money::new(dec!(11.00))
        );
    }

    #[test]
    fn keeps_negative_sign() {
        let best = chosen(dec!(0.30));
        assert_eq!(
            SavingsAggregator.potential_savings(&item(50, 100), Some(&best)),
            Money::new(dec!(-7))
        );
    }
}

use swapwise_inventory::{InventoryItem, SwapCandidate};

use crate::config::DEFAULT_APPROVED_TAG;

/// Decides which substitutes are usable.
///
/// A candidate is eligible iff its compliance tag equals the approved tag
/// exactly. Empty and unknown tags are simply not eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceFilter {
    approved_tag: String,
}

impl Default for ComplianceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVED_TAG)
    }
}

impl ComplianceFilter {
    pub fn new(approved_tag: impl Into<String>) -> Self {
        Self {
            approved_tag: approved_tag.into(),
        }
    }

    pub fn approved_tag(&self) -> &str {
        &self.approved_tag
    }

    pub fn is_eligible(&self, candidate: &SwapCandidate) -> bool {
        candidate.compliance.is(&self.approved_tag)
    }

    /// Eligible substitutes of `item` with their list position.
    pub fn eligible<'a>(
        &'a self,
        item: &'a InventoryItem,
    ) -> impl Iterator<Item = (usize, &'a SwapCandidate)> + 'a {
        item.swaps()
            .iter()
            .enumerate()
            .filter(move |(_, c)| self.is_eligible(c))
    }
}

//! In-memory catalog of inventory records, as handed over by the catalog source.

use serde::{Deserialize, Serialize};

use swapwise_core::{DomainError, DomainResult};

use crate::item::InventoryRecord;

/// Ordered collection of raw inventory records.
///
/// Records are kept unvalidated so that batch evaluation can report malformed
/// rows per item instead of rejecting the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<InventoryRecord>,
}

impl Catalog {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: InventoryRecord) {
        self.records.push(record);
    }

    /// Look up a record by id (first match wins).
    pub fn get(&self, id: &str) -> DomainResult<&InventoryRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Case-insensitive substring match on name, SKU or category.
    ///
    /// A blank query matches every record. Input order is preserved.
    pub fn search(&self, query: &str) -> Vec<&InventoryRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || [&r.name, &r.sku, &r.category]
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl FromIterator<InventoryRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = InventoryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InventoryRecord;
    type IntoIter = core::slice::Iter<'a, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

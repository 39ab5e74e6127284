//! Inventory domain module.
//!
//! Raw catalog records, their validated form, and the substitute products a
//! vendor may offer for them. Pure data + invariants (no IO, no storage).

pub mod catalog;
pub mod item;
pub mod swap;

pub use catalog::Catalog;
pub use item::{InventoryItem, InventoryRecord};
pub use swap::{ComplianceTag, SwapCandidate};

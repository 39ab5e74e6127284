//! Purchasing domain module (purchase order history).
//!
//! Orders are read-only inputs recorded by the order store; this crate only
//! models them and their invariants, plus list filtering and sorting.

pub mod order;
pub mod query;

pub use order::{Order, OrderLineItem, OrderRecord, OrderStatus};
pub use query::{OrderQuery, OrderSortKey, SortDirection};

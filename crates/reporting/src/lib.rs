//! `swapwise-reporting`: read-side rollups for dashboards.
//!
//! Pure aggregation over orders and evaluated inventory. Nothing here derives
//! savings on its own; it only counts and sums what it is given.

pub mod grouping;
pub mod inventory;
pub mod orders;
pub mod reporter;

pub use grouping::{DEFAULT_DEPARTMENT, DEFAULT_URGENCY, NO_VENDOR, OrderGroup, OrderGrouping, group_orders};
pub use inventory::{InventoryRollup, summarize_evaluations, top_opportunities};
pub use orders::{OrderRollup, summarize};
pub use reporter::RollupReporter;

//! Host side of the substitution engine: load records, evaluate, report.

pub mod report;

pub use report::{InvalidRow, LoadedCatalog, Report, ReportOptions, build_report, load_catalog, load_orders, parse_catalog};

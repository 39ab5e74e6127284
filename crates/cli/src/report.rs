//! Report assembly for `swapwise-report`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use swapwise_core::{DomainError, ItemId, find_by_id};
use swapwise_inventory::{Catalog, InventoryRecord};
use swapwise_purchasing::Order;
use swapwise_reporting::{InventoryRollup, OrderRollup, RollupReporter};
use swapwise_substitution::{EngineConfig, EvaluatedItem, ItemEvaluation, SubstitutionEngine};

/// A catalog row that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidRow {
    pub record_id: String,
    pub reason: String,
}

/// Everything printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub evaluations: Vec<EvaluatedItem>,
    pub invalid_records: Vec<InvalidRow>,
    pub inventory: InventoryRollup,
    pub top_opportunities: Vec<EvaluatedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<OrderRollup>,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub config: EngineConfig,
    /// `0` or `1` evaluates on the calling thread.
    pub workers: usize,
    pub top: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            workers: 1,
            top: 5,
        }
    }
}

/// A catalog file split into rows that parsed and rows that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// Rows whose fields had the wrong shape, in file order.
    pub rejected: Vec<InvalidRow>,
}

/// Parse a catalog row by row; a malformed row is rejected on its own.
///
/// Only a file that is not a JSON array fails as a whole.
pub fn parse_catalog(raw: &str) -> Result<LoadedCatalog> {
    let rows: Vec<Value> = serde_json::from_str(raw).context("catalog must be a JSON array of items")?;
    let mut loaded = LoadedCatalog::default();

    for (idx, row) in rows.into_iter().enumerate() {
        let record_id = row
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{idx}"));
        match InventoryRecord::deserialize(row) {
            Ok(record) => loaded.catalog.push(record),
            Err(err) => {
                let error = DomainError::invalid_record(format!("{record_id}: {err}"));
                tracing::warn!(record_id = %record_id, error = %error, "skipping malformed catalog row");
                loaded.rejected.push(InvalidRow {
                    record_id,
                    reason: error.to_string(),
                });
            }
        }
    }

    Ok(loaded)
}

pub fn load_catalog(path: &Path) -> Result<LoadedCatalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Orders are validated as they are parsed; one bad order fails the file.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading orders {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing orders {}", path.display()))
}

impl Report {
    pub fn evaluation(&self, id: &ItemId) -> Option<&EvaluatedItem> {
        find_by_id(&self.evaluations, id)
    }
}

pub fn build_report(loaded: &LoadedCatalog, orders: Option<&[Order]>, options: &ReportOptions) -> Result<Report> {
    let catalog = &loaded.catalog;
    let engine = SubstitutionEngine::new(options.config.clone()).context("invalid engine configuration")?;
    let reporter = RollupReporter::new();

    let evaluations = if options.workers > 1 {
        engine.evaluate_all_parallel(catalog.records(), options.workers)
    } else {
        engine.evaluate_all(catalog.records())
    };

    let mut inventory = reporter.summarize_evaluations(&evaluations);
    inventory.invalid += loaded.rejected.len();
    let top_opportunities = reporter
        .top_opportunities(&evaluations, options.top)
        .into_iter()
        .cloned()
        .collect();
    let orders = orders.map(|orders| reporter.summarize(orders));

    let mut evaluated = Vec::with_capacity(evaluations.len());
    let mut invalid_records = loaded.rejected.clone();
    for evaluation in evaluations {
        match evaluation {
            ItemEvaluation::Evaluated(item) => evaluated.push(item),
            ItemEvaluation::Invalid { record_id, error } => invalid_records.push(InvalidRow {
                record_id,
                reason: error.to_string(),
            }),
        }
    }

    Ok(Report {
        evaluations: evaluated,
        invalid_records,
        inventory,
        top_opportunities,
        orders,
    })
}

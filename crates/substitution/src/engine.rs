//! Per-item substitution evaluation and the batch API over a catalog.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use swapwise_core::{DomainError, DomainResult, Entity, ItemId, Money};
use swapwise_inventory::{InventoryItem, InventoryRecord};

use crate::classifier::{StockStatus, StockStatusClassifier};
use crate::compliance::ComplianceFilter;
use crate::config::EngineConfig;
use crate::savings::SavingsAggregator;
use crate::selector::{BestSwapSelector, ChosenSwap};

/// Derived view of one inventory item.
///
/// Recomputed on every evaluation; never cached or written back to the source
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedItem {
    pub item_id: ItemId,
    pub status: StockStatus,
    /// `None` when no compliant substitute exists.
    pub chosen_swap: Option<ChosenSwap>,
    /// Signed; zero when `chosen_swap` is `None`.
    pub potential_savings: Money,
    /// `unit_price * required_units`; `None` when out of range.
    pub demand_cost: Option<Money>,
}

impl EvaluatedItem {
    /// Distinguishes "no opportunity" from "an opportunity worth zero".
    pub fn has_opportunity(&self) -> bool {
        self.chosen_swap.is_some()
    }

    /// Potential savings clamped at zero, for display.
    pub fn display_savings(&self) -> Money {
        self.potential_savings.clamp_non_negative()
    }

    /// Potential savings as a whole percentage of the demand cost.
    ///
    /// `None` unless savings are positive and the demand cost is non-zero.
    pub fn savings_percent(&self) -> Option<Decimal> {
        if !self.potential_savings.is_positive() {
            return None;
        }
        self.potential_savings.percent_of(self.demand_cost?)
    }
}

impl Entity for EvaluatedItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.item_id
    }
}

/// Outcome for one record of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEvaluation {
    Evaluated(EvaluatedItem),
    /// The record failed validation and was not evaluated.
    Invalid { record_id: String, error: DomainError },
}

impl ItemEvaluation {
    pub fn record_id(&self) -> &str {
        match self {
            ItemEvaluation::Evaluated(e) => e.item_id.as_str(),
            ItemEvaluation::Invalid { record_id, .. } => record_id,
        }
    }

    pub fn evaluated(&self) -> Option<&EvaluatedItem> {
        match self {
            ItemEvaluation::Evaluated(e) => Some(e),
            ItemEvaluation::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match self {
            ItemEvaluation::Evaluated(_) => None,
            ItemEvaluation::Invalid { error, .. } => Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ItemEvaluation::Evaluated(_))
    }
}

/// Result of a batch that may have been cancelled part-way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellableBatch {
    /// Evaluations for the leading records processed before cancellation.
    pub evaluations: Vec<ItemEvaluation>,
    pub cancelled: bool,
}

/// Orchestrates classification, swap selection and savings for inventory items.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionEngine {
    classifier: StockStatusClassifier,
    selector: BestSwapSelector,
    aggregator: SavingsAggregator,
}

impl Default for SubstitutionEngine {
    fn default() -> Self {
        Self::from_valid_config(&EngineConfig::default())
    }
}

impl SubstitutionEngine {
    pub fn new(config: EngineConfig) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &EngineConfig) -> Self {
        Self {
            classifier: StockStatusClassifier::from_config(config),
            selector: BestSwapSelector::new(ComplianceFilter::new(config.approved_tag.clone())),
            aggregator: SavingsAggregator,
        }
    }

    pub fn classifier(&self) -> &StockStatusClassifier {
        &self.classifier
    }

    pub fn selector(&self) -> &BestSwapSelector {
        &self.selector
    }

    /// Evaluate a validated item: status, then best swap, then savings.
    pub fn evaluate(&self, item: &InventoryItem) -> EvaluatedItem {
        let status = self.classifier.classify(item);
        let chosen_swap = self.selector.select_best(item);
        let potential_savings = self.aggregator.potential_savings(item, chosen_swap.as_ref());

        debug!(
            item_id = %item.id_typed(),
            status = %status,
            swap = chosen_swap.as_ref().map(|c| c.candidate.name.as_str()),
            potential_savings = %potential_savings,
            "evaluated inventory item"
        );

        EvaluatedItem {
            item_id: item.id_typed().clone(),
            status,
            chosen_swap,
            potential_savings,
            demand_cost: item.demand_cost(),
        }
    }

    /// Validate a raw record, then evaluate it.
    pub fn evaluate_record(&self, record: &InventoryRecord) -> DomainResult<EvaluatedItem> {
        let item = record.validate()?;
        Ok(self.evaluate(&item))
    }

    /// Evaluate every record independently, in input order.
    ///
    /// Invalid records produce [`ItemEvaluation::Invalid`]; the rest of the
    /// batch is still evaluated.
    pub fn evaluate_all(&self, records: &[InventoryRecord]) -> Vec<ItemEvaluation> {
        let evaluations: Vec<ItemEvaluation> = records.iter().map(|r| self.evaluate_one(r)).collect();
        log_batch(&evaluations);
        evaluations
    }

    /// Same output as [`Self::evaluate_all`], computed on up to `workers`
    /// scoped threads over contiguous chunks.
    pub fn evaluate_all_parallel(&self, records: &[InventoryRecord], workers: usize) -> Vec<ItemEvaluation> {
        let workers = workers.max(1);
        if workers == 1 || records.len() < 2 {
            return self.evaluate_all(records);
        }

        let chunk_size = records.len().div_ceil(workers);
        let evaluations: Vec<ItemEvaluation> = thread::scope(|scope| {
            let handles: Vec<_> = records
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || chunk.iter().map(|r| self.evaluate_one(r)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        log_batch(&evaluations);
        evaluations
    }

    /// Evaluate in order, checking `cancel` before each record.
    pub fn evaluate_all_cancellable(&self, records: &[InventoryRecord], cancel: &AtomicBool) -> CancellableBatch {
        let mut evaluations = Vec::with_capacity(records.len());
        let mut cancelled = false;

        for record in records {
            if cancel.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
            evaluations.push(self.evaluate_one(record));
        }

        if cancelled {
            info!(
                completed = evaluations.len(),
                remaining = records.len() - evaluations.len(),
                "catalog evaluation cancelled"
            );
        } else {
            log_batch(&evaluations);
        }

        CancellableBatch { evaluations, cancelled }
    }

    fn evaluate_one(&self, record: &InventoryRecord) -> ItemEvaluation {
        match self.evaluate_record(record) {
            Ok(evaluated) => ItemEvaluation::Evaluated(evaluated),
            Err(error) => {
                warn!(record_id = %record.id, error = %error, "skipping invalid inventory record");
                ItemEvaluation::Invalid {
                    record_id: record.id.clone(),
                    error,
                }
            }
        }
    }
}

fn log_batch(evaluations: &[ItemEvaluation]) {
    let invalid = evaluations.iter().filter(|e| !e.is_valid()).count();
    info!(
        evaluated = evaluations.len() - invalid,
        invalid,
        "evaluated inventory catalog"
    );
}

//! `swapwise-substitution`
//!
//! **Responsibility:** vendor substitution and savings optimisation.
//!
//! - Classify stock urgency from current-to-capacity ratio.
//! - Keep only compliant substitutes, pick the one saving the most per unit.
//! - Scale the per-unit saving to full-stock capacity.
//!
//! Everything here is a pure function of the input records and the
//! [`EngineConfig`]: no IO, no clock, no randomness, no shared mutable state.

pub mod classifier;
pub mod compliance;
pub mod config;
pub mod engine;
pub mod savings;
pub mod selector;

pub use classifier::{StockStatus, StockStatusClassifier};
pub use compliance::ComplianceFilter;
pub use config::{DEFAULT_APPROVED_TAG, EngineConfig};
pub use engine::{CancellableBatch, EvaluatedItem, ItemEvaluation, SubstitutionEngine};
pub use savings::SavingsAggregator;
pub use selector::{BestSwapSelector, ChosenSwap};

//! `swapwise-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory,
//! purchasing and substitution crates (no IO, no storage, no clock).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, OrderId};
pub use money::Money;

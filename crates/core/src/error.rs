//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, data-driven failures. Absence of a
/// substitution opportunity is a normal result and never maps to an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record is structurally impossible (zero capacity, negative stock or
    /// prices, stock above capacity, ...).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A caller-supplied value failed validation (configuration, queries).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// True for errors that describe malformed input data.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord(_) | Self::InvalidId(_))
    }
}

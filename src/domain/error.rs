//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown job title: {0:?}")]
    UnknownTitle(String),

    #[error("unknown tier label: {0:?}")]
    UnknownTier(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid member document: {0}")]
    InvalidDocument(String),
}

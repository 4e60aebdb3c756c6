//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
///
/// Directory lookups fail with a three-way taxonomy: not-found, malformed
/// record, store unavailable. Callers must keep these distinct from a
/// negative evaluation result; "could not determine" is never reported as
/// "cannot evaluate".
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("malformed member record {id:?}: {source}")]
    MalformedRecord {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("member store unavailable: {context}")]
    StoreUnavailable {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

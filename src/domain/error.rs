//! Domain errors

use thiserror::Error;

/// Errors surfaced by the service layer and its storage collaborator.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The referenced UUID does not correspond to any stored student, or
    /// its status could not be determined because of a storage fault.
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// Data-access failure reported by the storage layer.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

use super::types::PetId;

/// Outcomes of a store operation that did not produce a value.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The requested id is not in the collection. Terminal, not retryable.
    #[error("Could not find pet with ID {0}")]
    NotFound(PetId),
}

pub type Result<T> = std::result::Result<T, StoreError>;

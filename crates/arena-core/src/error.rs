use thiserror::Error;

/// Result type for [`FighterRepository`](crate::FighterRepository) operations.
pub type Result<T> = std::result::Result<T, FighterError>;

/// An input string failed the naming pattern.
///
/// `field` names the offending input, e.g. `name` or `skill[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("fighter already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

#[derive(Debug, Clone, Error)]
pub enum FighterError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("fighter already exists: {0}")]
    Conflict(String),
    #[error("fighter not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for FighterError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(name) => Self::Conflict(name),
            other => Self::Storage(other.to_string()),
        }
    }
}

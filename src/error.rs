use thiserror::Error;

use crate::store::StoreError;
use crate::types::ContentHash;

/// Failures surfaced by the analyzer core.
///
/// Every variant except `Internal` belongs to the closed taxonomy a
/// boundary layer maps onto user-facing statuses.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid filter value: {field} cannot be {value}")]
    InvalidFilterValue { field: &'static str, value: String },

    #[error("Conflicting filters: min_length ({min_length}) cannot be greater than max_length ({max_length})")]
    ConflictingFilters { min_length: i64, max_length: i64 },

    #[error("Value already exists: {0}")]
    DuplicateValue(ContentHash),

    #[error("Value does not exist")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[source] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidQuery,
    InvalidFilterValue,
    ConflictingFilters,
    DuplicateValue,
    NotFound,
    Internal,
}

impl AnalyzerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzerError::InvalidInput(_) => ErrorKind::InvalidInput,
            AnalyzerError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            AnalyzerError::InvalidFilterValue { .. } => ErrorKind::InvalidFilterValue,
            AnalyzerError::ConflictingFilters { .. } => ErrorKind::ConflictingFilters,
            AnalyzerError::DuplicateValue(_) => ErrorKind::DuplicateValue,
            AnalyzerError::NotFound => ErrorKind::NotFound,
            AnalyzerError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<StoreError> for AnalyzerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(id) => AnalyzerError::DuplicateValue(id),
            other => AnalyzerError::Internal(other),
        }
    }
}

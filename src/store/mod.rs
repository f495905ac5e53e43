//! The storage collaborator.
//!
//! Stores own uniqueness: `insert` must check and write in one atomic step
//! and report `StoreError::Duplicate` when the identity is already taken.

pub mod config;
pub mod directory;
pub mod memory;

use thiserror::Error;

use crate::fingerprint::TextRecord;
use crate::types::filters::FilterPredicate;
use crate::types::identifiers::ContentHash;

pub use config::StoreConfig;
pub use directory::DirectoryStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record already exists: {0}")]
    Duplicate(ContentHash),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Record integrity error: {0}")]
    Integrity(String),
    #[error("Store config mismatch: expected {expected:?}, found {found:?}")]
    ConfigMismatch {
        expected: StoreConfig,
        found: StoreConfig,
    },
    #[error("Store lock poisoned")]
    Poisoned,
}

pub trait RecordStore {
    fn insert(&self, record: TextRecord) -> Result<(), StoreError>;

    fn get(&self, id: &ContentHash) -> Result<Option<TextRecord>, StoreError>;

    /// Returns whether a record was removed.
    fn remove(&self, id: &ContentHash) -> Result<bool, StoreError>;

    /// Every record, ascending by id.
    fn all(&self) -> Result<Vec<TextRecord>, StoreError>;

    /// Records passing the metric constraints of `predicate`.
    ///
    /// `contains_character` is left to the caller.
    fn matching(&self, predicate: &FilterPredicate) -> Result<Vec<TextRecord>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| crate::selection::matches_metrics(predicate, record))
            .collect())
    }
}

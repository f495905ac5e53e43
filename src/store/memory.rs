use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{RecordStore, StoreError};
use crate::fingerprint::TextRecord;
use crate::types::filters::FilterPredicate;
use crate::types::identifiers::ContentHash;

/// In-process store. Safe to share across threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<ContentHash, TextRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, record: TextRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        match records.entry(record.id.clone()) {
            Entry::Occupied(existing) => Err(StoreError::Duplicate(existing.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, id: &ContentHash) -> Result<Option<TextRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(id).cloned())
    }

    fn remove(&self, id: &ContentHash) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.remove(id).is_some())
    }

    fn all(&self) -> Result<Vec<TextRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn matching(&self, predicate: &FilterPredicate) -> Result<Vec<TextRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records
            .values()
            .filter(|record| crate::selection::matches_metrics(predicate, record))
            .cloned()
            .collect())
    }
}

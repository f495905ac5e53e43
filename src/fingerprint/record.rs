use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::metrics;
use crate::types::identifiers::ContentHash;

/// Metrics derived once from a value. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: ContentHash,
    pub character_frequency_map: BTreeMap<String, usize>,
}

impl Fingerprint {
    pub fn compute(value: &str) -> Self {
        Self {
            length: metrics::length(value),
            is_palindrome: metrics::is_palindrome(value),
            unique_characters: metrics::unique_character_count(value),
            word_count: metrics::word_count(value),
            sha256_hash: metrics::content_hash(value),
            character_frequency_map: metrics::character_frequency(value),
        }
    }
}

/// A fingerprinted text value, keyed by the hash of its original form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: ContentHash,
    pub value: String,
    pub properties: Fingerprint,
    pub created_at: DateTime<Utc>,
}

impl TextRecord {
    /// Fingerprint `value` and stamp the creation time.
    ///
    /// The value is kept verbatim; `id` always equals `properties.sha256_hash`.
    pub fn ingest(value: impl Into<String>) -> Self {
        Self::ingest_at(value, Utc::now())
    }

    pub fn ingest_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = Fingerprint::compute(&value);

        TextRecord {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }

    /// True when `id` still matches the hash of `value`.
    pub fn is_consistent(&self) -> bool {
        self.id == ContentHash::from_value(&self.value) && self.id == self.properties.sha256_hash
    }
}

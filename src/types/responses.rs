use serde::{Deserialize, Serialize};

use crate::fingerprint::TextRecord;
use crate::types::filters::FilterPredicate;

/// Result of an explicit-filter listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredRecords {
    pub data: Vec<TextRecord>,
    pub count: usize,
    pub filters_applied: FilterPredicate,
}

impl FilteredRecords {
    pub fn new(data: Vec<TextRecord>, filters_applied: FilterPredicate) -> Self {
        Self {
            count: data.len(),
            data,
            filters_applied,
        }
    }
}

/// Echo of a free-text query and the predicate it was interpreted as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterPredicate,
}

/// Result of a natural-language listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalLanguageResult {
    pub data: Vec<TextRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Ingestion request. `value` is optional so a missing field can be
/// reported as `InvalidInput` instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub value: Option<String>,
}

impl AnalysisRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

use tracing::{debug, info, warn};

use crate::error::AnalyzerError;
use crate::fingerprint::TextRecord;
use crate::query::interpret;
use crate::selection::FilterEvaluator;
use crate::store::RecordStore;
use crate::types::filters::FilterPredicate;
use crate::types::identifiers::ContentHash;
use crate::types::responses::{
    AnalysisRequest, FilteredRecords, InterpretedQuery, NaturalLanguageResult,
};

/// The logical operations exposed to a transport layer.
pub struct TextAnalyzer<S> {
    store: S,
    evaluator: FilterEvaluator,
}

impl<S> TextAnalyzer<S>
where
    S: RecordStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            evaluator: FilterEvaluator,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fingerprint and store a new value.
    ///
    /// Uniqueness is decided by the store's atomic insert, not by a
    /// prior lookup.
    pub fn create(&self, request: AnalysisRequest) -> Result<TextRecord, AnalyzerError> {
        info!("Starting analysis for new value submission");

        let Some(value) = request.value else {
            warn!("Analysis rejected: value field is missing");
            return Err(AnalyzerError::InvalidInput("value field is required".into()));
        };

        let record = TextRecord::ingest(value);
        debug!(hash = %record.id, "Computed fingerprint");

        if let Err(e) = self.store.insert(record.clone()) {
            let err = AnalyzerError::from(e);
            if let AnalyzerError::DuplicateValue(id) = &err {
                warn!(hash = %id, "Analysis rejected: duplicate value");
            }
            return Err(err);
        }

        info!(
            hash = %record.id,
            is_palindrome = record.properties.is_palindrome,
            word_count = record.properties.word_count,
            "Stored analyzed value"
        );
        Ok(record)
    }

    pub fn get_by_value(&self, value: &str) -> Result<TextRecord, AnalyzerError> {
        let id = ContentHash::from_value(value);
        match self.store.get(&id)? {
            Some(record) => {
                debug!(hash = %id, "Retrieved value");
                Ok(record)
            }
            None => {
                debug!(hash = %id, "Value not found");
                Err(AnalyzerError::NotFound)
            }
        }
    }

    /// Explicit-filter listing. An all-absent predicate returns everything.
    pub fn list_by_filters(&self, predicate: FilterPredicate) -> Result<FilteredRecords, AnalyzerError> {
        let predicate = predicate.normalized();
        predicate.validate()?;

        info!(filters = ?predicate, "Listing values by filters");
        let data = self.run(&predicate)?;

        info!(count = data.len(), "Filter listing complete");
        Ok(FilteredRecords::new(data, predicate))
    }

    pub fn list_by_natural_language_query(
        &self,
        query: &str,
    ) -> Result<NaturalLanguageResult, AnalyzerError> {
        info!(query, "Processing natural language query");

        let predicate = interpret(query)?;
        debug!(filters = ?predicate, "Interpreted query");

        let data = self.run(&predicate)?;
        info!(count = data.len(), query, "Natural language query complete");

        Ok(NaturalLanguageResult {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: predicate,
            },
        })
    }

    pub fn delete_by_value(&self, value: &str) -> Result<(), AnalyzerError> {
        let id = ContentHash::from_value(value);
        if !self.store.remove(&id)? {
            debug!(hash = %id, "Delete failed: value not found");
            return Err(AnalyzerError::NotFound);
        }

        info!(hash = %id, "Deleted value");
        Ok(())
    }

    fn run(&self, predicate: &FilterPredicate) -> Result<Vec<TextRecord>, AnalyzerError> {
        let candidates = self.store.matching(predicate)?;
        let before = candidates.len();
        debug!(count = before, "Store returned candidates");

        let selected: Vec<TextRecord> = self
            .evaluator
            .refine(predicate, candidates.iter().collect())
            .into_iter()
            .cloned()
            .collect();

        if predicate.contains_character.is_some() {
            debug!(
                count = selected.len(),
                filtered_out = before - selected.len(),
                "Applied character filter"
            );
        }
        Ok(selected)
    }
}

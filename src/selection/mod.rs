pub mod evaluator;

pub use evaluator::{contains_character, matches_metrics};

use crate::fingerprint::TextRecord;
use crate::types::filters::FilterPredicate;

/// Records that satisfied a predicate, plus the echo of what was applied.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub records: Vec<&'a TextRecord>,
    pub filters_applied: FilterPredicate,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilterEvaluator;

impl FilterEvaluator {
    pub fn evaluate<'a, I>(&self, predicate: &FilterPredicate, records: I) -> Evaluation<'a>
    where
        I: IntoIterator<Item = &'a TextRecord>,
    {
        // 1. Metric constraints narrow the candidates
        let candidates: Vec<&TextRecord> = records
            .into_iter()
            .filter(|record| matches_metrics(predicate, record))
            .collect();

        // 2. Containment runs on what is left
        let records = self.refine(predicate, candidates);

        Evaluation {
            records,
            filters_applied: predicate.clone(),
        }
    }

    /// The containment pass alone, for candidates a store already narrowed.
    pub fn refine<'a>(
        &self,
        predicate: &FilterPredicate,
        candidates: Vec<&'a TextRecord>,
    ) -> Vec<&'a TextRecord> {
        candidates
            .into_iter()
            .filter(|record| contains_character(predicate, record))
            .collect()
    }
}

use crate::error::AnalyzerError;
use crate::types::filters::FilterPredicate;

use super::rules::RULES;

/// Case-folded, trimmed form of a free-text query.
pub fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Translate an informal English query into a validated predicate.
///
/// Fails with `InvalidQuery` for blank input, unparseable numbers, or a
/// query no rule recognizes; with `ConflictingFilters` or
/// `InvalidFilterValue` when the extracted bounds are inconsistent.
pub fn interpret(query: &str) -> Result<FilterPredicate, AnalyzerError> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Err(AnalyzerError::InvalidQuery("query cannot be empty".into()));
    }

    let mut predicate = FilterPredicate::new();
    for rule in RULES.iter() {
        rule.apply(&normalized, &mut predicate)?;
    }

    predicate.validate()?;

    if predicate.is_empty() {
        return Err(AnalyzerError::InvalidQuery(
            "unable to parse natural language query into valid filters".into(),
        ));
    }

    Ok(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_trims() {
        assert_eq!(normalize("  Single WORD\t"), "single word");
        assert_eq!(normalize(" \n "), "");
    }
}

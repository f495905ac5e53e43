use crate::fingerprint::TextRecord;
use crate::types::filters::FilterPredicate;

/// Range and equality checks on the stored metrics.
///
/// `contains_character` is not consulted here; it is a separate pass over
/// the original value.
pub fn matches_metrics(predicate: &FilterPredicate, record: &TextRecord) -> bool {
    let props = &record.properties;
    let length = props.length as i64;

    if let Some(expected) = predicate.is_palindrome {
        if props.is_palindrome != expected {
            return false;
        }
    }
    if let Some(min) = predicate.min_length {
        if length < min {
            return false;
        }
    }
    if let Some(max) = predicate.max_length {
        if length > max {
            return false;
        }
    }
    if let Some(words) = predicate.word_count {
        if props.word_count as i64 != words {
            return false;
        }
    }
    true
}

/// Case-sensitive substring check on the original value.
pub fn contains_character(predicate: &FilterPredicate, record: &TextRecord) -> bool {
    match predicate.contains_character.as_deref() {
        Some(c) if !c.is_empty() => record.value.contains(c),
        _ => true,
    }
}

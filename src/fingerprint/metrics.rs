//! Pure metric functions over a single text value.
//!
//! Case folding is `str::to_lowercase`; whitespace is anything
//! `char::is_whitespace` accepts. Counts are in Unicode scalar values.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::identifiers::ContentHash;

fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Character count with every whitespace character removed, internal runs included.
pub fn length(value: &str) -> usize {
    value.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = fold(value).chars().filter(|c| !c.is_whitespace()).collect();

    if normalized.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = normalized.len() - 1;
    while left < right {
        if normalized[left] != normalized[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Distinct case-folded characters, whitespace and punctuation included.
pub fn unique_character_count(value: &str) -> usize {
    fold(value).chars().collect::<BTreeSet<char>>().len()
}

pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

pub fn content_hash(value: &str) -> ContentHash {
    ContentHash::from_value(value)
}

/// Occurrences of each case-folded character, whitespace included.
///
/// Keys are single-character strings so the map serializes as a JSON object.
pub fn character_frequency(value: &str) -> BTreeMap<String, usize> {
    let mut frequency = BTreeMap::new();
    for c in fold(value).chars() {
        *frequency.entry(c.to_string()).or_insert(0) += 1;
    }
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_strips_all_whitespace() {
        assert_eq!(length(""), 0);
        assert_eq!(length("a b c"), 3);
        assert_eq!(length("  hello \t world\n"), 10);
    }

    #[test]
    fn palindrome_ignores_case_and_spaces() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("x"));
        assert!(is_palindrome("Never odd or even"));
        assert!(is_palindrome("Abba"));
        assert!(!is_palindrome("abca"));
        assert!(!is_palindrome("A man, a plan"));
    }

    #[test]
    fn unique_characters_keep_whitespace_and_punctuation() {
        assert_eq!(unique_character_count(""), 0);
        assert_eq!(unique_character_count("Aa"), 1);
        assert_eq!(unique_character_count("a b!"), 4);
    }

    #[test]
    fn word_count_collapses_separators() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("a  b   c"), 3);
        assert_eq!(word_count("\tone\n"), 1);
    }

    #[test]
    fn frequency_counts_every_position_once() {
        let freq = character_frequency("Hello World");
        assert_eq!(freq.get("l"), Some(&3));
        assert_eq!(freq.get("o"), Some(&2));
        assert_eq!(freq.get(" "), Some(&1));
        assert_eq!(freq.get("h"), Some(&1));
        assert_eq!(freq.get("H"), None);

        let total: usize = freq.values().sum();
        assert_eq!(total, "hello world".chars().count());
    }
}

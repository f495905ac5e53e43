use text_fingerprint::fingerprint::metrics;
use text_fingerprint::fingerprint::{Fingerprint, TextRecord};
use text_fingerprint::types::ContentHash;

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

fn fold_strip(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn invariant_same_value_same_identity() {
    let a = TextRecord::ingest("Hello world");
    let b = TextRecord::ingest("Hello world");

    assert_eq!(a.id, b.id);
    assert_eq!(a.properties, b.properties);
}

#[test]
fn invariant_identity_is_hash_of_original_value() {
    let record = TextRecord::ingest("  Mixed Case  ");

    assert_eq!(record.id, ContentHash::from_value("  Mixed Case  "));
    assert_eq!(record.id, record.properties.sha256_hash);
    assert_eq!(record.value, "  Mixed Case  ", "value must be kept verbatim");
    assert!(record.is_consistent());

    assert_ne!(record.id, ContentHash::from_value("mixed case"));
}

#[test]
fn golden_content_hashes() {
    assert_eq!(
        metrics::content_hash("").as_str(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        metrics::content_hash("abc").as_str(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        metrics::content_hash("hello world").as_str(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn invariant_hash_is_fixed_length_lowercase_hex() {
    for value in ["", "a", "a much longer value with spaces\tand tabs", "ÜNÏCØDÉ"] {
        let hash = metrics::content_hash(value);
        assert_eq!(hash.as_str().len(), ContentHash::HEX_LEN);
        assert!(hash
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn invariant_palindrome_matches_reversal() {
    for value in ["", "a", "Racecar", "step on no pets", "Was it a car", "ab", "Aa Bb aA"] {
        let normalized = fold_strip(value);
        assert_eq!(
            metrics::is_palindrome(value),
            normalized == reverse(&normalized),
            "palindrome mismatch for {value:?}"
        );
    }
}

#[test]
fn invariant_frequency_counts_every_character() {
    for value in ["", "Hello World", "  spaced   out  ", "MiXeD\tCaSe\n"] {
        let freq = metrics::character_frequency(value);
        let total: usize = freq.values().sum();
        assert_eq!(total, value.to_lowercase().chars().count());
        assert!(freq.keys().all(|k| k.chars().count() == 1));
    }
}

#[test]
fn fingerprint_of_phrase() {
    let fp = Fingerprint::compute("A man a plan");

    assert_eq!(fp.length, 9);
    assert!(!fp.is_palindrome);
    // a, ' ', m, n, p, l
    assert_eq!(fp.unique_characters, 6);
    assert_eq!(fp.word_count, 4);
    assert_eq!(fp.character_frequency_map.get("a"), Some(&4));
    assert_eq!(fp.character_frequency_map.get(" "), Some(&3));
}

#[test]
fn fingerprint_of_blank_value() {
    let fp = Fingerprint::compute("   ");

    assert_eq!(fp.length, 0);
    assert!(fp.is_palindrome);
    assert_eq!(fp.unique_characters, 1);
    assert_eq!(fp.word_count, 0);
    assert_eq!(fp.character_frequency_map.get(" "), Some(&3));
}

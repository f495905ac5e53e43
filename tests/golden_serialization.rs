use chrono::{TimeZone, Utc};
use text_fingerprint::fingerprint::TextRecord;
use text_fingerprint::types::{FilterPredicate, FilteredRecords, InterpretedQuery, NaturalLanguageResult};

fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn apple() -> TextRecord {
    TextRecord::ingest_at("Apple", Utc.timestamp_opt(0, 0).unwrap())
}

#[test]
fn golden_record_serialization() {
    let json_str = serde_json::to_string_pretty(&apple()).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "id": "f223faa96f22916294922b171a2696d868fd1f9129302eb41a45b2a2ea2ebbfd",
      "value": "Apple",
      "properties": {
        "length": 5,
        "is_palindrome": false,
        "unique_characters": 4,
        "word_count": 1,
        "sha256_hash": "f223faa96f22916294922b171a2696d868fd1f9129302eb41a45b2a2ea2ebbfd",
        "character_frequency_map": {
          "a": 1,
          "e": 1,
          "l": 1,
          "p": 2
        }
      },
      "created_at": "1970-01-01T00:00:00Z"
    }"#;

    assert_eq!(strip_ws(&json_str), strip_ws(EXPECTED_JSON), "record JSON mismatch against golden snapshot");

    let roundtrip: TextRecord = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, apple());
}

#[test]
fn golden_filters_applied_omits_absent_fields() {
    let predicate = FilterPredicate {
        min_length: Some(5),
        contains_character: Some("z".into()),
        ..FilterPredicate::default()
    };

    let json_str = serde_json::to_string(&predicate).unwrap();
    assert_eq!(json_str, r#"{"min_length":5,"contains_character":"z"}"#);

    let empty = serde_json::to_string(&FilterPredicate::default()).unwrap();
    assert_eq!(empty, "{}");
}

#[test]
fn golden_list_envelope_key_order() {
    let result = FilteredRecords::new(
        vec![apple()],
        FilterPredicate {
            is_palindrome: Some(false),
            ..FilterPredicate::default()
        },
    );

    let json_str = serde_json::to_string(&result).unwrap();

    let data_pos = json_str.find("\"data\":").unwrap();
    let count_pos = json_str.find("\"count\":1").unwrap();
    let filters_pos = json_str.find("\"filters_applied\":{\"is_palindrome\":false}").unwrap();

    assert!(data_pos < count_pos);
    assert!(count_pos < filters_pos);
}

#[test]
fn golden_natural_language_envelope() {
    let result = NaturalLanguageResult {
        data: vec![],
        count: 0,
        interpreted_query: InterpretedQuery {
            original: "single word palindrome".into(),
            parsed_filters: FilterPredicate {
                is_palindrome: Some(true),
                word_count: Some(1),
                ..FilterPredicate::default()
            },
        },
    };

    let json_str = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json_str,
        r#"{"data":[],"count":0,"interpreted_query":{"original":"single word palindrome","parsed_filters":{"is_palindrome":true,"word_count":1}}}"#
    );
}

#[test]
fn predicate_deserializes_with_missing_fields() {
    let predicate: FilterPredicate = serde_json::from_str(r#"{"word_count":2}"#).unwrap();
    assert_eq!(predicate.word_count, Some(2));
    assert!(predicate.is_palindrome.is_none());
    assert!(predicate.contains_character.is_none());
}

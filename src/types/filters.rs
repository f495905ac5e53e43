use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// Structured filter shared by the explicit and natural-language paths.
///
/// Absent fields are wildcards. Serialization skips them, so the
/// serialized predicate is exactly the set of filters that were applied.
/// Bounds are signed so that an interpreted "shorter than 0" can be
/// represented and then rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Explicit-path cleanup: an empty `contains_character` means no filter.
    pub fn normalized(mut self) -> Self {
        if self.contains_character.as_deref() == Some("") {
            self.contains_character = None;
        }
        self
    }

    /// Internal consistency checks, in order: length conflict, negative
    /// numeric fields, then the single-character constraint.
    ///
    /// An all-absent predicate is valid here; callers that need at least
    /// one filter check `is_empty` themselves.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if let (Some(min_length), Some(max_length)) = (self.min_length, self.max_length) {
            if min_length > max_length {
                return Err(AnalyzerError::ConflictingFilters {
                    min_length,
                    max_length,
                });
            }
        }

        for (field, value) in [
            ("min_length", self.min_length),
            ("max_length", self.max_length),
            ("word_count", self.word_count),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(AnalyzerError::InvalidFilterValue {
                        field,
                        value: v.to_string(),
                    });
                }
            }
        }

        if let Some(c) = &self.contains_character {
            if c.chars().count() != 1 {
                return Err(AnalyzerError::InvalidFilterValue {
                    field: "contains_character",
                    value: format!("{c:?}"),
                });
            }
        }

        Ok(())
    }
}

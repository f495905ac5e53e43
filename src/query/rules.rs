//! The ordered extraction cascade.
//!
//! Every rule runs against the normalized query. A matching rule writes
//! its fields unconditionally, so when two rules target the same field
//! the later one in `RULES` wins.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::AnalyzerError;
use crate::types::filters::FilterPredicate;

/// Source of a numeric field value.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Fixed(i64),
    /// Decimal digits in the first capture group, shifted by `offset`.
    Digits { offset: i64 },
    /// Spelled-out number in the first capture group.
    Spelled,
}

/// Source of the `contains_character` value.
#[derive(Debug, Clone, Copy)]
pub enum Letter {
    /// Single letter in the first capture group.
    Captured,
    Fixed(char),
}

/// One field assignment made by a matching rule.
#[derive(Debug, Clone, Copy)]
pub enum Write {
    IsPalindrome,
    WordCount(Number),
    MinLength(Number),
    MaxLength(Number),
    ContainsCharacter(Letter),
}

impl Write {
    fn reads_capture(&self) -> bool {
        matches!(
            self,
            Write::WordCount(Number::Digits { .. } | Number::Spelled)
                | Write::MinLength(Number::Digits { .. } | Number::Spelled)
                | Write::MaxLength(Number::Digits { .. } | Number::Spelled)
                | Write::ContainsCharacter(Letter::Captured)
        )
    }
}

#[derive(Debug)]
pub struct ExtractionRule {
    pub name: &'static str,
    pattern: Regex,
    writes: &'static [Write],
}

/// Panics if `pattern` is malformed or lacks the capture group its writes read.
fn rule(name: &'static str, pattern: &str, writes: &'static [Write]) -> ExtractionRule {
    let pattern = Regex::new(pattern).unwrap();
    if writes.iter().any(Write::reads_capture) {
        assert!(pattern.captures_len() >= 2, "rule {name} has no capture group");
    }
    ExtractionRule {
        name,
        pattern,
        writes,
    }
}

const CHARS: &str = r"(?:characters?|chars?)";

lazy_static! {
    pub static ref RULES: Vec<ExtractionRule> = vec![
        // word count
        rule("single_word", r"\b(?:single|one)\s+word\b", &[Write::WordCount(Number::Fixed(1))]),
        rule(
            "spelled_words",
            r"\b(two|three|four|five|six|seven|eight|nine|ten)\s+words?\b",
            &[Write::WordCount(Number::Spelled)],
        ),
        rule(
            "digit_words",
            r"\b([0-9]+)\s+words?\b",
            &[Write::WordCount(Number::Digits { offset: 0 })],
        ),
        // palindrome
        rule("palindrome", r"\bpalindrom(?:e|ic|es)\b", &[Write::IsPalindrome]),
        // length
        rule(
            "longer_than",
            r"\blonger\s+than\s+([0-9]+)\b",
            &[Write::MinLength(Number::Digits { offset: 1 })],
        ),
        rule(
            "shorter_than",
            r"\bshorter\s+than\s+([0-9]+)\b",
            &[Write::MaxLength(Number::Digits { offset: -1 })],
        ),
        rule(
            "at_least",
            &format!(r"\bat\s+least\s+([0-9]+)\s+{CHARS}\b"),
            &[Write::MinLength(Number::Digits { offset: 0 })],
        ),
        rule(
            "at_most",
            &format!(r"\bat\s+most\s+([0-9]+)\s+{CHARS}\b"),
            &[Write::MaxLength(Number::Digits { offset: 0 })],
        ),
        rule(
            "exactly",
            &format!(r"\bexactly\s+([0-9]+)\s+{CHARS}\b"),
            &[
                Write::MinLength(Number::Digits { offset: 0 }),
                Write::MaxLength(Number::Digits { offset: 0 }),
            ],
        ),
        rule(
            "min_length",
            r"\bmin(?:imum)?\s+length\s+([0-9]+)\b",
            &[Write::MinLength(Number::Digits { offset: 0 })],
        ),
        rule(
            "max_length",
            r"\bmax(?:imum)?\s+length\s+([0-9]+)\b",
            &[Write::MaxLength(Number::Digits { offset: 0 })],
        ),
        // character containment
        rule(
            "contains_letter",
            r"\bcontain(?:ing|s)?\s+(?:the\s+)?(?:letter|character)\s+([a-z])\b",
            &[Write::ContainsCharacter(Letter::Captured)],
        ),
        rule(
            "with_letter",
            r"\bwith\s+(?:the\s+)?letter\s+([a-z])\b",
            &[Write::ContainsCharacter(Letter::Captured)],
        ),
        // Positional table over a, e, i, o, u.
        rule("first_vowel", r"\b(?:first|1st)\s+vowel\b", &[Write::ContainsCharacter(Letter::Fixed('a'))]),
        rule("second_vowel", r"\b(?:second|2nd)\s+vowel\b", &[Write::ContainsCharacter(Letter::Fixed('e'))]),
        rule("third_vowel", r"\b(?:third|3rd)\s+vowel\b", &[Write::ContainsCharacter(Letter::Fixed('i'))]),
        rule("fourth_vowel", r"\b(?:fourth|4th)\s+vowel\b", &[Write::ContainsCharacter(Letter::Fixed('o'))]),
        rule("last_vowel", r"\b(?:last|5th|fifth)\s+vowel\b", &[Write::ContainsCharacter(Letter::Fixed('u'))]),
        rule(
            "vowel_letter",
            r"\bvowel\s+([a-z])\b",
            &[Write::ContainsCharacter(Letter::Captured)],
        ),
    ];
}

pub fn spelled_number(word: &str) -> Option<i64> {
    let n = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(n)
}

impl ExtractionRule {
    /// Apply this rule to `query`, overwriting fields in `predicate`.
    ///
    /// Returns whether the rule matched.
    pub fn apply(&self, query: &str, predicate: &mut FilterPredicate) -> Result<bool, AnalyzerError> {
        let Some(caps) = self.pattern.captures(query) else {
            return Ok(false);
        };

        for write in self.writes {
            match *write {
                Write::IsPalindrome => predicate.is_palindrome = Some(true),
                Write::WordCount(n) => predicate.word_count = Some(number(&caps, n)?),
                Write::MinLength(n) => predicate.min_length = Some(number(&caps, n)?),
                Write::MaxLength(n) => predicate.max_length = Some(number(&caps, n)?),
                Write::ContainsCharacter(l) => predicate.contains_character = Some(letter(&caps, l)),
            }
        }

        Ok(true)
    }
}

// Capture group 1 is present whenever a write reads it; `rule` checks this
// when the table is built.
fn number(caps: &Captures<'_>, source: Number) -> Result<i64, AnalyzerError> {
    match source {
        Number::Fixed(n) => Ok(n),
        Number::Digits { offset } => {
            let digits = &caps[1];
            digits
                .parse::<i64>()
                .ok()
                .and_then(|n| n.checked_add(offset))
                .ok_or_else(|| AnalyzerError::InvalidQuery(format!("number out of range: {digits}")))
        }
        Number::Spelled => {
            let word = &caps[1];
            spelled_number(word)
                .ok_or_else(|| AnalyzerError::InvalidQuery(format!("unable to parse word number: {word}")))
        }
    }
}

fn letter(caps: &Captures<'_>, source: Letter) -> String {
    match source {
        Letter::Captured => caps[1].to_string(),
        Letter::Fixed(c) => c.to_string(),
    }
}

//! Deterministic text fingerprinting with structured and free-text retrieval.
//!
//! `text-fingerprint` computes reproducible metrics for a text value (length,
//! palindrome flag, distinct characters, word count, SHA-256 identity,
//! character frequencies), stores the result through a pluggable
//! `RecordStore`, and selects stored records either by an explicit
//! `FilterPredicate` or by an English query translated through a fixed,
//! ordered rule cascade.

pub mod error;
pub mod fingerprint;
pub mod query;
pub mod selection;
pub mod service;
pub mod store;
pub mod types;

pub use error::{AnalyzerError, ErrorKind};
pub use service::TextAnalyzer;

pub mod filters;
pub mod identifiers;
pub mod responses;

pub use filters::FilterPredicate;
pub use identifiers::ContentHash;
pub use responses::{AnalysisRequest, FilteredRecords, InterpretedQuery, NaturalLanguageResult};

pub mod interpreter;
pub mod rules;

pub use interpreter::{interpret, normalize};
pub use rules::{ExtractionRule, Letter, Number, Write, RULES};

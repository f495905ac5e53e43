pub mod metrics;
pub mod record;

pub use crate::types::identifiers::ContentHash;
pub use record::{Fingerprint, TextRecord};

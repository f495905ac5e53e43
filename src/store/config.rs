use serde::{Deserialize, Serialize};

/// Persisted layout settings for a `DirectoryStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::v0()
    }
}

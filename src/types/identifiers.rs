use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Record identity: lowercase hex SHA-256 of the original, unmodified value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub const HEX_LEN: usize = 64;

    pub fn from_value(value: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());

        let hash = hasher.finalize();

        ContentHash(hex::encode(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Schema fingerprints for identity and determinism checks

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 fingerprint of a schema's canonical form, rendered `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("sha256:{:x}", hash))
    }

    /// Compute a fingerprint from a canonical schema string
    pub fn of(canonical: &str) -> Self {
        Self::from_bytes(canonical.as_bytes())
    }

    /// The `sha256:<hex>` representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the given canonical string matches this fingerprint
    pub fn matches(&self, canonical: &str) -> bool {
        *self == Self::of(canonical)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_fingerprint() {
        let canonical = r#"{"type":"record","name":"A","fields":[]}"#;
        assert_eq!(Fingerprint::of(canonical), Fingerprint::of(canonical));
    }

    #[test]
    fn different_input_different_fingerprint() {
        let a = Fingerprint::of(r#"{"name":"A"}"#);
        let b = Fingerprint::of(r#"{"name":"B"}"#);
        assert_ne!(a, b);
    }

    #[test]
    fn prefix_and_matching() {
        let canonical = r#"{"name":"A"}"#;
        let fp = Fingerprint::of(canonical);
        assert!(fp.as_str().starts_with("sha256:"));
        assert!(fp.matches(canonical));
        assert!(!fp.matches("something else"));
    }
}

//! Domain-separated SHA-256 digests.
//!
//! Every digest in the harness is `sha256(domain || data)`. Domains are
//! null-terminated so no domain is a prefix of another domain's input.

use std::fmt;

use sha2::{Digest, Sha256};

/// Domain prefix for run report bytes.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYFINDER::RUN_REPORT::V1\0";

/// Domain prefix for policy snapshot bytes.
pub const DOMAIN_POLICY_SNAPSHOT: &[u8] = b"WAYFINDER::POLICY_SNAPSHOT::V1\0";

/// A SHA-256 digest, rendered as `"sha256:<lowercase hex>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Algorithm tag used in the rendered form.
    pub const ALGORITHM: &'static str = "sha256";

    /// Parse the rendered form. Hex digits may be upper or lower case.
    ///
    /// Returns `None` for another algorithm tag or a digest that is not
    /// exactly 32 bytes of hex.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (algorithm, hex_digest) = s.split_once(':')?;
        if algorithm != Self::ALGORITHM {
            return None;
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_digest, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    /// Lowercase hex of the raw digest.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.0)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::ALGORITHM, self.hex_digest())
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(hasher.finalize().into())
}

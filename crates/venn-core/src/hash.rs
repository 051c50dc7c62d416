//! Content hashing for deterministic layout verification.
//!
//! Produces a SHA-256 hash of placed coordinates, so two layout runs can be
//! compared bit-for-bit across platforms and runs.

use sha2::{Digest, Sha256};

use crate::math::Point2D;

/// A content hash digest (SHA-256, 32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    bytes: [u8; 32],
}

impl ContentHash {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash an ordered sequence of points by their exact bit patterns.
pub fn hash_points<'a, I>(points: I) -> ContentHash
where
    I: IntoIterator<Item = &'a Point2D>,
{
    let mut hasher = Sha256::new();
    let mut count: u64 = 0;
    for p in points {
        hasher.update(p.x.to_bits().to_le_bytes());
        hasher.update(p.y.to_bits().to_le_bytes());
        count += 1;
    }
    // Length suffix keeps a prefix from colliding with the full sequence.
    hasher.update(count.to_le_bytes());
    let result = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&result);
    ContentHash::from_bytes(bytes)
}

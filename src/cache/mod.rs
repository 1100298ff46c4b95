//! In-memory memoization of computed snapshots.
//!
//! The base table is immutable for the lifetime of a session, so the
//! filter parameters alone identify a filtered view and everything derived
//! from it. Snapshots are keyed by a SHA-256 fingerprint of the serialized
//! parameters and invalidated implicitly: a changed parameter is a changed
//! key. Memoization is a responsiveness feature only — correctness never
//! depends on a hit.

use std::collections::HashMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Compute the cache key for a set of filter parameters.
///
/// The value is serialized to JSON before hashing. Category sets are
/// `BTreeSet`s, so the serialization (and therefore the digest) is
/// deterministic. Returns a 64-character lowercase hex string.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// A fingerprint-keyed store of memoized values for one session.
#[derive(Debug)]
pub struct MemoCache<V> {
    entries: HashMap<String, V>,
}

impl<V> MemoCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, value: V) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

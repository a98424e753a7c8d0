//! In-memory ranked-result cache.
//!
//! Cache-aside: a lookup never triggers network activity; the search facade
//! stores ranked results after a fetch. The cache is a bounded LRU so a
//! long-lived session cannot grow without limit. A snapshot can be saved to
//! a binary file and reloaded to start warm.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::{Deserialize, Serialize};

use crate::ranker::RankedResult;

/// One cached query result. Entries are immutable once stored; callers only
/// ever receive clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub result: RankedResult,
    pub fetched_at: DateTime<Utc>,
}

pub struct QueryCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Clone of the ranked result for `key`, if cached. Promotes the entry.
    pub fn lookup(&self, key: &str) -> Option<RankedResult> {
        let mut entries = self.entries.lock().unwrap();
        entries.get(key).map(|entry| entry.result.clone())
    }

    /// Full entry view without promoting it.
    pub fn peek(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.lock().unwrap();
        entries.peek(key).cloned()
    }

    /// Store a ranked result. Re-storing identical content is a no-op; new
    /// content replaces the prior entry (last-write-wins).
    pub fn store(&self, key: &str, result: RankedResult) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(existing) = entries.peek(key) {
            if existing.result == result {
                return;
            }
        }
        entries.put(
            key.to_string(),
            CacheEntry {
                key: key.to_string(),
                result,
                fetched_at: Utc::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Save all entries to a binary snapshot file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let snapshot: Vec<CacheEntry> = {
            let entries = self.entries.lock().unwrap();
            // Iteration is most-recent-first.
            entries.iter().map(|(_, entry)| entry.clone()).collect()
        };
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), &snapshot)?;
        Ok(())
    }

    /// Load a snapshot file saved by [`QueryCache::save`].
    pub fn load<P: AsRef<Path>>(
        path: P,
        capacity: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let snapshot: Vec<CacheEntry> = bincode::deserialize_from(BufReader::new(file))?;

        let cache = Self::new(capacity);
        {
            let mut entries = cache.entries.lock().unwrap();
            // Insert oldest-first so recency survives the round trip.
            for entry in snapshot.into_iter().rev() {
                entries.put(entry.key.clone(), entry);
            }
        }
        Ok(cache)
    }

    /// Load a snapshot, falling back to an empty cache if the file is absent
    /// or unreadable.
    pub fn load_or_empty<P: AsRef<Path>>(path: P, capacity: usize) -> Self {
        match Self::load(&path, capacity) {
            Ok(cache) => {
                tracing::info!(
                    "Loaded cache snapshot: {} entries from {}",
                    cache.len(),
                    path.as_ref().display()
                );
                cache
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load cache snapshot from {}: {e}",
                    path.as_ref().display()
                );
                Self::new(capacity)
            }
        }
    }
}

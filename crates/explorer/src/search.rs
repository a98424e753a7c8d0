//! Search facade: encode, consult the cache, fetch on a miss, rank, store.

use std::sync::atomic::{AtomicU64, Ordering};

use go_core::{decode_moves, encode_moves, Coord};

use crate::cache::QueryCache;
use crate::client::NextMoveClient;
use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::ranker::{rank, RankedResult};

/// What one search call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Ranked continuations for the queried sequence.
    Ranked(RankedResult),
    /// A newer search was issued while this one was in flight; its result was
    /// dropped without touching the cache. Not an error, not data.
    Superseded,
}

pub struct Explorer {
    client: NextMoveClient,
    cache: QueryCache,
    ticket: AtomicU64,
}

impl Explorer {
    pub fn new(config: &ExplorerConfig) -> Self {
        let cache = match &config.cache_snapshot_path {
            Some(path) => QueryCache::load_or_empty(path, config.cache_capacity),
            None => QueryCache::new(config.cache_capacity),
        };

        Self {
            client: NextMoveClient::new(config),
            cache,
            ticket: AtomicU64::new(0),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Search for ranked continuations of a move sequence.
    ///
    /// Each call supersedes all earlier in-flight calls: when an older fetch
    /// resolves after a newer search was issued, its result is discarded and
    /// never overwrites a cache entry belonging to the newer query.
    pub async fn search(&self, moves: &[Coord]) -> Result<SearchOutcome, ExplorerError> {
        let key = encode_moves(moves);
        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(result) = self.cache.lookup(&key) {
            tracing::debug!("cache hit for [{key}]");
            return Ok(SearchOutcome::Ranked(result));
        }

        let raw = self.client.fetch(&key).await?;
        let ranked = rank(raw.as_ref().clone());

        if self.ticket.load(Ordering::SeqCst) != ticket {
            tracing::debug!("dropping superseded result for [{key}]");
            return Ok(SearchOutcome::Superseded);
        }

        self.cache.store(&key, ranked.clone());
        Ok(SearchOutcome::Ranked(ranked))
    }

    /// Search from an already-encoded query key, validating it first.
    pub async fn search_key(&self, key: &str) -> Result<SearchOutcome, ExplorerError> {
        let moves = decode_moves(key)?;
        self.search(&moves).await
    }
}

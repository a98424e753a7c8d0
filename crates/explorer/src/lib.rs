//! Next-move query and ranking engine for the bGo game database.
//!
//! The flow is cache-aside: encode the move sequence into its query key, try
//! the cache, fetch from the statistics service on a miss, rank, store, and
//! hand the ranked continuations to the caller.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod ranker;
pub mod search;
pub mod theme;

pub use cache::QueryCache;
pub use client::NextMoveClient;
pub use config::ExplorerConfig;
pub use error::ExplorerError;
pub use ranker::{rank, NextMoveStat, RankedResult};
pub use search::{Explorer, SearchOutcome};

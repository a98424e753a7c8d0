//! Command-line next-move search.
//!
//! Usage:
//!     nextmove pd dp
//!     nextmove pd+dp
//!     nextmove            (opening position)
//!
//! Configuration comes from the environment (see `ExplorerConfig`); a `.env`
//! file is honored.

use explorer::{Explorer, ExplorerConfig, SearchOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // "pd dp" and "pd+dp" both become the encoded key; no args queries the
    // opening position.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let key = args.join("+");

    let config = ExplorerConfig::from_env();
    let explorer = Explorer::new(&config);

    match explorer.search_key(&key).await? {
        SearchOutcome::Ranked(ranked) if ranked.is_empty() => {
            println!("No results found");
        }
        SearchOutcome::Ranked(ranked) => {
            println!("{:>4}  {:>8}  {:>6}  move", "rank", "games", "win%");
            for (i, stat) in ranked.iter().enumerate() {
                let win = stat
                    .win_rate
                    .map(|rate| format!("{:.1}", rate * 100.0))
                    .unwrap_or_else(|| "-".to_string());
                println!("{:>4}  {:>8}  {:>6}  {}", i + 1, stat.play_count, win, stat.coord);
            }
        }
        SearchOutcome::Superseded => {}
    }

    if let Some(path) = &config.cache_snapshot_path {
        if let Err(e) = explorer.cache().save(path) {
            tracing::warn!("failed to save cache snapshot to {path}: {e}");
        }
    }

    Ok(())
}

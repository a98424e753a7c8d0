//! Deterministic ranking of raw next-move statistics.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use go_core::Coord;

/// Aggregated outcome data for one candidate next move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMoveStat {
    pub coord: Coord,
    pub play_count: u64,
    /// Fraction of games won after this move, when the index knows it.
    pub win_rate: Option<f64>,
}

/// Ranked, de-duplicated candidate moves, best first.
pub type RankedResult = Vec<NextMoveStat>;

#[derive(Default)]
struct MergedStat {
    play_count: u64,
    weighted_rate: f64,
    rated_weight: u64,
    plain_rate_sum: f64,
    rated_entries: u32,
}

impl MergedStat {
    fn absorb(&mut self, stat: &NextMoveStat) {
        self.play_count += stat.play_count;
        if let Some(rate) = stat.win_rate {
            self.weighted_rate += rate * stat.play_count as f64;
            self.rated_weight += stat.play_count;
            self.plain_rate_sum += rate;
            self.rated_entries += 1;
        }
    }

    fn win_rate(&self) -> Option<f64> {
        if self.rated_weight > 0 {
            Some(self.weighted_rate / self.rated_weight as f64)
        } else if self.rated_entries > 0 {
            // Every rated duplicate had zero plays; fall back to a plain mean
            // rather than dropping a known rate.
            Some(self.plain_rate_sum / self.rated_entries as f64)
        } else {
            None
        }
    }
}

/// Rank raw statistics: merge duplicate coordinates, then sort by play count
/// descending, win rate descending, coordinate token ascending.
///
/// The tie-break chain is a total order, so the output is identical for any
/// permutation of the same input multiset. A correct index never emits
/// duplicates, but they are tolerated: counts sum and the win rate becomes
/// the play-count-weighted average. Empty input ranks to an empty result.
pub fn rank(stats: Vec<NextMoveStat>) -> RankedResult {
    let mut merged: BTreeMap<Coord, MergedStat> = BTreeMap::new();
    for stat in &stats {
        merged.entry(stat.coord).or_default().absorb(stat);
    }

    let mut ranked: RankedResult = merged
        .into_iter()
        .map(|(coord, m)| NextMoveStat {
            coord,
            play_count: m.play_count,
            win_rate: m.win_rate(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.play_count
            .cmp(&a.play_count)
            .then_with(|| cmp_rates(b.win_rate, a.win_rate))
            .then_with(|| a.coord.cmp(&b.coord))
    });

    ranked
}

/// Unknown rates sort below any known rate.
fn cmp_rates(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

use brl_core::RuleList;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::chain::ChainRun;
use crate::posterior::ListScore;

/// Accumulated statistics for one visited list structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListStats {
    /// Memoized log-space score of the list.
    pub score: ListScore,
    /// Number of post-burn-in iterations spent on the list.
    pub visits: u64,
}

/// Chain-local memoization table keyed by the canonical index tuple.
///
/// Likelihood evaluation touches every satisfaction set, so revisiting a
/// list must never recompute it. Each chain owns exactly one cache; caches
/// are only combined by [`merge_chains`], which consumes them.
#[derive(Debug, Clone, Default)]
pub struct PermutationCache {
    entries: IndexMap<Vec<usize>, ListStats>,
}

impl PermutationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized score for a list, if present.
    pub fn score_of(&self, key: &[usize]) -> Option<ListScore> {
        self.entries.get(key).map(|stats| stats.score)
    }

    /// Memoizes a score without counting a visit.
    pub fn insert_score(&mut self, key: Vec<usize>, score: ListScore) {
        self.entries
            .entry(key)
            .or_insert(ListStats { score, visits: 0 });
    }

    /// Counts one post-burn-in visit for the given list.
    pub fn record_visit(&mut self, key: Vec<usize>, score: ListScore) {
        self.entries
            .entry(key)
            .or_insert(ListStats { score, visits: 0 })
            .visits += 1;
    }

    /// Number of distinct lists seen by the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<usize>, &ListStats)> {
        self.entries.iter()
    }

    fn into_entries(self) -> IndexMap<Vec<usize>, ListStats> {
        self.entries
    }
}

/// Combined visit-mass table over all chains of one fit.
#[derive(Debug, Clone, Default)]
pub struct MergedCache {
    entries: IndexMap<Vec<usize>, ListStats>,
}

impl MergedCache {
    /// Number of distinct lists visited across all chains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no list was visited at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combined post-burn-in visit count for a list.
    pub fn mass(&self, key: &[usize]) -> u64 {
        self.entries.get(key).map(|stats| stats.visits).unwrap_or(0)
    }

    /// Selects the point estimate: the visited list with the highest
    /// combined mass, ties broken by shorter length then lexicographically
    /// smaller index tuple.
    ///
    /// Returns `None` when no chain visited any list beyond the default
    /// rule, which callers must treat as an untrained model.
    pub fn point_estimate(&self) -> Option<RuleList> {
        let mut best: Option<(&Vec<usize>, u64)> = None;
        for (key, stats) in &self.entries {
            if key.is_empty() || stats.visits == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_key, best_visits)) => {
                    stats.visits > best_visits
                        || (stats.visits == best_visits
                            && (key.len() < best_key.len()
                                || (key.len() == best_key.len() && key < best_key)))
                }
            };
            if better {
                best = Some((key, stats.visits));
            }
        }
        best.and_then(|(key, _)| RuleList::new(key.clone()).ok())
    }
}

/// Merges the chain caches into one combined table.
///
/// Consumes the runs: each chain's cache contributes its visit counts
/// exactly once, so re-merging the same mass twice is impossible by
/// construction.
pub fn merge_chains(runs: Vec<ChainRun>) -> MergedCache {
    let mut merged = MergedCache::default();
    for run in runs {
        for (key, stats) in run.cache.into_entries() {
            merged
                .entries
                .entry(key)
                .and_modify(|existing| existing.visits += stats.visits)
                .or_insert(stats);
        }
    }
    merged
}

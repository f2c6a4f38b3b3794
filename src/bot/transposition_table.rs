// Transposition table: position hash -> cached score.
//
// Two different move sequences frequently reach the same position; caching
// the score under the position's Zobrist hash lets the memoized search skip
// the whole subtree on the second encounter. Entries carry the remaining
// depth they were computed at, and a probe only hits when the cached entry
// is at least as deep as the depth the caller still needs - a shallower
// score is not a valid stand-in for a deeper search.
//
// Unbounded and unevicted: the table lives for a single turn and is dropped
// with its SearchContext, so it never grows past one turn's node count.

use std::collections::HashMap;

/// Cached score for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// Score from the perspective of the side to move at the hashed position.
    pub score: i32,
    /// Remaining search depth the score was computed with.
    pub depth: u32,
}

/// Per-turn score cache keyed by position hash. Hash collisions map two
/// positions to one entry; they are accepted, not detected.
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    /// Probes answered from the cache.
    pub hits: u64,
    /// Probes that found nothing usable.
    pub misses: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a cached score, requiring an entry computed with at least
    /// `min_depth` remaining plies. Updates hit/miss statistics.
    pub fn probe(&mut self, hash: u64, min_depth: u32) -> Option<i32> {
        match self.entries.get(&hash) {
            Some(entry) if entry.depth >= min_depth => {
                self.hits += 1;
                Some(entry.score)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a score, overwriting any existing entry unless that entry came
    /// from a deeper search.
    pub fn store(&mut self, hash: u64, depth: u32, score: i32) {
        match self.entries.get(&hash) {
            Some(existing) if existing.depth > depth => {}
            _ => {
                self.entries.insert(hash, TtEntry { score, depth });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of probes answered from the cache, 0.0 to 1.0.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

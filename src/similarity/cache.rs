// src/similarity/cache.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::SimilarityMetric;
use crate::lexicon::SenseId;

type PairKey = (SimilarityMetric, SenseId, SenseId);

/// Process-lifetime memo of pairwise scores, keyed by unordered sense pair.
/// Append-only: nothing is evicted or invalidated.
#[derive(Default)]
pub struct SimilarityCache {
    scores: RwLock<HashMap<PairKey, f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

impl SimilarityCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(metric: SimilarityMetric, a: SenseId, b: SenseId) -> PairKey {
        if a <= b {
            (metric, a, b)
        } else {
            (metric, b, a)
        }
    }

    /// Returns the cached score for the pair, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, metric: SimilarityMetric, a: SenseId, b: SenseId, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        let key = Self::key(metric, a, b);
        if let Some(&score) = self.scores.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return score;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let score = compute();
        *self.scores.write().entry(key).or_insert(score)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.scores.read().len(),
        }
    }
}

//! Counters of query cache usage.

use std::fmt;

/// Statistics of query evaluation over the lifetime of the registry.
///
/// Used for profiling and verifying that cached results are reused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Queries answered from the cache.
    pub hits: u64,
    /// Queries which had no cached result.
    pub misses: u64,
    /// Full scans over all registered entities.
    pub scans: u64,
    /// Cached results dropped because of invalidation or clearing.
    pub evictions: u64,
}

impl Statistics {
    /// Share of queries answered from the cache (0.0 to 1.0).
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses ({:.1}% hit ratio), {} scans, {} evictions",
            self.hits,
            self.misses,
            self.hit_ratio() * 100.0,
            self.scans,
            self.evictions,
        )
    }
}

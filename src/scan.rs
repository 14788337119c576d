//! The seed scanner: drives the whole computation.
//!
//! Seeds are processed strictly in ascending order because every seed
//! depends on the cache state its predecessors left behind. The scanner
//! owns all mutable state (the cache, the live scratch vector and the
//! counters), so there are no globals to reason about.

use crate::bitvec::BitVector;
use crate::cache::CycleCache;
use crate::report::{Reporter, SeedReport};
use crate::state::StateSpace;
use crate::stats::ScanStats;
use crate::trace::trace;
use crate::CyclescanError;

/// Knobs for a scan run. The defaults cover the full seed range;
/// `seed_limit` exists so demonstrations and tests can truncate the
/// range without touching the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub start_seed: u32,
    pub seed_limit: Option<u32>,
}

/// Walks the seed domain, consulting the cycle cache before falling back
/// to a full trace, and offering every fresh trace back to the cache.
pub struct Scanner<S: StateSpace> {
    space: S,
    cache: CycleCache,
    scratch: BitVector,
    stats: ScanStats,
}

impl<S: StateSpace> Scanner<S> {
    /// Allocates the first scratch vector, so an unworkable memory
    /// situation surfaces here rather than mid-scan.
    pub fn new(space: S) -> Result<Self, CyclescanError> {
        let scratch = BitVector::new(space.state_count())?;
        Ok(Self {
            space,
            cache: CycleCache::new(),
            scratch,
            stats: ScanStats::new(),
        })
    }

    /// Resolve a single seed.
    ///
    /// Cache first: if the seed's starting key lies on a retained
    /// fingerprint, the cycle is already characterized and the cached
    /// length is reported with `is_new = false`. Otherwise the trajectory
    /// is traced into the scratch vector and offered to the cache; when
    /// the cache keeps the vector a fresh one is allocated, when it hands
    /// it back it is reused for the next miss.
    pub fn scan_seed(&mut self, seed: u32) -> Result<SeedReport, CyclescanError> {
        self.stats.seeds_scanned += 1;
        let start = self.space.seed_state(seed);
        let key = self.space.encode(start);

        if let Some(length) = self.cache.lookup(key) {
            self.stats.cache_hits += 1;
            return Ok(SeedReport {
                seed,
                length,
                is_new: false,
            });
        }

        self.scratch.clear();
        let length = trace(&self.space, start, &mut self.scratch);
        self.stats.traces_run += 1;
        self.stats.states_marked += length;

        let fingerprint = std::mem::take(&mut self.scratch);
        match self.cache.consider(length, fingerprint) {
            Some(vector) => self.scratch = vector,
            None => {
                self.stats.cycles_retained += 1;
                self.scratch = BitVector::new(self.space.state_count())?;
            }
        }

        Ok(SeedReport {
            seed,
            length,
            is_new: true,
        })
    }

    /// Scan a seed range in ascending order, feeding every result to the
    /// reporter. Stops early only on a fatal error.
    pub fn run<R: Reporter>(
        &mut self,
        options: ScanOptions,
        reporter: &mut R,
    ) -> Result<(), CyclescanError> {
        let end = options
            .seed_limit
            .unwrap_or_else(|| self.space.seed_count())
            .min(self.space.seed_count());
        for seed in options.start_seed..end {
            let report = self.scan_seed(seed)?;
            reporter.record(&report)?;
        }
        reporter.finish()
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    pub fn cache(&self) -> &CycleCache {
        &self.cache
    }
}

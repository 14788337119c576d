//! Scan progress counters.
//!
//! `ScanStats` tracks how much work the scanner actually did: how many
//! seeds resolved from the cache versus a full trace, and how many traces
//! ended up retained. Tests also lean on `traces_run` to prove that
//! cached seeds were not re-traced.

#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub seeds_scanned: u64,
    pub cache_hits: u64,
    pub traces_run: u64,
    pub states_marked: u64,
    pub cycles_retained: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) {
        eprintln!(
            "Scanned {} seeds: {} cache hits, {} traces ({} states marked), {} cycles retained",
            self.seeds_scanned,
            self.cache_hits,
            self.traces_run,
            self.states_marked,
            self.cycles_retained
        );
    }
}

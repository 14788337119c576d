//! Cycle census of the sfc8 pseudo-random generator's seed space.
//!
//! For every seed in a 2^24-sized subset of the 2^32 state space, the
//! scanner measures the length of the deterministic trajectory that seed
//! falls into and reports only the seeds that discover a previously
//! uncharacterized cycle. Tracing uses a full-domain bit vector for O(1)
//! visited checks; a bounded cache of the longest cycles found so far
//! lets later seeds skip re-exploration entirely.

pub mod bitvec;
pub mod cache;
pub mod error;
pub mod report;
pub mod scan;
pub mod state;
pub mod stats;
pub mod survey_log;
pub mod trace;

pub use bitvec::BitVector;
pub use cache::{CycleCache, CycleRecord};
pub use error::CyclescanError;
pub use report::{CsvReporter, JsonReporter, MemoryReporter, Reporter, SeedReport};
pub use scan::{ScanOptions, Scanner};
pub use state::{Sfc8, Sfc8Space, StateSpace};
pub use stats::ScanStats;
pub use survey_log::{append_entry, read_entries, SurveyEntry};
pub use trace::trace;

/// Number of distinct generator states; also the key domain size.
pub const POSSIBLE_STATES: u64 = 1 << 32;
/// Number of seeds a full scan visits (three free bytes).
pub const SEED_SPACE: u32 = 1 << 24;
/// The counter byte every seeded state starts with.
pub const INITIAL_COUNTER: u8 = 1;
/// How many of the longest cycles the cache retains.
pub const TOP_CYCLES: usize = 7;
/// Footprint of one full-domain visited-set, in bytes.
pub const BIT_VECTOR_BYTES: u64 = POSSIBLE_STATES / 8;

/// Run a scan over the real sfc8 domain, feeding results to `reporter`,
/// and return the final statistics.
pub fn survey<R: Reporter>(
    options: ScanOptions,
    reporter: &mut R,
) -> Result<ScanStats, CyclescanError> {
    let mut scanner = Scanner::new(Sfc8Space)?;
    scanner.run(options, reporter)?;
    Ok(scanner.stats().clone())
}

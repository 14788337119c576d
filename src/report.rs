//! Rendering of the scanner's per-seed results.
//!
//! The scanner emits one [`SeedReport`] per seed and does not decide what
//! gets printed; reporters do, based on `is_new`. The canonical output is
//! CSV: a `seed,length` header, then one row per newly characterized
//! cycle with the seed as fixed-width hex.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::CyclescanError;

/// One scanned seed: the trajectory length that was measured or looked
/// up, and whether it came from a fresh trace (`is_new`) or the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub seed: u32,
    pub length: u64,
    pub is_new: bool,
}

impl SeedReport {
    /// The seed formatted the way every output surface prints it:
    /// `0x` plus six uppercase hex digits.
    pub fn seed_hex(&self) -> String {
        format!("0x{:06X}", self.seed)
    }
}

/// Consumer of the scanner's result stream.
pub trait Reporter {
    fn record(&mut self, report: &SeedReport) -> Result<(), CyclescanError>;

    /// Flush any buffered output. Called once after the scan.
    fn finish(&mut self) -> Result<(), CyclescanError> {
        Ok(())
    }
}

/// CSV reporter: header line up front, one row per new cycle, cached
/// seeds consumed silently.
pub struct CsvReporter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(writer: W) -> Result<Self, CyclescanError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["seed", "length"])?;
        Ok(Self { writer })
    }
}

impl<W: Write> Reporter for CsvReporter<W> {
    fn record(&mut self, report: &SeedReport) -> Result<(), CyclescanError> {
        if report.is_new {
            self.writer
                .write_record([report.seed_hex(), report.length.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CyclescanError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON reporter: collects new-cycle reports and writes one pretty
/// array on `finish`.
pub struct JsonReporter<W: Write> {
    writer: W,
    reports: Vec<SeedReport>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn record(&mut self, report: &SeedReport) -> Result<(), CyclescanError> {
        if report.is_new {
            self.reports.push(*report);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CyclescanError> {
        serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Keeps every report, cached or new. Used by tests and anywhere the
/// full stream is wanted in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub reports: Vec<SeedReport>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for MemoryReporter {
    fn record(&mut self, report: &SeedReport) -> Result<(), CyclescanError> {
        self.reports.push(*report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_hex_is_fixed_width_uppercase() {
        let report = SeedReport {
            seed: 0x2A,
            length: 3,
            is_new: true,
        };
        assert_eq!(report.seed_hex(), "0x00002A");
        let report = SeedReport {
            seed: 0xFFFFFF,
            length: 1,
            is_new: true,
        };
        assert_eq!(report.seed_hex(), "0xFFFFFF");
    }
}

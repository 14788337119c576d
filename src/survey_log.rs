//! Append-only binary log of cycle discoveries.
//!
//! Each newly characterized cycle can be appended as one bincode-framed
//! [`SurveyEntry`]. The log is an output artifact, not a checkpoint: the
//! scanner never reads it, and a half-finished scan cannot be resumed
//! from it because the cache fingerprints are not persisted.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::BufReader;
use std::path::Path;

use crate::CyclescanError;

/// One logged discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub seed: u32,
    pub length: u64,
}

/// Append one entry to the log at `path`, creating the file if needed.
pub fn append_entry<P: AsRef<Path>>(path: P, entry: &SurveyEntry) -> Result<(), CyclescanError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    bincode::serialize_into(&mut file, entry)
        .map_err(|e| CyclescanError::Log(format!("serializing entry: {e}")))
}

/// Read every entry back in append order.
///
/// Entries are length-delimited by their bincode framing; a trailing
/// partial record (from a killed writer) truncates the result rather
/// than failing it.
pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<SurveyEntry>, CyclescanError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut entries = Vec::new();
    loop {
        match bincode::deserialize_from::<_, SurveyEntry>(&mut reader) {
            Ok(entry) => entries.push(entry),
            Err(_) => break,
        }
    }
    Ok(entries)
}

use std::fs::OpenOptions;
use std::io::Write;

use cyclescan::{append_entry, read_entries, SurveyEntry};

#[test]
fn append_then_read_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.bin");

    let entries = [
        SurveyEntry { seed: 0, length: 4_094_304_959 },
        SurveyEntry { seed: 0x2A, length: 1 },
        SurveyEntry { seed: 0xFFFFFF, length: 42 },
    ];
    for entry in &entries {
        append_entry(&path, entry).unwrap();
    }

    assert_eq!(read_entries(&path).unwrap(), entries);
}

#[test]
fn trailing_partial_record_truncates_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.bin");

    let entry = SurveyEntry { seed: 7, length: 9 };
    append_entry(&path, &entry).unwrap();

    // Simulate a writer killed mid-record.
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&[0xAB, 0xCD]).unwrap();
    drop(file);

    assert_eq!(read_entries(&path).unwrap(), vec![entry]);
}

#[test]
fn missing_log_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_entries(dir.path().join("absent.bin")).is_err());
}

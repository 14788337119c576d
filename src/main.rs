use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use sysinfo::{System, SystemExt};

use cyclescan::{
    append_entry, CsvReporter, JsonReporter, Reporter, ScanOptions, Scanner, Sfc8Space,
    StateSpace, SurveyEntry, BIT_VECTOR_BYTES, TOP_CYCLES,
};

#[derive(Parser)]
struct Args {
    /// Write the CSV report here instead of stdout
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Also write the new-cycle reports as a JSON array
    #[arg(long)]
    json: Option<PathBuf>,
    /// Scan only the first N seeds
    #[arg(long)]
    seed_limit: Option<u32>,
    /// First seed to scan
    #[arg(long, default_value_t = 0)]
    start_seed: u32,
    /// Append each discovery to a binary survey log
    #[arg(long)]
    log: Option<PathBuf>,
    /// Show a progress bar on stderr
    #[arg(long)]
    progress: bool,
    /// Print scan statistics when done
    #[arg(long)]
    stats: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    warn_if_memory_tight();

    let space = Sfc8Space;
    let end = args
        .seed_limit
        .unwrap_or_else(|| space.seed_count())
        .min(space.seed_count());
    let options = ScanOptions {
        start_seed: args.start_seed,
        seed_limit: Some(end),
    };

    let out: Box<dyn Write> = match &args.csv {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut csv = CsvReporter::new(out)?;
    let mut json = match &args.json {
        Some(path) => Some(JsonReporter::new(File::create(path)?)),
        None => None,
    };

    let bar = if args.progress {
        let bar = ProgressBar::new(end.saturating_sub(options.start_seed) as u64);
        bar.set_style(ProgressStyle::with_template(
            "{elapsed_precise} [{bar:40}] {pos}/{len} seeds",
        )?);
        Some(bar)
    } else {
        None
    };

    let started = Instant::now();
    let mut scanner = Scanner::new(space)?;
    for seed in options.start_seed..end {
        let report = scanner.scan_seed(seed)?;
        csv.record(&report)?;
        if let Some(json) = json.as_mut() {
            json.record(&report)?;
        }
        if report.is_new {
            if let Some(path) = &args.log {
                let entry = SurveyEntry {
                    seed: report.seed,
                    length: report.length,
                };
                append_entry(path, &entry)?;
            }
        }
        if let Some(bar) = &bar {
            if seed % 4096 == 0 {
                bar.set_position((seed - options.start_seed) as u64);
            }
        }
    }
    csv.finish()?;
    if let Some(mut json) = json {
        json.finish()?;
    }
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if args.stats {
        scanner.stats().report();
        eprintln!(
            "Top cycle lengths: {:?} ({:.2?} elapsed)",
            scanner.cache().lengths(),
            started.elapsed()
        );
    }

    Ok(())
}

/// The scan wants one live visited-set plus up to K retained ones.
/// Shortfall is not fatal up front (allocation failure is), but it is
/// worth a warning before committing hours to a scan.
fn warn_if_memory_tight() {
    let mut sys = System::new();
    sys.refresh_memory();
    let available = sys.available_memory();
    let worst_case = BIT_VECTOR_BYTES * (TOP_CYCLES as u64 + 1);
    if available < BIT_VECTOR_BYTES {
        eprintln!(
            "warning: {} MiB available, each visited-set needs {} MiB",
            available / (1024 * 1024),
            BIT_VECTOR_BYTES / (1024 * 1024)
        );
    } else if available < worst_case {
        eprintln!(
            "warning: {} MiB available, a full scan can hold up to {} MiB of visited-sets",
            available / (1024 * 1024),
            worst_case / (1024 * 1024)
        );
    }
}

//! Print a binary survey log back as the canonical CSV report.

use std::path::PathBuf;

use clap::Parser;

use cyclescan::read_entries;

#[derive(Parser)]
struct Args {
    /// Survey log written by the scanner's --log flag
    log: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let entries = read_entries(&args.log)?;

    println!("seed,length");
    for entry in &entries {
        println!("0x{:06X},{}", entry.seed, entry.length);
    }
    eprintln!("{} logged cycles", entries.len());

    Ok(())
}

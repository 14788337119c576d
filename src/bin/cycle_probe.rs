//! Trace a single seed and print what the full scan would see for it.

use clap::Parser;

use cyclescan::{BitVector, Sfc8, StateSpace, Sfc8Space, trace};

#[derive(Parser)]
struct Args {
    /// Seed to probe, decimal or 0x-prefixed hex
    seed: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let seed = parse_seed(&args.seed)?;

    let space = Sfc8Space;
    let start = Sfc8::from_seed(seed);
    let mut visited = BitVector::new(space.state_count())?;
    let length = trace(&space, start, &mut visited);

    println!("seed:   0x{:06X}", seed);
    println!(
        "start:  a={:#04X} b={:#04X} c={:#04X} d={:#04X} (key {:#010X})",
        start.a,
        start.b,
        start.c,
        start.d,
        start.key()
    );
    println!("length: {}", length);

    Ok(())
}

fn parse_seed(text: &str) -> Result<u32, String> {
    let seed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    }
    .map_err(|_| format!("invalid seed '{text}'"))?;
    if seed >= cyclescan::SEED_SPACE {
        return Err(format!("seed {seed:#X} outside the 24-bit seed space"));
    }
    Ok(seed)
}

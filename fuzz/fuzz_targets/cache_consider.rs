use cyclescan::{BitVector, CycleCache, TOP_CYCLES};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let mut cache = CycleCache::new();
            for chunk in data.chunks_exact(3) {
                let length = u16::from_le_bytes([chunk[0], chunk[1]]) as u64;
                let key = chunk[2] as u32;
                let mut fingerprint = match BitVector::new(256) {
                    Ok(v) => v,
                    Err(_) => return,
                };
                fingerprint.test_and_set(key);
                cache.consider(length, fingerprint);

                let held = cache.lengths();
                assert!(held.len() <= TOP_CYCLES);
                assert!(held.windows(2).all(|w| w[0] >= w[1]));
            }
        });
    }
}

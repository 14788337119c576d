use cyclescan::Sfc8;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 4 {
                return;
            }
            let key = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
            let state = Sfc8::from_key(key);
            assert_eq!(state.key(), key);
            // The transition must stay total over the whole domain.
            let _ = state.advance();
        });
    }
}

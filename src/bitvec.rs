//! Flat bit vector over the state key domain.
//!
//! The key domain is dense and fully enumerable, so one bit per state
//! gives worst-case O(1) membership with no hashing or collisions. The
//! cost is the footprint: the full sfc8 domain needs 2^32 bits (512 MiB)
//! per vector, which is why construction is fallible and why the scanner
//! recycles vectors instead of reallocating per trace.

use crate::CyclescanError;

/// Fixed-capacity set of 32-bit keys, one bit per key, stored as u64
/// words. Capacity is rounded up to a whole word.
#[derive(Debug, Default)]
pub struct BitVector {
    words: Vec<u64>,
}

impl BitVector {
    /// Allocate a zeroed vector covering `bits` keys.
    ///
    /// Allocation failure is reported instead of aborting; for the full
    /// domain that is the scan's only fatal error.
    pub fn new(bits: u64) -> Result<Self, CyclescanError> {
        let len = ((bits + 63) / 64) as usize;
        let mut words = Vec::new();
        words.try_reserve_exact(len).map_err(|e| {
            CyclescanError::Allocation(format!("{} words for {} bits: {}", len, bits, e))
        })?;
        words.resize(len, 0);
        Ok(Self { words })
    }

    /// Number of keys the vector can hold.
    pub fn capacity(&self) -> u64 {
        self.words.len() as u64 * 64
    }

    /// Reset every bit to 0 in place.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Whether the bit for `key` is set. No side effect.
    pub fn test(&self, key: u32) -> bool {
        let word = self.words[(key >> 6) as usize];
        word & (1u64 << (key & 63)) != 0
    }

    /// Set the bit for `key`, returning its previous value.
    ///
    /// This is the one primitive the trace loop needs: a `true` return
    /// means the key was already visited and the trajectory just closed.
    pub fn test_and_set(&mut self, key: u32) -> bool {
        let mask = 1u64 << (key & 63);
        let word = &mut self.words[(key >> 6) as usize];
        let seen = *word & mask != 0;
        *word |= mask;
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_clear() {
        let v = BitVector::new(256).unwrap();
        for key in 0..256 {
            assert!(!v.test(key));
        }
    }

    #[test]
    fn test_and_set_reports_previous_value() {
        let mut v = BitVector::new(128).unwrap();
        assert!(!v.test_and_set(5));
        assert!(v.test(5));
        assert!(v.test_and_set(5));
        assert!(!v.test(4));
        assert!(!v.test(6));
    }

    #[test]
    fn word_boundaries() {
        let mut v = BitVector::new(192).unwrap();
        for key in [0u32, 63, 64, 127, 128, 191] {
            assert!(!v.test_and_set(key));
            assert!(v.test(key));
        }
    }

    #[test]
    fn clear_resets_every_bit() {
        let mut v = BitVector::new(192).unwrap();
        for key in [3u32, 64, 100, 191] {
            v.test_and_set(key);
        }
        v.clear();
        for key in 0..192 {
            assert!(!v.test(key));
        }
    }

    #[test]
    fn capacity_rounds_up_to_words() {
        assert_eq!(BitVector::new(1).unwrap().capacity(), 64);
        assert_eq!(BitVector::new(64).unwrap().capacity(), 64);
        assert_eq!(BitVector::new(65).unwrap().capacity(), 128);
    }
}

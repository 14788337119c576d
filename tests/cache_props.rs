use cyclescan::{BitVector, CycleCache, TOP_CYCLES};
use quickcheck::quickcheck;

quickcheck! {
    /// After any sequence of offers the cache holds at most K records,
    /// non-increasing by rank, with the longest length seen so far at
    /// rank 0.
    fn cache_stays_sorted_and_bounded(lengths: Vec<u64>) -> bool {
        let mut cache = CycleCache::new();
        let mut max_seen = 0u64;
        for (i, &length) in lengths.iter().enumerate() {
            let mut fingerprint = BitVector::new(1024).unwrap();
            fingerprint.test_and_set((i % 1024) as u32);
            cache.consider(length, fingerprint);
            max_seen = max_seen.max(length);

            let held = cache.lengths();
            if held.len() > TOP_CYCLES {
                return false;
            }
            if !held.windows(2).all(|w| w[0] >= w[1]) {
                return false;
            }
            if held[0] != max_seen {
                return false;
            }
        }
        true
    }
}

quickcheck! {
    /// A returned vector means the cache is unchanged; a consumed vector
    /// means its keys became visible to lookup.
    fn consider_ownership_matches_cache_change(lengths: Vec<u64>) -> bool {
        let mut cache = CycleCache::new();
        for (i, &length) in lengths.iter().enumerate() {
            let key = (i % 1024) as u32;
            let mut fingerprint = BitVector::new(1024).unwrap();
            fingerprint.test_and_set(key);

            let before = cache.lengths();
            match cache.consider(length, fingerprint) {
                Some(returned) => {
                    if cache.lengths() != before || !returned.test(key) {
                        return false;
                    }
                }
                None => {
                    if cache.lengths() == before {
                        return false;
                    }
                }
            }
        }
        true
    }
}

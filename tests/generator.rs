use cyclescan::{Sfc8, INITIAL_COUNTER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn advance_is_a_pure_function(key in any::<u32>()) {
        let state = Sfc8::from_key(key);
        prop_assert_eq!(state.advance(), state.advance());
    }

    #[test]
    fn counter_always_steps_by_one(key in any::<u32>()) {
        let state = Sfc8::from_key(key);
        prop_assert_eq!(state.advance().d, state.d.wrapping_add(1));
    }

    #[test]
    fn seeded_states_pin_the_counter(seed in 0u32..1 << 24) {
        prop_assert_eq!(Sfc8::from_seed(seed).d, INITIAL_COUNTER);
    }
}

#[test]
fn transition_matches_reference_vectors() {
    let cases = [
        ((1, 2, 3, 1), (2, 9, 28, 2)),
        ((0xFF, 0xFF, 0xFF, 0xFF), (0xC0, 0xFD, 0xFC, 0x00)),
        ((0, 0, 0, 0), (0, 0, 0, 1)),
    ];
    for ((a, b, c, d), (na, nb, nc, nd)) in cases {
        let state = Sfc8 { a, b, c, d };
        assert_eq!(state.advance(), Sfc8 { a: na, b: nb, c: nc, d: nd });
    }
}

#[test]
fn all_zero_state_walks_the_counter() {
    // From the all-zero state the first steps only move c and d, a
    // useful canary for the evaluation order of the transition.
    let mut state = Sfc8 { a: 0, b: 0, c: 0, d: 0 };
    state = state.advance();
    assert_eq!(state, Sfc8 { a: 0, b: 0, c: 0, d: 1 });
    state = state.advance();
    assert_eq!(state, Sfc8 { a: 0, b: 0, c: 1, d: 2 });
    state = state.advance();
    assert_eq!(state, Sfc8 { a: 0, b: 3, c: 10, d: 3 });
}

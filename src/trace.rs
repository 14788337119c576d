//! Trajectory tracing: walk the generator from a starting state until a
//! key repeats.

use crate::bitvec::BitVector;
use crate::state::StateSpace;

/// Walk `space` from `start`, marking every visited key in `visited`,
/// until `test_and_set` reports a repeat. Returns the number of distinct
/// states marked before the repeat was observed.
///
/// `visited` must be clear on entry and large enough for the key domain.
/// The loop is bounded by the state count: the vector can hold at most
/// that many distinct marks before a repeat is forced.
///
/// When `start` sits on a pre-cycle tail rather than on the cycle
/// itself, the returned length is tail plus cycle, not the pure cycle
/// length. That conflation is part of the scan's contract; callers must
/// not correct for it.
pub fn trace<S: StateSpace>(space: &S, start: S::State, visited: &mut BitVector) -> u64 {
    let mut state = start;
    let mut steps = 0u64;
    while steps < space.state_count() {
        if visited.test_and_set(space.encode(state)) {
            break;
        }
        state = space.advance(state);
        steps += 1;
    }
    steps
}

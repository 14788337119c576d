//! The sfc8 generator state, its transition function and the 32-bit key
//! codec used to index visited-sets.
//!
//! Every piece of arithmetic here is 8-bit wraparound on purpose: the
//! generator's cycle structure depends entirely on overflow behavior, so
//! the transition must match the reference algorithm bit for bit.

use crate::{INITIAL_COUNTER, POSSIBLE_STATES, SEED_SPACE};

/// One sfc8 generator state: four 8-bit fields.
///
/// States are plain values. The only ways to obtain one are
/// [`Sfc8::from_seed`], [`Sfc8::from_key`] and [`Sfc8::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sfc8 {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
}

impl Sfc8 {
    /// Build the starting state for a seed in `[0, 2^24)`.
    ///
    /// The seed's low, middle and high bytes become `a`, `b` and `c`;
    /// the counter `d` always starts at [`INITIAL_COUNTER`].
    pub fn from_seed(seed: u32) -> Self {
        Self {
            a: seed as u8,
            b: (seed >> 8) as u8,
            c: (seed >> 16) as u8,
            d: INITIAL_COUNTER,
        }
    }

    /// Advance to the next state.
    pub fn advance(self) -> Self {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        Self {
            a: self.b ^ (self.b >> 2),
            b: self.c.wrapping_add(self.c << 1),
            c: t.wrapping_add(self.c.rotate_left(3)),
            d: self.d.wrapping_add(1),
        }
    }

    /// Pack the state into its canonical 32-bit key, little endian:
    /// `a` in bits 0..8, `b` in 8..16, `c` in 16..24, `d` in 24..32.
    pub fn key(self) -> u32 {
        u32::from_le_bytes([self.a, self.b, self.c, self.d])
    }

    /// Inverse of [`Sfc8::key`]. The engine never decodes keys; this
    /// exists because the codec must stay a bijection.
    pub fn from_key(key: u32) -> Self {
        let [a, b, c, d] = key.to_le_bytes();
        Self { a, b, c, d }
    }
}

/// The state machine the scanner walks: a finite key-encodable state
/// domain with a deterministic transition and a seed construction rule.
///
/// [`Sfc8Space`] is the one real implementation. The trait keeps the
/// trace and scan loops independent of the 2^32-sized domain so their
/// behavior can be pinned down on spaces small enough to enumerate by
/// hand.
pub trait StateSpace {
    type State: Copy;

    /// Number of distinct states, which is also the key domain size.
    fn state_count(&self) -> u64;

    /// Number of seeds a full scan visits.
    fn seed_count(&self) -> u32;

    /// Construct the starting state for a seed.
    fn seed_state(&self, seed: u32) -> Self::State;

    /// The deterministic transition.
    fn advance(&self, state: Self::State) -> Self::State;

    /// Encode a state into its key. Must be injective over the domain.
    fn encode(&self, state: Self::State) -> u32;
}

/// The full sfc8 domain: 2^32 states, 2^24 seeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sfc8Space;

impl StateSpace for Sfc8Space {
    type State = Sfc8;

    fn state_count(&self) -> u64 {
        POSSIBLE_STATES
    }

    fn seed_count(&self) -> u32 {
        SEED_SPACE
    }

    fn seed_state(&self, seed: u32) -> Sfc8 {
        Sfc8::from_seed(seed)
    }

    fn advance(&self, state: Sfc8) -> Sfc8 {
        state.advance()
    }

    fn encode(&self, state: Sfc8) -> u32 {
        state.key()
    }
}

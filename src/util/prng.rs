//! Seeded pseudo-random stream.
//!
//! The generator state is a single `u32`. A seed string is hashed with
//! 32-bit FNV-1a over its UTF-16 code units, and every draw advances the
//! state with a small linear-congruential step
//! (`state = (state * 9301 + 49297) mod 233280`). The draw value is
//! `state / 233280`, so it always lies in `[0, 1)`.
//!
//! [`PrngState`] is a plain value: each draw returns the value together with
//! the successor state. [`SeededRng`] threads that state for sequential
//! generators that would otherwise have to juggle tuples.
//!
//! Output is illustrative, not cryptographic. Different seeds may collide.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Immutable generator state; every draw returns a successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrngState(u32);

impl PrngState {
    /// Hash a seed string into an initial state.
    ///
    /// Any string, including the empty string, is a valid seed.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let hash = seed.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
            (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
        });
        Self(hash)
    }

    /// Raw 32-bit state.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Draw a value in `[0, 1)`.
    #[must_use]
    pub fn next(self) -> (f64, Self) {
        let advanced =
            (u64::from(self.0) * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        // advanced < LCG_MODULUS, which fits comfortably in u32
        let state = advanced as u32;
        (f64::from(state) / LCG_MODULUS as f64, Self(state))
    }

    /// Draw a value in `[lo, hi)`.
    #[must_use]
    pub fn range(self, lo: f64, hi: f64) -> (f64, Self) {
        let (t, state) = self.next();
        (lo + t * (hi - lo), state)
    }

    /// Pick an element uniformly. An empty slice yields `None` but still
    /// consumes a draw, so the stream stays aligned.
    #[must_use]
    pub fn pick<T>(self, items: &[T]) -> (Option<&T>, Self) {
        let (t, state) = self.next();
        let index = (t * items.len() as f64).floor() as usize;
        (items.get(index), state)
    }
}

/// Sequential cursor over a [`PrngState`] stream.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: PrngState,
}

impl SeededRng {
    /// Start a stream for `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            state: PrngState::from_seed(seed),
        }
    }

    /// Current state (the state the next draw will advance from).
    #[must_use]
    pub fn state(&self) -> PrngState {
        self.state
    }

    /// Draw a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let (value, state) = self.state.next();
        self.state = state;
        value
    }

    /// Draw a value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let (value, state) = self.state.range(lo, hi);
        self.state = state;
        value
    }

    /// Draw `floor(range(lo, hi))`, for counts and labels.
    pub fn range_floor(&mut self, lo: f64, hi: f64) -> u32 {
        self.range(lo, hi).floor() as u32
    }

    /// Pick an element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let (item, state) = self.state.pick(items);
        self.state = state;
        item
    }
}

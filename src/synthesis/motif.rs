//! Secondary-structure motifs driving backbone synthesis.
//!
//! Each motif has a minimum dwell length and a switch threshold; the
//! synthesizer only considers leaving a motif once it has emitted more than
//! the minimum number of points, and then only when a draw beats the
//! threshold.

use crate::util::prng::SeededRng;

/// Local secondary-structure mode of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motif {
    /// Alpha helix: tight spiral around a slowly drifting axis.
    Helix,
    /// Beta strand: zig-zag with a long rise.
    Sheet,
    /// Coil: random walk.
    Loop,
}

impl Motif {
    /// All motifs in transition-draw order.
    pub const ALL: [Self; 3] = [Self::Helix, Self::Sheet, Self::Loop];

    /// Points that must be emitted before a transition is considered.
    #[must_use]
    pub const fn min_steps(self) -> u32 {
        match self {
            Self::Helix => 20,
            Self::Sheet => 10,
            Self::Loop => 5,
        }
    }

    /// A draw must exceed this for a transition to happen.
    #[must_use]
    pub const fn switch_threshold(self) -> f64 {
        match self {
            Self::Helix | Self::Sheet => 0.8,
            Self::Loop => 0.7,
        }
    }

    /// `(base, span)` of the confidence draw: `base + next * span`.
    #[must_use]
    pub const fn confidence_range(self) -> (f32, f32) {
        match self {
            Self::Helix => (90.0, 10.0),
            Self::Sheet => (70.0, 20.0),
            Self::Loop => (40.0, 40.0),
        }
    }

    /// Ribbon tube radius in model units.
    #[must_use]
    pub const fn ribbon_radius(self) -> f32 {
        match self {
            Self::Helix => 3.5,
            Self::Sheet => 3.0,
            Self::Loop => 1.5,
        }
    }
}

/// Motif state machine: current motif plus steps spent in it.
#[derive(Debug, Clone)]
pub(crate) struct MotifMachine {
    motif: Motif,
    steps: u32,
}

impl MotifMachine {
    /// Chains always start in a helix.
    pub(crate) fn new() -> Self {
        Self {
            motif: Motif::Helix,
            steps: 0,
        }
    }

    /// Advance by one point and return the motif that point belongs to.
    pub(crate) fn step(&mut self, rng: &mut SeededRng) -> Motif {
        self.steps += 1;
        if self.steps > self.motif.min_steps()
            && rng.next_f64() > self.motif.switch_threshold()
        {
            if let Some(&next) = rng.pick(&Motif::ALL) {
                self.motif = next;
            }
            self.steps = 0;
        }
        self.motif
    }
}

//! Seeded backbone trajectory synthesis.
//!
//! A running cursor walks through space; the current [`Motif`] decides how it
//! moves and where each backbone point is placed relative to it. The cursor
//! is never reset mid-chain, so drift accumulates. Once the chain is complete
//! every point is shifted by the centroid so the molecule sits on the origin
//! regardless of how far the cursor wandered.

use glam::Vec3;

use super::motif::{Motif, MotifMachine};
use super::max_extent;
use crate::util::prng::SeededRng;

/// Chain length is drawn from `[MIN_RESIDUES, MIN_RESIDUES + RESIDUE_SPAN)`.
pub const MIN_RESIDUES: usize = 150;
/// Width of the chain-length draw.
pub const RESIDUE_SPAN: usize = 50;

// Helix: the cursor drifts along a wide slow spiral, the point sits on a
// tighter helix around it.
const HELIX_DRIFT_RADIUS: f32 = 6.0;
const HELIX_DRIFT_FACTOR: f32 = 0.2;
const HELIX_RISE: f32 = 1.5;
const HELIX_ANGULAR_STEP: f32 = 0.5;
const HELIX_RADIUS: f32 = 5.0;

const SHEET_WIDTH: f32 = 4.0;
const SHEET_RISE: f32 = 3.5;
const SHEET_Z_JITTER: f64 = 2.0;

const LOOP_XZ_SPAN: f64 = 8.0;
const LOOP_Y_SPAN: f64 = 5.0;
const LOOP_Y_BIAS: f64 = 0.2;

/// One synthesized backbone position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackbonePoint {
    /// Position in model units, centroid at the origin.
    pub position: Vec3,
    /// Motif active when the point was emitted.
    pub motif: Motif,
    /// Illustrative confidence score, roughly [40, 100].
    pub confidence: f32,
}

/// An ordered backbone chain. Order is chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct Backbone {
    points: Vec<BackbonePoint>,
    extent: f32,
}

impl Backbone {
    /// Synthesize the backbone for `seed`.
    #[must_use]
    pub fn synthesize(seed: &str) -> Self {
        let mut rng = SeededRng::new(seed);
        Self::synthesize_with(&mut rng)
    }

    /// Synthesize from an existing stream, leaving it positioned after the
    /// last draw so callers can keep generating from the same seed.
    pub fn synthesize_with(rng: &mut SeededRng) -> Self {
        let count = MIN_RESIDUES
            + (rng.next_f64() * RESIDUE_SPAN as f64).floor() as usize;

        let mut machine = MotifMachine::new();
        let mut cursor = Vec3::ZERO;
        let mut points = Vec::with_capacity(count);

        for i in 0..count {
            let motif = machine.step(rng);
            let position = match motif {
                Motif::Helix => helix_step(&mut cursor, i),
                Motif::Sheet => sheet_step(&mut cursor, i, rng),
                Motif::Loop => loop_step(&mut cursor, rng),
            };
            let (base, span) = motif.confidence_range();
            let confidence = base + rng.next_f64() as f32 * span;
            points.push(BackbonePoint {
                position,
                motif,
                confidence,
            });
        }

        recenter(&mut points);
        let extent = max_extent(points.iter().map(|p| p.position));
        Self { points, extent }
    }

    /// Points in chain order.
    #[must_use]
    pub fn points(&self) -> &[BackbonePoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest distance of any point from the origin.
    #[must_use]
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Mean of all positions (the origin, up to rounding).
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        centroid(self.points.iter().map(|p| p.position))
    }
}

fn helix_step(cursor: &mut Vec3, index: usize) -> Vec3 {
    let angle = index as f32 * HELIX_ANGULAR_STEP;
    let (sin, cos) = angle.sin_cos();
    let drift = HELIX_DRIFT_RADIUS * HELIX_DRIFT_FACTOR;
    *cursor += Vec3::new(cos * drift, HELIX_RISE, sin * drift);
    *cursor + Vec3::new(cos * HELIX_RADIUS, 0.0, sin * HELIX_RADIUS)
}

fn sheet_step(cursor: &mut Vec3, index: usize, rng: &mut SeededRng) -> Vec3 {
    let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
    let jitter = (rng.next_f64() - 0.5) * SHEET_Z_JITTER;
    *cursor += Vec3::new(direction * SHEET_WIDTH, SHEET_RISE, jitter as f32);
    *cursor
}

fn loop_step(cursor: &mut Vec3, rng: &mut SeededRng) -> Vec3 {
    let dx = (rng.next_f64() - 0.5) * LOOP_XZ_SPAN;
    let dy = (rng.next_f64() - LOOP_Y_BIAS) * LOOP_Y_SPAN;
    let dz = (rng.next_f64() - 0.5) * LOOP_XZ_SPAN;
    *cursor += Vec3::new(dx as f32, dy as f32, dz as f32);
    *cursor
}

fn centroid(positions: impl ExactSizeIterator<Item = Vec3>) -> Vec3 {
    let n = positions.len();
    if n == 0 {
        return Vec3::ZERO;
    }
    positions.sum::<Vec3>() / n as f32
}

fn recenter(points: &mut [BackbonePoint]) {
    let center = centroid(points.iter().map(|p| p.position));
    for point in points {
        point.position -= center;
    }
}

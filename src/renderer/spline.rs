//! Catmull-Rom smoothing of a backbone into a dense ribbon path.
//!
//! Each window of four consecutive backbone points yields
//! [`SAMPLES_PER_WINDOW`] samples between its two middle points. Color and
//! radius are taken per window, so motif boundaries show up as a step
//! between windows rather than being blended.

use glam::Vec3;

use crate::synthesis::{Backbone, BackbonePoint, Motif};
use crate::util::confidence_color::confidence_color;
use crate::util::Rgba;

/// Samples emitted per four-point window, at `t = j / SAMPLES_PER_WINDOW`.
pub const SAMPLES_PER_WINDOW: usize = 6;

/// One sample of the smoothed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    /// Interpolated position in model units.
    pub position: Vec3,
    /// Color from the blended confidence.
    pub color: Rgba,
    /// Ribbon radius in model units.
    pub radius: f32,
    /// Motif of the window's leading point.
    pub motif: Motif,
    /// Confidence blended linearly between the window's middle points.
    pub confidence: f32,
}

/// Catmull-Rom point between `p1` and `p2` with half-difference tangents.
#[must_use]
pub fn catmull_rom_point(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    t: f32,
) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Smooth `points` into a path. Fewer than four points gives an empty path.
#[must_use]
pub fn smooth_points(points: &[BackbonePoint]) -> Vec<PathPoint> {
    if points.len() < 4 {
        return Vec::new();
    }

    let mut path = Vec::with_capacity((points.len() - 3) * SAMPLES_PER_WINDOW);
    for window in points.windows(4) {
        let &[p0, p1, p2, p3] = window else {
            continue;
        };
        let radius = p1.motif.ribbon_radius();
        for j in 0..SAMPLES_PER_WINDOW {
            let t = j as f32 / SAMPLES_PER_WINDOW as f32;
            let confidence =
                p1.confidence + (p2.confidence - p1.confidence) * t;
            path.push(PathPoint {
                position: catmull_rom_point(
                    p0.position,
                    p1.position,
                    p2.position,
                    p3.position,
                    t,
                ),
                color: confidence_color(confidence),
                radius,
                motif: p1.motif,
                confidence,
            });
        }
    }
    path
}

/// Smooth a whole backbone.
#[must_use]
pub fn smooth_backbone(backbone: &Backbone) -> Vec<PathPoint> {
    smooth_points(backbone.points())
}

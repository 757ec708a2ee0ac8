//! Ribbon style: the smoothed path drawn as thick round-capped strokes.
//!
//! Every pair of consecutive path points becomes one segment. Segments are
//! depth-sorted farthest first and each gets a thin translucent highlight
//! stroke nudged up and to the left.

use glam::Vec2;

use super::spline::PathPoint;
use super::surface::{Stroke, Surface};
use crate::camera::Projection;
use crate::util::Rgba;

const HIGHLIGHT: Rgba = Rgba::WHITE.with_alpha(0.3);
const HIGHLIGHT_WIDTH: f32 = 0.4;
const HIGHLIGHT_OFFSET: f32 = -0.1;

/// A projected ribbon segment ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonSegment {
    /// Screen start point.
    pub start: Vec2,
    /// Screen end point.
    pub end: Vec2,
    /// Color of the segment's first point.
    pub color: Rgba,
    /// Stroke width in CSS pixels.
    pub width: f32,
    /// Mean rotated depth of the two endpoints.
    pub depth: f32,
    /// Index of the segment's first path point.
    pub index: usize,
}

/// Project `path` and return its segments farthest first.
///
/// The sort is stable, so segments at equal depth keep path order.
#[must_use]
pub fn ribbon_draw_order(
    path: &[PathPoint],
    projection: &Projection,
) -> Vec<RibbonSegment> {
    let projected: Vec<_> =
        path.iter().map(|p| projection.project(p.position)).collect();

    let mut segments: Vec<RibbonSegment> = path
        .windows(2)
        .zip(projected.windows(2))
        .enumerate()
        .map(|(index, (points, ends))| RibbonSegment {
            start: ends[0].screen,
            end: ends[1].screen,
            color: points[0].color,
            width: points[0].radius * ends[0].scale,
            depth: (ends[0].depth + ends[1].depth) / 2.0,
            index,
        })
        .collect();

    segments.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    segments
}

/// Draw `path` onto `surface`.
pub fn draw_ribbon(
    surface: &mut dyn Surface,
    path: &[PathPoint],
    projection: &Projection,
) {
    for segment in ribbon_draw_order(path, projection) {
        let body = Stroke::solid(segment.color, segment.width).round();
        surface.stroke_segments(&[(segment.start, segment.end)], &body);

        let offset = Vec2::splat(HIGHLIGHT_OFFSET * segment.width);
        let highlight =
            Stroke::solid(HIGHLIGHT, segment.width * HIGHLIGHT_WIDTH).round();
        surface.stroke_segments(
            &[(segment.start + offset, segment.end + offset)],
            &highlight,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, Lens, Viewport};
    use crate::renderer::spline::smooth_backbone;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use crate::synthesis::Backbone;

    fn projection(extent: f32) -> Projection {
        Projection::new(
            &CameraState::default(),
            Viewport::new(400.0, 300.0, 1.0),
            extent,
            Lens {
                camera_distance: 600.0,
                fit_fraction: 0.45,
            },
        )
    }

    #[test]
    fn segments_are_farthest_first() {
        let backbone = Backbone::synthesize("4HHB");
        let path = smooth_backbone(&backbone);
        let order = ribbon_draw_order(&path, &projection(backbone.extent()));

        assert_eq!(order.len(), path.len() - 1);
        for pair in order.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn each_segment_gets_body_then_highlight() {
        let backbone = Backbone::synthesize("2LYZ");
        let path = smooth_backbone(&backbone);
        let projection = projection(backbone.extent());
        let mut surface =
            RecordingSurface::new(Viewport::new(400.0, 300.0, 1.0));
        draw_ribbon(&mut surface, &path, &projection);

        let commands = surface.commands();
        assert_eq!(commands.len(), 2 * (path.len() - 1));
        let first = ribbon_draw_order(&path, &projection)[0];
        match (&commands[0], &commands[1]) {
            (
                DrawCommand::Stroke { stroke: body, .. },
                DrawCommand::Stroke { stroke: highlight, segments },
            ) => {
                assert_eq!(body.color, first.color);
                assert_eq!(body.width, first.width);
                assert_eq!(highlight.color, HIGHLIGHT);
                assert!((highlight.width - first.width * 0.4).abs() < 1e-5);
                let shift = segments[0].0 - first.start;
                assert!((shift.x + 0.1 * first.width).abs() < 1e-4);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn empty_path_draws_nothing() {
        let mut surface = RecordingSurface::default();
        draw_ribbon(&mut surface, &[], &projection(10.0));
        assert!(surface.commands().is_empty());
    }
}

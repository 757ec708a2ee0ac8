//! [`Surface`] that accumulates a frame as an SVG document.
//!
//! Used for headless rendering: run frames into it, then serialize with
//! [`SvgSurface::to_markup`]. Coordinates are written with fixed precision
//! so identical frames produce identical bytes.

use std::fmt::Write;

use glam::Vec2;
use svg::node::element::{
    Circle, Definitions, Group, Path, RadialGradient, Rectangle, Stop, Text,
};
use svg::{Document, Node};

use super::surface::{
    Fill, LineCap, Segment, Stroke, Surface, TextAlign, TextStyle,
};
use crate::camera::Viewport;
use crate::error::MolsketchError;

/// Round to two decimals for stable output.
fn coord(v: f32) -> String {
    format!("{v:.2}")
}

/// Frame-to-SVG surface.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    viewport: Viewport,
    defs: Definitions,
    body: Group,
    gradients: usize,
}

impl SvgSurface {
    /// Empty surface of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            defs: Definitions::new(),
            body: Group::new(),
            gradients: 0,
        }
    }

    /// The current frame as a document.
    #[must_use]
    pub fn to_document(&self) -> Document {
        Document::new()
            .set("width", coord(self.viewport.width))
            .set("height", coord(self.viewport.height))
            .set(
                "viewBox",
                format!(
                    "0 0 {} {}",
                    coord(self.viewport.width),
                    coord(self.viewport.height)
                ),
            )
            .add(self.defs.clone())
            .add(self.body.clone())
    }

    /// The current frame as SVG markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_document().to_string()
    }

    fn push<N>(&mut self, node: N)
    where
        N: Into<Box<dyn Node>>,
    {
        self.body.append(node);
    }

    /// Register `fill` and return the value for a `fill` attribute.
    fn paint(&mut self, fill: &Fill) -> String {
        match fill {
            Fill::Solid(color) => color.to_string(),
            Fill::Radial(gradient) => {
                self.gradients += 1;
                let id = format!("g{}", self.gradients);
                let mut element = RadialGradient::new()
                    .set("id", id.as_str())
                    .set("gradientUnits", "userSpaceOnUse")
                    .set("cx", coord(gradient.outer_center.x))
                    .set("cy", coord(gradient.outer_center.y))
                    .set("r", coord(gradient.outer_radius))
                    .set("fx", coord(gradient.inner_center.x))
                    .set("fy", coord(gradient.inner_center.y))
                    .set("fr", coord(gradient.inner_radius));
                for stop in &gradient.stops {
                    element = element.add(
                        Stop::new()
                            .set("offset", coord(stop.offset))
                            .set("stop-color", stop.color.to_string()),
                    );
                }
                self.defs.append(element);
                format!("url(#{id})")
            }
        }
    }
}

fn apply_stroke<N: Node>(mut node: N, stroke: &Stroke) -> N {
    node.assign("stroke", stroke.color.to_string());
    node.assign("stroke-width", coord(stroke.width));
    if stroke.cap == LineCap::Round {
        node.assign("stroke-linecap", "round");
    }
    if let Some([on, off]) = stroke.dash {
        node.assign(
            "stroke-dasharray",
            format!("{} {}", coord(on), coord(off)),
        );
    }
    node
}

impl Surface for SvgSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), MolsketchError> {
        self.viewport = viewport;
        Ok(())
    }

    fn clear(&mut self, background: &Fill) {
        self.defs = Definitions::new();
        self.body = Group::new();
        self.gradients = 0;
        let paint = self.paint(background);
        let rect = Rectangle::new()
            .set("width", coord(self.viewport.width))
            .set("height", coord(self.viewport.height))
            .set("fill", paint);
        self.push(rect);
    }

    fn stroke_segments(&mut self, segments: &[Segment], stroke: &Stroke) {
        if segments.is_empty() {
            return;
        }
        let mut data = String::new();
        for (from, to) in segments {
            let _ = write!(
                data,
                "M{},{} L{},{} ",
                coord(from.x),
                coord(from.y),
                coord(to.x),
                coord(to.y)
            );
        }
        let path = Path::new().set("fill", "none").set("d", data.trim_end());
        self.push(apply_stroke(path, stroke));
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &Fill,
        outline: Option<&Stroke>,
    ) {
        let paint = self.paint(fill);
        let circle = Circle::new()
            .set("cx", coord(center.x))
            .set("cy", coord(center.y))
            .set("r", coord(radius))
            .set("fill", paint);
        match outline {
            Some(stroke) => self.push(apply_stroke(circle, stroke)),
            None => self.push(circle),
        }
    }

    fn fill_text(&mut self, text: &str, position: Vec2, style: &TextStyle) {
        let mut node = Text::new(text)
            .set("x", coord(position.x))
            .set("y", coord(position.y))
            .set("font-family", "sans-serif")
            .set("font-size", coord(style.size))
            .set("fill", style.color.to_string());
        if style.bold {
            node = node.set("font-weight", "bold");
        }
        if style.align == TextAlign::Center {
            node = node.set("text-anchor", "middle");
        }
        self.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ball_and_stick::sphere_fill;
    use crate::util::Rgba;

    #[test]
    fn gradients_are_referenced_by_id() {
        let mut surface = SvgSurface::new(Viewport::new(100.0, 80.0, 1.0));
        surface.clear(&Fill::Solid(Rgba::hex(0xf8fafc)));
        let fill = sphere_fill(
            Vec2::splat(20.0),
            5.0,
            Rgba::hex(0xef4444),
            Rgba::hex(0x1f2937),
        );
        surface.fill_circle(Vec2::splat(20.0), 5.0, &fill, None);

        let markup = surface.to_markup();
        assert!(markup.contains("radialGradient"));
        assert!(markup.contains("url(#g1)"));
        assert!(markup.contains("#f8fafc"));
    }

    #[test]
    fn clear_resets_frame() {
        let mut surface = SvgSurface::new(Viewport::new(10.0, 10.0, 1.0));
        let style = TextStyle {
            color: Rgba::hex(0x64748b),
            size: 10.0,
            bold: false,
            align: TextAlign::Start,
        };
        surface.fill_text("TRP42", Vec2::ONE, &style);
        assert!(surface.to_markup().contains("TRP42"));
        surface.clear(&Fill::Solid(Rgba::WHITE));
        assert!(!surface.to_markup().contains("TRP42"));
    }

    #[test]
    fn dashed_round_strokes() {
        let mut surface = SvgSurface::new(Viewport::new(10.0, 10.0, 1.0));
        surface.stroke_segments(
            &[(Vec2::ZERO, Vec2::ONE)],
            &Stroke::solid(Rgba::hex(0xcbd5e1), 1.5).round().dashed(4.0, 4.0),
        );
        let markup = surface.to_markup();
        assert!(markup.contains("stroke-dasharray=\"4.00 4.00\""));
        assert!(markup.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn identical_frames_identical_bytes() {
        let draw = || {
            let mut surface = SvgSurface::new(Viewport::new(50.0, 50.0, 2.0));
            surface.clear(&Fill::Solid(Rgba::WHITE));
            surface.stroke_segments(
                &[(Vec2::new(1.0 / 3.0, 2.0), Vec2::new(7.25, 9.5))],
                &Stroke::solid(Rgba::hex(0x64748b), 0.8),
            );
            surface.to_markup()
        };
        assert_eq!(draw(), draw());
    }
}

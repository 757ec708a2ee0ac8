//! Painter's-algorithm renderers and the surfaces they draw onto.
//!
//! Renderers project cached geometry through a [`crate::camera::Projection`],
//! sort primitives by rotated depth (farthest first) and issue draw calls on
//! a [`Surface`]. There is no depth buffer; draw order is the occlusion.

pub mod ball_and_stick;
#[cfg(feature = "web")]
pub mod canvas;
pub mod pocket;
pub mod ribbon;
pub mod spline;
pub mod surface;
pub mod svg_surface;

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use ball_and_stick::draw_ball_and_stick;
#[cfg(feature = "web")]
pub use canvas::CanvasSurface;
pub use pocket::{draw_pocket, pocket_background};
pub use ribbon::draw_ribbon;
pub use spline::{smooth_backbone, PathPoint};
pub use surface::{
    DrawCommand, Fill, LineCap, RecordingSurface, Stroke, Surface, TextAlign,
    TextStyle,
};
pub use svg_surface::SvgSurface;

use crate::camera::Viewport;
use crate::util::confidence_color::ConfidenceBand;
use crate::util::Rgba;

/// Flat background of the structure view and of the empty placeholder.
pub const PLACEHOLDER_BACKGROUND: Rgba = Rgba::hex(0xf8fafc);

const OVERLAY_TITLE: Rgba = Rgba::hex(0x1e293b);
const OVERLAY_TEXT: Rgba = Rgba::hex(0x475569);
const OVERLAY_MARGIN: f32 = 16.0;
const LEGEND_WIDTH: f32 = 130.0;
const LEGEND_ROW: f32 = 16.0;
const LEGEND_SWATCH_RADIUS: f32 = 5.0;

/// How a protein structure is drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// Smoothed, confidence-colored tube.
    #[default]
    Ribbon,
    /// Shaded atoms joined by chain bonds.
    BallAndStick,
}

impl RenderStyle {
    /// Parse the kebab-case name used in options and on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ribbon" => Some(Self::Ribbon),
            "ball-and-stick" | "ball-stick" => Some(Self::BallAndStick),
            _ => None,
        }
    }

    /// Kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ribbon => "ribbon",
            Self::BallAndStick => "ball-and-stick",
        }
    }
}

/// Text drawn over a frame: title, subtitle, zoom readout and, for
/// confidence-colored views, the band legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<'a> {
    /// Identifier, drawn bold.
    pub title: &'a str,
    /// Display name.
    pub subtitle: &'a str,
    /// Current zoom factor.
    pub zoom: f32,
    /// Draw the confidence legend bottom-right.
    pub legend: bool,
}

impl Overlay<'_> {
    /// Zoom readout, e.g. `"Zoom: 120%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("Zoom: {}%", (self.zoom * 100.0).round() as i32)
    }

    /// Draw the overlay in the top-left corner, zoom readout bottom-left.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let viewport = surface.viewport();
        let left = |size: f32, bold: bool, color: Rgba| TextStyle {
            color,
            size,
            bold,
            align: TextAlign::Start,
        };
        if !self.title.is_empty() {
            surface.fill_text(
                self.title,
                Vec2::new(OVERLAY_MARGIN, OVERLAY_MARGIN + 18.0),
                &left(20.0, true, OVERLAY_TITLE),
            );
        }
        if !self.subtitle.is_empty() {
            surface.fill_text(
                self.subtitle,
                Vec2::new(OVERLAY_MARGIN, OVERLAY_MARGIN + 38.0),
                &left(14.0, false, OVERLAY_TEXT),
            );
        }
        surface.fill_text(
            &self.zoom_label(),
            Vec2::new(OVERLAY_MARGIN, viewport.height - OVERLAY_MARGIN),
            &left(12.0, false, OVERLAY_TEXT),
        );
        if self.legend {
            draw_legend(surface, viewport);
        }
    }
}

fn draw_legend(surface: &mut dyn Surface, viewport: Viewport) {
    let x = viewport.width - OVERLAY_MARGIN - LEGEND_WIDTH;
    let style = TextStyle {
        color: OVERLAY_TEXT,
        size: 11.0,
        bold: false,
        align: TextAlign::Start,
    };
    let rows = ConfidenceBand::ALL.len() as f32;
    for (i, band) in ConfidenceBand::ALL.into_iter().enumerate() {
        let y = viewport.height
            - OVERLAY_MARGIN
            - (rows - 1.0 - i as f32) * LEGEND_ROW;
        surface.fill_circle(
            Vec2::new(x + LEGEND_SWATCH_RADIUS, y - 4.0),
            LEGEND_SWATCH_RADIUS,
            &Fill::Solid(band.color()),
            None,
        );
        surface.fill_text(
            band.label(),
            Vec2::new(x + 3.0 * LEGEND_SWATCH_RADIUS, y),
            &style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;

    #[test]
    fn style_names_round_trip() {
        for style in [RenderStyle::Ribbon, RenderStyle::BallAndStick] {
            assert_eq!(RenderStyle::from_name(style.name()), Some(style));
        }
        assert_eq!(
            RenderStyle::from_name("ball-stick"),
            Some(RenderStyle::BallAndStick)
        );
        assert_eq!(RenderStyle::from_name("cartoon"), None);
    }

    #[test]
    fn overlay_draws_labels_and_zoom() {
        let mut surface =
            RecordingSurface::new(Viewport::new(300.0, 200.0, 1.0));
        Overlay {
            title: "1CRN",
            subtitle: "Crambin",
            zoom: 1.2,
            legend: false,
        }
        .draw(&mut surface);
        assert_eq!(surface.texts(), ["1CRN", "Crambin", "Zoom: 120%"]);
    }

    #[test]
    fn overlay_skips_empty_labels() {
        let mut surface = RecordingSurface::default();
        Overlay {
            title: "",
            subtitle: "",
            zoom: 0.4,
            legend: false,
        }
        .draw(&mut surface);
        assert_eq!(surface.texts(), ["Zoom: 40%"]);
    }

    #[test]
    fn legend_lists_bands_highest_first() {
        let mut surface =
            RecordingSurface::new(Viewport::new(400.0, 300.0, 1.0));
        Overlay {
            title: "",
            subtitle: "",
            zoom: 1.0,
            legend: true,
        }
        .draw(&mut surface);
        assert_eq!(
            surface.texts(),
            [
                "Zoom: 100%",
                "Very High (>90)",
                "Confident (70-90)",
                "Low (50-70)",
                "Very Low (<50)",
            ]
        );
        let swatches: Vec<Fill> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { fill, .. } => Some(fill.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<Fill> = ConfidenceBand::ALL
            .iter()
            .map(|b| Fill::Solid(b.color()))
            .collect();
        assert_eq!(swatches, expected);
        let centers = surface.circle_centers();
        assert!(centers
            .iter()
            .all(|c| c.x > 200.0 && c.y > 200.0 && c.y < 300.0));
    }
}

//! Backend-agnostic 2D drawing surface.
//!
//! Renderers only ever talk to [`Surface`]. Every call is an immediate-mode
//! draw in CSS pixels; later calls paint over earlier ones, which is what the
//! painter's-algorithm renderers rely on.

use glam::Vec2;

use crate::camera::Viewport;
use crate::error::MolsketchError;
use crate::util::Rgba;

/// How stroke ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    /// Flat end at the endpoint.
    Butt,
    /// Half-disc past the endpoint.
    Round,
}

/// Stroke parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba,
    /// Width in CSS pixels.
    pub width: f32,
    /// End style.
    pub cap: LineCap,
    /// Dash pattern as (on, off) lengths; solid when `None`.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    /// Solid butt-capped stroke.
    #[must_use]
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// Same stroke with round caps.
    #[must_use]
    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    /// Same stroke with a dash pattern.
    #[must_use]
    pub fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some([on, off]);
        self
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position in [0, 1].
    pub offset: f32,
    /// Color at this position.
    pub color: Rgba,
}

/// Two-circle radial gradient in CSS pixels, as in the canvas API.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Center of the start circle.
    pub inner_center: Vec2,
    /// Radius of the start circle.
    pub inner_radius: f32,
    /// Center of the end circle.
    pub outer_center: Vec2,
    /// Radius of the end circle.
    pub outer_radius: f32,
    /// Stops in increasing offset order.
    pub stops: Vec<GradientStop>,
}

/// Area fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Single color.
    Solid(Rgba),
    /// Radial gradient.
    Radial(RadialGradient),
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Position is the start of the text.
    Start,
    /// Position is the middle of the text.
    Center,
}

/// Font and color for [`Surface::fill_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Rgba,
    /// Font size in CSS pixels.
    pub size: f32,
    /// Bold weight.
    pub bold: bool,
    /// Anchoring.
    pub align: TextAlign,
}

impl TextStyle {
    /// `font` shorthand for canvas, e.g. `"bold 12px sans-serif"`.
    #[must_use]
    pub fn css_font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px sans-serif", self.size)
    }
}

/// A line segment in CSS pixels.
pub type Segment = (Vec2, Vec2);

/// An immediate-mode 2D drawing target.
pub trait Surface {
    /// Current size and pixel ratio.
    fn viewport(&self) -> Viewport;

    /// Adopt a new size. Backing storage is reallocated as needed.
    fn resize(&mut self, viewport: Viewport) -> Result<(), MolsketchError>;

    /// Discard everything and paint the background.
    fn clear(&mut self, background: &Fill);

    /// Stroke all `segments` as one path.
    fn stroke_segments(&mut self, segments: &[Segment], stroke: &Stroke);

    /// Fill a circle, optionally outlining it.
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &Fill,
        outline: Option<&Stroke>,
    );

    /// Draw a line of text.
    fn fill_text(&mut self, text: &str, position: Vec2, style: &TextStyle);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::clear`].
    Clear(Fill),
    /// [`Surface::stroke_segments`].
    Stroke {
        /// Segments of the path.
        segments: Vec<Segment>,
        /// Stroke parameters.
        stroke: Stroke,
    },
    /// [`Surface::fill_circle`].
    Circle {
        /// Center in CSS pixels.
        center: Vec2,
        /// Radius in CSS pixels.
        radius: f32,
        /// Fill.
        fill: Fill,
        /// Outline, if any.
        outline: Option<Stroke>,
    },
    /// [`Surface::fill_text`].
    Text {
        /// Text content.
        text: String,
        /// Anchor position.
        position: Vec2,
        /// Font and color.
        style: TextStyle,
    },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Commands since the last [`Surface::clear`].
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Centers of all circles, in draw order.
    #[must_use]
    pub fn circle_centers(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Text of all labels, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), MolsketchError> {
        self.viewport = viewport;
        Ok(())
    }

    fn clear(&mut self, background: &Fill) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(background.clone()));
    }

    fn stroke_segments(&mut self, segments: &[Segment], stroke: &Stroke) {
        if segments.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Stroke {
            segments: segments.to_vec(),
            stroke: stroke.clone(),
        });
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &Fill,
        outline: Option<&Stroke>,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: fill.clone(),
            outline: outline.cloned(),
        });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_frame() {
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0, 1.0));
        surface.fill_circle(Vec2::ONE, 2.0, &Fill::Solid(Rgba::WHITE), None);
        surface.clear(&Fill::Solid(Rgba::hex(0xf8fafc)));
        assert_eq!(surface.commands().len(), 1);
        assert!(matches!(surface.commands()[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn empty_stroke_is_not_recorded() {
        let mut surface = RecordingSurface::default();
        surface.stroke_segments(&[], &Stroke::solid(Rgba::WHITE, 1.0));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn stroke_builders() {
        let stroke = Stroke::solid(Rgba::WHITE, 2.0).round().dashed(4.0, 4.0);
        assert_eq!(stroke.cap, LineCap::Round);
        assert_eq!(stroke.dash, Some([4.0, 4.0]));
    }

    #[test]
    fn css_font_shorthand() {
        let style = TextStyle {
            color: Rgba::WHITE,
            size: 10.0,
            bold: true,
            align: TextAlign::Center,
        };
        assert_eq!(style.css_font(), "bold 10px sans-serif");
    }
}

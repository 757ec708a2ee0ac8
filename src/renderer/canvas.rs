//! [`Surface`] over a browser `<canvas>` 2D context.
//!
//! The backing store is sized in physical pixels and the context carries a
//! device-pixel-ratio transform, so renderers keep working in CSS pixels.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{
    Fill, LineCap, Segment, Stroke, Surface, TextAlign, TextStyle,
};
use crate::camera::Viewport;
use crate::error::MolsketchError;

fn js_error(context: &str, err: &JsValue) -> MolsketchError {
    MolsketchError::Surface(format!("{context}: {err:?}"))
}

/// Canvas-backed surface.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Wrap `canvas`, sized to its current layout box.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::Surface`] if the canvas has no 2D context.
    pub fn new(
        canvas: HtmlCanvasElement,
        device_pixel_ratio: f32,
    ) -> Result<Self, MolsketchError> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| js_error("getContext", &e))?
            .ok_or_else(|| {
                MolsketchError::Surface("2d context unavailable".into())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| js_error("context type", &e))?;

        let viewport = Viewport::new(
            canvas.client_width() as f32,
            canvas.client_height() as f32,
            device_pixel_ratio,
        );
        let mut surface = Self {
            canvas,
            context,
            viewport,
        };
        surface.resize(viewport)?;
        Ok(surface)
    }

    /// The wrapped canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_fill(&self, fill: &Fill) {
        match fill {
            Fill::Solid(color) => {
                self.context.set_fill_style_str(&color.to_string());
            }
            Fill::Radial(gradient) => {
                let made = self.context.create_radial_gradient(
                    f64::from(gradient.inner_center.x),
                    f64::from(gradient.inner_center.y),
                    f64::from(gradient.inner_radius),
                    f64::from(gradient.outer_center.x),
                    f64::from(gradient.outer_center.y),
                    f64::from(gradient.outer_radius),
                );
                match made {
                    Ok(canvas_gradient) => {
                        for stop in &gradient.stops {
                            let color = stop.color.to_string();
                            if let Err(e) = canvas_gradient
                                .add_color_stop(stop.offset, &color)
                            {
                                log::warn!("gradient stop rejected: {e:?}");
                            }
                        }
                        self.context
                            .set_fill_style_canvas_gradient(&canvas_gradient);
                    }
                    Err(e) => {
                        log::warn!("radial gradient failed: {e:?}");
                        if let Some(stop) = gradient.stops.last() {
                            self.context
                                .set_fill_style_str(&stop.color.to_string());
                        }
                    }
                }
            }
        }
    }

    fn set_stroke(&self, stroke: &Stroke) {
        self.context.set_stroke_style_str(&stroke.color.to_string());
        self.context.set_line_width(f64::from(stroke.width));
        self.context.set_line_cap(match stroke.cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        });
        let dash = js_sys::Array::new();
        if let Some([on, off]) = stroke.dash {
            let _ = dash.push(&JsValue::from_f64(f64::from(on)));
            let _ = dash.push(&JsValue::from_f64(f64::from(off)));
        }
        if let Err(e) = self.context.set_line_dash(&dash) {
            log::warn!("setLineDash failed: {e:?}");
        }
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), MolsketchError> {
        let (width, height) = viewport.pixel_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let dpr = f64::from(viewport.device_pixel_ratio);
        self.context
            .set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
            .map_err(|e| js_error("setTransform", &e))?;
        self.viewport = viewport;
        Ok(())
    }

    fn clear(&mut self, background: &Fill) {
        let (w, h) = (
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        );
        self.context.clear_rect(0.0, 0.0, w, h);
        self.set_fill(background);
        self.context.fill_rect(0.0, 0.0, w, h);
    }

    fn stroke_segments(&mut self, segments: &[Segment], stroke: &Stroke) {
        if segments.is_empty() {
            return;
        }
        self.context.begin_path();
        for (from, to) in segments {
            self.context.move_to(f64::from(from.x), f64::from(from.y));
            self.context.line_to(f64::from(to.x), f64::from(to.y));
        }
        self.set_stroke(stroke);
        self.context.stroke();
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: &Fill,
        outline: Option<&Stroke>,
    ) {
        self.context.begin_path();
        if let Err(e) = self.context.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius.max(0.0)),
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {e:?}");
            return;
        }
        self.set_fill(fill);
        self.context.fill();
        if let Some(stroke) = outline {
            self.set_stroke(stroke);
            self.context.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, position: Vec2, style: &TextStyle) {
        self.context.set_font(&style.css_font());
        self.context.set_text_align(match style.align {
            TextAlign::Start => "start",
            TextAlign::Center => "center",
        });
        self.context.set_fill_style_str(&style.color.to_string());
        if let Err(e) = self.context.fill_text(
            text,
            f64::from(position.x),
            f64::from(position.y),
        ) {
            log::warn!("fillText failed: {e:?}");
        }
    }
}

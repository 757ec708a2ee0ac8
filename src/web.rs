//! Browser bindings: a `requestAnimationFrame` scheduler and a canvas
//! viewer exported through `wasm-bindgen`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

use crate::camera::Viewport;
use crate::diagram::InteractionDiagram;
use crate::engine::{
    FrameCallback, FrameHandle, FrameScheduler, PocketViewer, RenderLoop,
    RetainedCallbacks, StructureViewer,
};
use crate::error::MolsketchError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::{CanvasSurface, RenderStyle, Surface};

fn to_js(err: &MolsketchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window() -> Result<Window, MolsketchError> {
    web_sys::window()
        .ok_or_else(|| MolsketchError::Scheduler("no global window".into()))
}

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
///
/// Each request holds its JS closure until the frame fires or is
/// cancelled, so stopping a loop frees the pending closure.
#[derive(Debug, Clone)]
pub struct RafScheduler {
    window: Window,
    closures: Rc<RetainedCallbacks<RafClosure>>,
}

impl RafScheduler {
    /// Scheduler on the global window.
    ///
    /// # Errors
    ///
    /// [`MolsketchError::Scheduler`] outside a browser window context.
    pub fn new() -> Result<Self, MolsketchError> {
        Ok(Self {
            window: window()?,
            closures: Rc::default(),
        })
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_frame(
        &self,
        callback: FrameCallback,
    ) -> Result<FrameHandle, MolsketchError> {
        let own_handle = Rc::new(Cell::new(None));
        let handle_slot = Rc::clone(&own_handle);
        let closures = Rc::downgrade(&self.closures);
        let mut callback = Some(callback);
        let js_callback = RafClosure::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
            if let Some((handle, closures)) =
                handle_slot.get().zip(closures.upgrade())
            {
                closures.mark_fired(handle);
            }
        });

        let id = self
            .window
            .request_animation_frame(js_callback.as_ref().unchecked_ref())
            .map_err(|e| {
                MolsketchError::Scheduler(format!(
                    "requestAnimationFrame: {e:?}"
                ))
            })?;
        let handle = FrameHandle(i64::from(id));
        own_handle.set(Some(handle));
        self.closures.insert(handle, js_callback);
        Ok(handle)
    }

    fn cancel(&self, handle: FrameHandle) {
        if let Ok(id) = i32::try_from(handle.0) {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        self.closures.release(handle);
    }
}

enum AnyViewer {
    Structure(StructureViewer),
    Pocket(PocketViewer),
}

impl AnyViewer {
    fn set_structure(&mut self, id: &str, name: &str) {
        match self {
            Self::Structure(v) => v.set_structure(id, name),
            Self::Pocket(v) => v.set_structure(id, name),
        }
    }

    fn handle_input(&mut self, event: InputEvent) -> bool {
        match self {
            Self::Structure(v) => v.handle_input(event),
            Self::Pocket(v) => v.handle_input(event),
        }
    }

    fn set_render_style(&mut self, style: RenderStyle) {
        match self {
            Self::Structure(v) => v.set_render_style(style),
            Self::Pocket(v) => v.set_render_style(style),
        }
    }

    fn render_frame(&mut self, surface: &mut dyn Surface) -> bool {
        match self {
            Self::Structure(v) => v.render_frame(surface),
            Self::Pocket(v) => v.render_frame(surface),
        }
    }

    fn resize(
        &mut self,
        viewport: Viewport,
        surface: &mut dyn Surface,
    ) -> Result<(), MolsketchError> {
        match self {
            Self::Structure(v) => v.resize(viewport, surface),
            Self::Pocket(v) => v.resize(viewport, surface),
        }
    }

    fn zoom(&self) -> f32 {
        match self {
            Self::Structure(v) => v.camera().zoom(),
            Self::Pocket(v) => v.camera().zoom(),
        }
    }

    fn fps(&self) -> f32 {
        match self {
            Self::Structure(v) => v.frame_timing().fps(),
            Self::Pocket(v) => v.frame_timing().fps(),
        }
    }
}

struct Shared {
    viewer: AnyViewer,
    surface: CanvasSurface,
}

/// Interactive viewer bound to one `<canvas>` element.
///
/// The host forwards DOM pointer events and zoom button clicks; the viewer
/// redraws itself on every animation frame between [`WebViewer::start`]
/// and [`WebViewer::stop`].
#[wasm_bindgen]
pub struct WebViewer {
    shared: Rc<RefCell<Shared>>,
    render_loop: Option<RenderLoop>,
}

#[wasm_bindgen]
impl WebViewer {
    /// Viewer over `canvas`. `pocket` selects the binding-pocket view
    /// instead of the structure view. `options_toml` may be empty.
    ///
    /// # Errors
    ///
    /// The canvas has no 2D context or the options are malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        pocket: bool,
        options_toml: &str,
    ) -> Result<WebViewer, JsValue> {
        let options = if options_toml.trim().is_empty() {
            Options::default()
        } else {
            Options::from_toml(options_toml).map_err(|e| to_js(&e))?
        };
        let dpr = window().map_or(1.0, |w| w.device_pixel_ratio() as f32);
        let surface = CanvasSurface::new(canvas, dpr).map_err(|e| to_js(&e))?;
        let viewer = if pocket {
            AnyViewer::Pocket(PocketViewer::new(options))
        } else {
            AnyViewer::Structure(StructureViewer::new(options))
        };
        Ok(Self {
            shared: Rc::new(RefCell::new(Shared { viewer, surface })),
            render_loop: None,
        })
    }

    /// Show a structure or compound. An empty `id` shows the placeholder.
    pub fn set_structure(&self, id: &str, name: &str) {
        self.shared.borrow_mut().viewer.set_structure(id, name);
    }

    /// Switch between `"ribbon"` and `"ball-and-stick"`. Returns `false`
    /// for an unknown name.
    pub fn set_style(&self, name: &str) -> bool {
        let Some(style) = RenderStyle::from_name(name) else {
            log::warn!("unknown render style {name:?}");
            return false;
        };
        self.shared.borrow_mut().viewer.set_render_style(style);
        true
    }

    /// Primary button pressed at canvas-relative CSS pixels.
    pub fn pointer_down(&self, x: f32, y: f32) {
        self.input(InputEvent::PointerDown { x, y });
    }

    /// Pointer moved.
    pub fn pointer_move(&self, x: f32, y: f32) {
        self.input(InputEvent::PointerMoved { x, y });
    }

    /// Primary button released.
    pub fn pointer_up(&self) {
        self.input(InputEvent::PointerUp);
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&self) {
        self.input(InputEvent::PointerLeft);
    }

    /// One zoom step in.
    pub fn zoom_in(&self) {
        self.input(InputEvent::ZoomIn);
    }

    /// One zoom step out.
    pub fn zoom_out(&self) {
        self.input(InputEvent::ZoomOut);
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.shared.borrow().viewer.zoom()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.shared.borrow().viewer.fps()
    }

    /// Re-measure the canvas layout box and resize the backing store.
    ///
    /// # Errors
    ///
    /// The canvas rejected the new size.
    pub fn resize(&self) -> Result<(), JsValue> {
        let mut shared = self.shared.borrow_mut();
        let Shared { viewer, surface } = &mut *shared;
        let dpr = window().map_or(1.0, |w| w.device_pixel_ratio() as f32);
        let viewport = Viewport::new(
            surface.canvas().client_width() as f32,
            surface.canvas().client_height() as f32,
            dpr,
        );
        viewer.resize(viewport, surface).map_err(|e| to_js(&e))
    }

    /// Start drawing on every animation frame. No-op if already running.
    ///
    /// # Errors
    ///
    /// The first animation frame could not be requested.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.render_loop.as_ref().is_some_and(RenderLoop::is_running) {
            return Ok(());
        }
        let scheduler = RafScheduler::new().map_err(|e| to_js(&e))?;
        let shared = Rc::clone(&self.shared);
        let render_loop = RenderLoop::start(Rc::new(scheduler), move |_| {
            let mut shared = shared.borrow_mut();
            let Shared { viewer, surface } = &mut *shared;
            let _ = viewer.render_frame(surface);
        })
        .map_err(|e| to_js(&e))?;
        self.render_loop = Some(render_loop);
        Ok(())
    }

    /// Stop drawing and cancel the pending animation frame.
    pub fn stop(&mut self) {
        if let Some(render_loop) = self.render_loop.take() {
            render_loop.stop();
        }
    }
}

impl WebViewer {
    fn input(&self, event: InputEvent) {
        let _ = self.shared.borrow_mut().viewer.handle_input(event);
    }
}

/// Interaction diagram for `compound` as responsive inline SVG markup.
#[wasm_bindgen]
#[must_use]
pub fn interaction_diagram(compound: &str) -> String {
    InteractionDiagram::generate(compound).to_embedded_markup()
}

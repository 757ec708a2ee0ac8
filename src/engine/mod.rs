//! Viewer engine: geometry memoization, per-frame drawing and the
//! animation loop that drives it.
//!
//! A [`Viewer`] owns everything one canvas needs between frames. A
//! [`RenderLoop`] calls back into it once per frame through a
//! [`FrameScheduler`] and stops requesting frames when it is stopped or
//! dropped.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use molsketch::camera::Viewport;
//! use molsketch::engine::{ManualScheduler, RenderLoop, StructureViewer};
//! use molsketch::renderer::RecordingSurface;
//!
//! let mut viewer = StructureViewer::default();
//! viewer.set_structure("1CRN", "Crambin");
//! let viewer = Rc::new(RefCell::new(viewer));
//! let surface = Rc::new(RefCell::new(RecordingSurface::new(Viewport::new(
//!     320.0, 240.0, 1.0,
//! ))));
//!
//! let scheduler = ManualScheduler::new();
//! let (v, s) = (Rc::clone(&viewer), Rc::clone(&surface));
//! let render_loop = RenderLoop::start(Rc::new(scheduler.clone()), move |_| {
//!     let _ = v.borrow_mut().render_frame(&mut *s.borrow_mut());
//! })
//! .unwrap();
//!
//! let _ = scheduler.run_frame(16.0);
//! render_loop.stop();
//! assert_eq!(render_loop.frames(), 1);
//! ```

pub mod cache;
pub mod models;
pub mod render_loop;
pub mod scheduler;
pub mod viewer;

pub use cache::GeometryCache;
pub use models::{PocketModel, ProteinModel, SceneModel};
pub use render_loop::RenderLoop;
pub use scheduler::{
    FrameCallback, FrameHandle, FrameScheduler, ManualScheduler,
    RetainedCallbacks,
};
pub use viewer::{PocketViewer, StructureViewer, Viewer};

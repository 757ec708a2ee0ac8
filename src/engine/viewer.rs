//! Per-canvas viewer: memoized geometry, camera, drag state, frame pacing.
//!
//! A viewer never owns its surface. Hosts pass the surface into
//! [`Viewer::render_frame`] each frame, usually from a
//! [`RenderLoop`](super::RenderLoop) callback.

use super::cache::GeometryCache;
use super::models::{PocketModel, ProteinModel, SceneModel};
use crate::camera::{CameraState, Projection, Viewport};
use crate::error::MolsketchError;
use crate::input::{InputEvent, InteractionController};
use crate::options::Options;
use crate::renderer::{
    Fill, Overlay, RenderStyle, Surface, PLACEHOLDER_BACKGROUND,
};
use crate::util::frame_timing::FrameTiming;

/// Identifier and display name of the shown structure.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StructureLabel {
    id: String,
    name: String,
}

/// Interactive viewer over one kind of scene geometry.
#[derive(Debug)]
pub struct Viewer<M> {
    options: Options,
    camera: CameraState,
    controller: InteractionController,
    cache: GeometryCache<M>,
    structure: Option<StructureLabel>,
    style: RenderStyle,
    timing: FrameTiming,
}

/// Protein structure viewer (ribbon or ball-and-stick).
pub type StructureViewer = Viewer<ProteinModel>;

/// Ligand binding-pocket viewer.
pub type PocketViewer = Viewer<PocketModel>;

impl<M: SceneModel> Default for Viewer<M> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<M: SceneModel> Viewer<M> {
    /// Viewer with nothing loaded.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            camera: CameraState::new(&options.camera),
            controller: InteractionController::new(&options.camera),
            cache: GeometryCache::new(),
            structure: None,
            style: options.display.render_style,
            timing: FrameTiming::new(options.display.target_fps),
            options,
        }
    }

    /// Show the structure identified by `id`. The geometry is synthesized
    /// only if `id` differs from the one already cached. Camera rotation is
    /// kept. An empty `id` clears the viewer.
    pub fn set_structure(&mut self, id: &str, name: &str) {
        if id.is_empty() {
            self.clear_structure();
            return;
        }
        let _ = self.cache.get_or_build(id);
        self.structure = Some(StructureLabel {
            id: id.to_owned(),
            name: name.to_owned(),
        });
    }

    /// Show nothing; frames draw only the placeholder background.
    pub fn clear_structure(&mut self) {
        self.structure = None;
        self.cache.clear();
    }

    /// Switch render style. Geometry is not rebuilt.
    pub fn set_render_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Current render style.
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    /// Feed a pointer or zoom event. Returns whether the camera changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.controller.handle_event(event, &mut self.camera)
    }

    /// Draw one frame. Returns `false` when the frame limiter skipped it.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.timing.should_render() {
            return false;
        }

        let viewport = surface.viewport();
        let drawable = self.structure.is_some() && !viewport.is_empty();
        let model = match self.cache.current() {
            Some(model) if drawable => model,
            _ => {
                surface.clear(&Fill::Solid(PLACEHOLDER_BACKGROUND));
                self.timing.end_frame();
                return true;
            }
        };

        if !self.controller.is_dragging() {
            self.camera.tick_auto_rotate(self.options.camera.auto_rotate_step);
        }

        let projection = Projection::new(
            &self.camera,
            viewport,
            model.extent(),
            M::lens(&self.options.camera),
        );
        surface.clear(&M::background(viewport));
        model.draw(surface, &projection, self.style);

        if self.options.display.show_overlay {
            if let Some(label) = &self.structure {
                Overlay {
                    title: &label.id,
                    subtitle: &label.name,
                    zoom: self.camera.zoom(),
                    legend: M::shows_confidence_legend(self.style),
                }
                .draw(surface);
            }
        }

        self.timing.end_frame();
        true
    }

    /// Resize `surface` and redraw it, since resizing a canvas discards its
    /// contents. Safe to call before the first frame.
    ///
    /// # Errors
    ///
    /// Whatever the surface reports when it cannot reallocate.
    pub fn resize(
        &mut self,
        viewport: Viewport,
        surface: &mut dyn Surface,
    ) -> Result<(), MolsketchError> {
        surface.resize(viewport).inspect_err(|e| {
            log::warn!(
                "resize to {}x{} failed: {e}",
                viewport.width,
                viewport.height
            );
        })?;
        let _ = self.render_frame(surface);
        Ok(())
    }

    /// Replace options, keeping rotation, zoom (re-clamped) and geometry.
    pub fn set_options(&mut self, options: Options) {
        self.camera.apply_options(&options.camera);
        self.controller.apply_options(&options.camera);
        self.timing.set_target_fps(options.display.target_fps);
        self.options = options;
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Drag state.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Geometry of the shown structure.
    #[must_use]
    pub fn geometry(&self) -> Option<&M> {
        self.structure.as_ref().and(self.cache.current())
    }

    /// Geometry cache, for inspecting rebuilds.
    #[must_use]
    pub fn cache(&self) -> &GeometryCache<M> {
        &self.cache
    }

    /// Identifier and name of the shown structure.
    #[must_use]
    pub fn structure(&self) -> Option<(&str, &str)> {
        self.structure
            .as_ref()
            .map(|s| (s.id.as_str(), s.name.as_str()))
    }

    /// Frame pacing and FPS.
    #[must_use]
    pub fn frame_timing(&self) -> &FrameTiming {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::util::confidence_color::ConfidenceBand;

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Viewport::new(400.0, 300.0, 2.0))
    }

    #[test]
    fn empty_viewer_draws_placeholder_only() {
        let mut viewer = StructureViewer::default();
        let mut surface = surface();
        assert!(viewer.render_frame(&mut surface));
        assert_eq!(
            surface.commands(),
            [DrawCommand::Clear(Fill::Solid(PLACEHOLDER_BACKGROUND))]
        );
    }

    #[test]
    fn empty_id_is_placeholder() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1CRN", "Crambin");
        viewer.set_structure("", "");
        assert!(viewer.structure().is_none());
        assert!(viewer.geometry().is_none());
        let mut surface = surface();
        let _ = viewer.render_frame(&mut surface);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn zero_sized_surface_is_placeholder() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1CRN", "Crambin");
        let mut surface = RecordingSurface::new(Viewport::new(0.0, 300.0, 1.0));
        let before = viewer.camera().rotation();
        assert!(viewer.render_frame(&mut surface));
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(viewer.camera().rotation(), before);
    }

    #[test]
    fn geometry_built_once_across_frames_and_styles() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("6LU7", "Main protease");
        let mut surface = surface();
        for i in 0..20 {
            if i == 10 {
                viewer.set_render_style(RenderStyle::BallAndStick);
            }
            let _ = viewer.render_frame(&mut surface);
        }
        viewer.set_structure("6LU7", "Main protease");
        assert_eq!(viewer.cache().build_count(), 1);

        viewer.set_structure("7BV2", "RdRp");
        assert_eq!(viewer.cache().build_count(), 2);
    }

    #[test]
    fn auto_rotation_pauses_while_dragging() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1UBQ", "Ubiquitin");
        let mut surface = surface();

        let start = viewer.camera().rotation();
        let _ = viewer.render_frame(&mut surface);
        assert!((viewer.camera().rotation().y - start.y - 0.003).abs() < 1e-6);

        let down = InputEvent::PointerDown { x: 10.0, y: 10.0 };
        let _ = viewer.handle_input(down);
        let held = viewer.camera().rotation();
        let _ = viewer.render_frame(&mut surface);
        assert_eq!(viewer.camera().rotation(), held);

        let _ = viewer.handle_input(InputEvent::PointerUp);
        let _ = viewer.render_frame(&mut surface);
        assert!(viewer.camera().rotation().y > held.y);
    }

    #[test]
    fn rotation_persists_across_structure_switch() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1UBQ", "Ubiquitin");
        let _ = viewer.handle_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        let moved = InputEvent::PointerMoved { x: 40.0, y: 20.0 };
        let _ = viewer.handle_input(moved);
        let _ = viewer.handle_input(InputEvent::ZoomIn);
        let camera = viewer.camera().clone();
        viewer.set_structure("2LYZ", "Lysozyme");
        assert_eq!(viewer.camera(), &camera);
    }

    #[test]
    fn style_selects_renderer() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1CRN", "Crambin");
        let mut surface = surface();

        let _ = viewer.render_frame(&mut surface);
        let ribbon_circles = surface.circle_centers().len();
        viewer.set_render_style(RenderStyle::BallAndStick);
        let _ = viewer.render_frame(&mut surface);
        let atoms = viewer.geometry().map_or(0, |m| m.atoms().len());

        assert_eq!(ribbon_circles, 0);
        assert_eq!(surface.circle_centers().len(), atoms);
    }

    #[test]
    fn overlay_follows_options() {
        let mut options = Options::default();
        options.display.show_overlay = true;
        let mut viewer = StructureViewer::new(options);
        viewer.set_structure("1CRN", "Crambin");
        let mut surface = surface();
        let _ = viewer.render_frame(&mut surface);
        assert_eq!(surface.texts()[..3], ["1CRN", "Crambin", "Zoom: 100%"]);
        assert_eq!(surface.texts().len(), 3 + ConfidenceBand::ALL.len());

        viewer.set_render_style(RenderStyle::BallAndStick);
        let _ = viewer.render_frame(&mut surface);
        assert_eq!(surface.texts(), ["1CRN", "Crambin", "Zoom: 100%"]);
    }

    #[test]
    fn set_options_reclamps_zoom_and_keeps_rotation() {
        let mut viewer = StructureViewer::default();
        viewer.set_structure("1UBQ", "Ubiquitin");
        for _ in 0..15 {
            let _ = viewer.handle_input(InputEvent::ZoomIn);
        }
        let _ = viewer.handle_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        let moved = InputEvent::PointerMoved { x: 30.0, y: 15.0 };
        let _ = viewer.handle_input(moved);
        let _ = viewer.handle_input(InputEvent::PointerUp);
        let rotation = viewer.camera().rotation();
        assert_eq!(viewer.camera().zoom(), 3.0);

        let mut options = Options::default();
        options.camera.max_zoom = 2.0;
        options.display.show_overlay = true;
        viewer.set_options(options);

        assert_eq!(viewer.camera().zoom(), 2.0);
        assert_eq!(viewer.camera().rotation(), rotation);
        assert!(viewer.options().display.show_overlay);
        assert_eq!(viewer.cache().build_count(), 1);
        let _ = viewer.handle_input(InputEvent::ZoomIn);
        assert_eq!(viewer.camera().zoom(), 2.0);
    }

    #[test]
    fn pocket_viewer_draws_residue_labels() {
        let mut viewer = PocketViewer::default();
        viewer.set_structure("Ivacaftor (VX-770)", "Ivacaftor");
        let mut surface = surface();
        let _ = viewer.render_frame(&mut surface);
        let residues =
            viewer.geometry().map_or(0, |m| m.pocket().residues().len());
        assert_eq!(surface.texts().len(), residues);
        assert!(matches!(
            surface.commands()[0],
            DrawCommand::Clear(Fill::Radial(_))
        ));
    }

    #[test]
    fn resize_before_first_frame() {
        let mut viewer = PocketViewer::default();
        let mut surface = RecordingSurface::default();
        viewer
            .resize(Viewport::new(320.0, 200.0, 1.5), &mut surface)
            .unwrap();
        assert_eq!(surface.viewport().pixel_size(), (480, 300));
        assert_eq!(surface.commands().len(), 1);
        assert!(viewer.render_frame(&mut surface));
    }

    #[test]
    fn frame_limiter_skips_frames() {
        let mut options = Options::default();
        options.display.target_fps = 1;
        let mut viewer = StructureViewer::new(options);
        let mut surface = surface();
        // The limiter measures from construction, so an immediate frame is
        // too early.
        assert!(!viewer.render_frame(&mut surface));
        assert!(surface.commands().is_empty());
    }
}

//! Drag-to-rotate and stepped zoom.
//!
//! The [`InteractionController`] owns the transient drag state and applies
//! events to a viewer's [`CameraState`]. While a drag is active the viewer
//! suspends ambient auto-rotation.

use glam::Vec2;

use super::event::InputEvent;
use crate::camera::CameraState;
use crate::options::CameraOptions;

/// Applies [`InputEvent`]s to a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    /// Last pointer position while dragging; `None` when idle.
    drag_anchor: Option<Vec2>,
    /// Radians of rotation per CSS pixel of drag.
    rotate_speed: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl InteractionController {
    /// Controller using the configured rotate speed.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            drag_anchor: None,
            rotate_speed: options.rotate_speed,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Re-read the rotate speed, keeping drag state.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.rotate_speed = options.rotate_speed;
    }

    /// Apply `event` to `camera`. Returns whether the camera changed.
    ///
    /// Horizontal drag turns yaw and vertical drag turns pitch. Moves while
    /// not dragging are ignored, and zoom leaves the drag state alone.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        camera: &mut CameraState,
    ) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag_anchor = Some(Vec2::new(x, y));
                false
            }
            InputEvent::PointerMoved { x, y } => {
                let Some(anchor) = self.drag_anchor else {
                    return false;
                };
                let position = Vec2::new(x, y);
                let delta = position - anchor;
                self.drag_anchor = Some(position);
                if delta == Vec2::ZERO {
                    return false;
                }
                camera.rotate(
                    delta.y * self.rotate_speed,
                    delta.x * self.rotate_speed,
                );
                true
            }
            InputEvent::PointerUp | InputEvent::PointerLeft => {
                self.drag_anchor = None;
                false
            }
            InputEvent::ZoomIn => {
                let before = camera.zoom();
                camera.zoom_in();
                camera.zoom() != before
            }
            InputEvent::ZoomOut => {
                let before = camera.zoom();
                camera.zoom_out();
                camera.zoom() != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_maps_dx_to_yaw_and_dy_to_pitch() {
        let mut camera = CameraState::default();
        let start = camera.rotation();
        let mut controller = InteractionController::default();

        let down = InputEvent::PointerDown { x: 100.0, y: 100.0 };
        assert!(!controller.handle_event(down, &mut camera));
        assert!(controller.is_dragging());
        let moved = InputEvent::PointerMoved { x: 110.0, y: 95.0 };
        assert!(controller.handle_event(moved, &mut camera));

        let delta = camera.rotation() - start;
        assert!((delta.y - 0.1).abs() < 1e-6);
        assert!((delta.x + 0.05).abs() < 1e-6);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut camera = CameraState::default();
        let before = camera.clone();
        let mut controller = InteractionController::default();
        let moved = InputEvent::PointerMoved { x: 5.0, y: 5.0 };
        assert!(!controller.handle_event(moved, &mut camera));
        assert_eq!(camera, before);
    }

    #[test]
    fn release_and_leave_end_drag() {
        let mut camera = CameraState::default();
        let mut controller = InteractionController::default();
        let down = InputEvent::PointerDown { x: 0.0, y: 0.0 };
        let moved = InputEvent::PointerMoved { x: 50.0, y: 50.0 };
        for end in [InputEvent::PointerUp, InputEvent::PointerLeft] {
            let _ = controller.handle_event(down, &mut camera);
            let _ = controller.handle_event(end, &mut camera);
            assert!(!controller.is_dragging());
            let before = camera.rotation();
            let _ = controller.handle_event(moved, &mut camera);
            assert_eq!(camera.rotation(), before);
        }
    }

    #[test]
    fn zoom_keeps_drag_state() {
        let mut camera = CameraState::default();
        let mut controller = InteractionController::default();
        let down = InputEvent::PointerDown { x: 0.0, y: 0.0 };
        let _ = controller.handle_event(down, &mut camera);
        assert!(controller.handle_event(InputEvent::ZoomIn, &mut camera));
        assert!(controller.is_dragging());
        assert!((camera.zoom() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn zoom_at_limit_reports_no_change() {
        let mut camera = CameraState::default();
        camera.set_zoom(3.0);
        let mut controller = InteractionController::default();
        assert!(!controller.handle_event(InputEvent::ZoomIn, &mut camera));
        assert!(controller.handle_event(InputEvent::ZoomOut, &mut camera));
    }
}

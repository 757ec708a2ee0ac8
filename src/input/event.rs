/// Platform-agnostic pointer and zoom events.
///
/// Hosts translate their native events (DOM pointer events, button clicks)
/// into these and feed them to an
/// [`InteractionController`](super::InteractionController).
///
/// # Example
///
/// ```
/// use molsketch::camera::CameraState;
/// use molsketch::input::{InputEvent, InteractionController};
///
/// let mut camera = CameraState::default();
/// let mut controller = InteractionController::default();
/// let down = InputEvent::PointerDown { x: 10.0, y: 10.0 };
/// let _ = controller.handle_event(down, &mut camera);
/// let moved = InputEvent::PointerMoved { x: 30.0, y: 10.0 };
/// assert!(controller.handle_event(moved, &mut camera));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed at a position.
    PointerDown {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Pointer moved to a position.
    PointerMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Primary button released.
    PointerUp,
    /// Pointer left the surface; ends any drag.
    PointerLeft,
    /// One zoom step in.
    ZoomIn,
    /// One zoom step out.
    ZoomOut,
}

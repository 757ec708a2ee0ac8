//! Input handling: platform-agnostic events and the controller that turns
//! them into camera rotation and zoom.

/// Platform-agnostic input events.
pub mod event;
/// Drag and zoom handling.
pub mod processor;

pub use event::InputEvent;
pub use processor::InteractionController;

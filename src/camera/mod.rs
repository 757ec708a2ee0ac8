//! Camera state and projection.
//!
//! A viewer owns one [`CameraState`] (pitch, yaw, zoom). Each frame it builds
//! a [`Projection`] from the camera, the surface [`Viewport`] and the
//! geometry extent, and projects every point through it.

/// Camera rotation and zoom state.
pub mod core;
/// Rotation, perspective division and viewport fitting.
pub mod projection;

pub use self::core::CameraState;
pub use projection::{
    Lens, ProjectedPoint, Projection, Viewport, FALLBACK_EXTENT,
};

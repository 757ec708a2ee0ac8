//! Shared utilities.
//!
//! The seeded pseudo-random stream, colors, confidence-to-color mapping and
//! frame timing.

pub mod color;
pub mod confidence_color;
pub mod frame_timing;
pub mod prng;

pub use color::Rgba;
pub use prng::{PrngState, SeededRng};

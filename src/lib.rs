// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Deterministic procedural molecular sketches rendered on a software canvas.
//!
//! Molsketch turns an opaque identifier (a structure code or compound name)
//! into a plausible-looking protein backbone or ligand binding pocket, then
//! draws it with perspective projection, painter's-algorithm compositing and
//! pointer-driven rotation. The same seed always produces the same geometry,
//! and the seeded 2D interaction diagram agrees with the 3D views.
//!
//! # Key entry points
//!
//! - [`engine::StructureViewer`] / [`engine::PocketViewer`] - per-canvas
//!   viewers owning camera, drag state and memoized geometry
//! - [`engine::RenderLoop`] - cancelable cooperative animation loop
//! - [`synthesis`] - seeded backbone, atom and pocket generators
//! - [`diagram::InteractionDiagram`] - seeded 2D SVG interaction diagram
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on one thread. Geometry is synthesized once per seed and
//! cached; every animation frame only re-projects and re-draws it onto a
//! [`renderer::Surface`]. Frames are requested through an
//! [`engine::FrameScheduler`], which is `requestAnimationFrame` in the
//! browser and a manually pumped queue everywhere else.

pub mod camera;
pub mod diagram;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
pub mod synthesis;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::MolsketchError;

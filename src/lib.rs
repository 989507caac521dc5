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
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Orbiting sphere chain with a GPU ribbon trail, built on wgpu.
//!
//! A fixed root sphere carries a chain of spheres, each orbiting the one
//! before it with its own rotation rates. The edge across the last sphere
//! is swept into a ribbon held in a fixed-size circular vertex buffer.
//!
//! # Key entry points
//!
//! - [`OrreryEngine`] - GPU context, renderers and the shared scene
//! - [`scene::Scene`] - chain, trail and live controls; one
//!   [`tick`](scene::Scene::tick) per period
//! - [`orbit::SphereChain`] - parent-ordered sphere instances
//! - [`trail::RibbonTrail`] - circular ribbon store and its strip draws
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! All geometry is built on the CPU and expressed as
//! [`draw::DrawCommand`]s, so everything up to the wgpu calls is testable
//! without a device. A [`scene::Ticker`] thread advances the scene at a
//! fixed period; frames take the scene with a non-blocking lock and are
//! dropped while a tick holds it.

pub mod camera;
pub mod draw;
/// Engine facade: GPU context, renderers, ticker and command dispatch.
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod options;
pub mod orbit;
pub mod renderer;
pub mod scene;
pub mod trail;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{command::OrreryCommand, OrreryEngine};
pub use error::OrreryError;
pub use input::{InputEvent, InputProcessor, KeyAction, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};

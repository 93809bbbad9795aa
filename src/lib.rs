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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated interactive 3D scene viewer built on wgpu.
//!
//! Mira renders a triangle mesh together with a reference grid and
//! coordinate axes, steered by a navigable camera with free-look and
//! orbit-around-target interaction and perspective/orthographic
//! projection.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the orientable, re-projectable viewpoint
//! - [`engine::MeshRenderEngine`] - the rendering engine
//! - [`options::Options`] - runtime configuration (camera, display,
//!   keybindings)
//! - [`viewer::Viewer`] - a standalone winit window (feature `viewer`)
//!
//! # Architecture
//!
//! The camera is a pure state machine: the host feeds it mouse/keyboard
//! deltas translated into [`engine::command::MiraCommand`] values, and
//! pulls the lazily cached view-projection matrix once per frame for
//! upload to the shader uniform. Everything around it — vertex
//! buffering, pipelines, the window event loop — is thin data marshaling
//! over wgpu and winit.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraConfig, InteractionMode, ProjectionMode};
pub use engine::command::MiraCommand;
pub use engine::MeshRenderEngine;
pub use error::MiraError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use scene::SceneData;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;

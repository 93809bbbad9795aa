//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as a [`MiraCommand`].
//! Consumers construct commands and pass them to
//! [`MeshRenderEngine::execute`](super::MeshRenderEngine::execute).

use glam::Vec2;

use crate::camera::{InteractionMode, ProjectionMode};

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the viewer can do
/// interactively. The engine never cares *how* a command was triggered —
/// keyboard, mouse, or API all look identical:
///
/// ```ignore
/// engine.execute(MiraCommand::ToggleGrid);
/// engine.execute(MiraCommand::Zoom { delta: 1.0, precise: false });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiraCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit/look by `delta` pixels of mouse movement (left drag).
    OrbitDrag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Roll around the view direction by `delta` pixels (right drag).
    RollDrag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Slide in the view plane by `delta` pixels (middle drag).
    PanDrag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly along the view direction (positive = forward).
    Zoom {
        /// Scroll amount.
        delta: f32,
        /// Use the fine-grained step.
        precise: bool,
    },

    /// Switch the camera interaction mode.
    SetInteractionMode(InteractionMode),

    /// Switch the camera projection mode.
    SetProjectionMode(ProjectionMode),

    /// Restore the camera's configured rest pose.
    ResetCamera,

    /// Log the camera's position and orientation.
    LogCamera,

    // ── Display ─────────────────────────────────────────────────────
    /// Toggle reference-grid visibility.
    ToggleGrid,

    /// Toggle coordinate-axes visibility.
    ToggleAxes,
}

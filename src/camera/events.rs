//! Change notifications announced by the camera.
//!
//! Observers register through [`Camera::subscribe`](super::Camera::subscribe)
//! and are invoked synchronously after the corresponding mutation
//! completes.

use glam::Vec3;

use super::config::{InteractionMode, ProjectionMode};

/// A state change the camera announces to its observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// The interaction mode was switched.
    InteractionModeChanged(InteractionMode),
    /// The projection mode was switched.
    ProjectionModeChanged(ProjectionMode),
    /// The orbit/look target moved.
    TargetChanged(Vec3),
}

/// A registered observer callback.
pub(crate) type CameraObserver = Box<dyn FnMut(&CameraEvent)>;

//! Camera system for 3D scene viewing.
//!
//! Provides a quaternion-based camera with free-look and orbit-around-target
//! interaction, perspective and orthographic projection, change
//! notifications, and a lazily rebuilt view-projection matrix.

/// Immutable per-session configuration and mode enums.
pub mod config;
/// The stateful camera and its GPU uniform type.
pub mod core;
/// Change notifications announced after mutations.
pub mod events;
/// Mouse-gesture to camera-operation mapping.
pub mod gestures;

pub use self::config::{
    CameraConfig, CameraConfigError, InteractionMode, ProjectionMode,
};
pub use self::core::{Camera, CameraUniform};
pub use self::events::CameraEvent;
pub use self::gestures::GestureMapper;

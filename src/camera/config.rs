//! Camera configuration: interaction/projection modes, projection
//! parameters, and the world-axis convention.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tolerance for the world-basis validation checks.
const AXIS_TOLERANCE: f32 = 1e-4;

/// How mouse interaction steers the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Orientation and position change independently; drags rotate the
    /// camera in place.
    Free,
    /// The camera orbits a reference point; rotation preserves the
    /// distance to it.
    Target,
}

/// The projection volume used when building the frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Symmetric perspective frustum.
    Perspective,
    /// Orthographic box sized to match the perspective footprint at the
    /// target distance.
    Orthographic,
}

/// Per-session camera configuration, fixed at construction.
///
/// `world_forward`/`world_right`/`world_up` describe how the host
/// application's world axes map onto the camera's local forward/right/up.
/// They must form a right-handed orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Starting interaction mode.
    pub interaction: InteractionMode,
    /// Starting projection mode.
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance (ideally at least the scene diameter).
    pub far_plane: f32,
    /// Starting world-space camera position.
    pub initial_position: Vec3,
    /// World-space direction the camera faces at rest.
    pub world_forward: Vec3,
    /// World-space direction to the camera's right at rest.
    pub world_right: Vec3,
    /// World-space up direction at rest.
    pub world_up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            interaction: InteractionMode::Target,
            projection: ProjectionMode::Perspective,
            fov_y: 45.0,
            near_plane: 1.0,
            far_plane: 4000.0,
            initial_position: Vec3::new(0.0, 0.0, 1000.0),
            world_forward: Vec3::new(0.0, 0.0, -1.0),
            world_right: Vec3::X,
            world_up: Vec3::Y,
        }
    }
}

impl CameraConfig {
    /// Check clip planes, field of view, and the world-axis basis.
    ///
    /// # Errors
    ///
    /// Returns [`CameraConfigError`] if the clip planes are non-positive
    /// or inverted, the field of view lies outside (0°, 180°), or the
    /// world axes are not a right-handed orthonormal basis.
    pub fn validate(&self) -> Result<(), CameraConfigError> {
        if !(self.near_plane > 0.0 && self.near_plane < self.far_plane) {
            return Err(CameraConfigError::InvalidClipPlanes {
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        if !(self.fov_y > 0.0 && self.fov_y < 180.0) {
            return Err(CameraConfigError::InvalidFieldOfView(self.fov_y));
        }

        for (axis, v) in [
            ("world_forward", self.world_forward),
            ("world_right", self.world_right),
            ("world_up", self.world_up),
        ] {
            if (v.length() - 1.0).abs() > AXIS_TOLERANCE {
                return Err(CameraConfigError::NonUnitAxis {
                    axis,
                    length: v.length(),
                });
            }
        }

        if self.world_forward.dot(self.world_right).abs() > AXIS_TOLERANCE
            || self.world_forward.dot(self.world_up).abs() > AXIS_TOLERANCE
            || self.world_right.dot(self.world_up).abs() > AXIS_TOLERANCE
        {
            return Err(CameraConfigError::NonOrthogonalAxes);
        }

        // right × up points backward in a right-handed basis
        let back = self.world_right.cross(self.world_up);
        if back.distance(-self.world_forward) > AXIS_TOLERANCE {
            return Err(CameraConfigError::LeftHandedBasis);
        }

        Ok(())
    }
}

/// Errors produced by [`CameraConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraConfigError {
    /// Clip planes are non-positive or inverted.
    InvalidClipPlanes {
        /// Configured near plane.
        near: f32,
        /// Configured far plane.
        far: f32,
    },
    /// Field of view outside the open interval (0°, 180°).
    InvalidFieldOfView(f32),
    /// A world axis is not unit length.
    NonUnitAxis {
        /// Which axis failed.
        axis: &'static str,
        /// Its actual length.
        length: f32,
    },
    /// The world axes are not mutually orthogonal.
    NonOrthogonalAxes,
    /// The world axes form a left-handed basis.
    LeftHandedBasis,
}

impl fmt::Display for CameraConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClipPlanes { near, far } => {
                write!(f, "invalid clip planes: near {near}, far {far}")
            }
            Self::InvalidFieldOfView(fov) => {
                write!(f, "field of view {fov}° outside (0°, 180°)")
            }
            Self::NonUnitAxis { axis, length } => {
                write!(f, "{axis} has length {length}, expected 1")
            }
            Self::NonOrthogonalAxes => {
                write!(f, "world axes are not mutually orthogonal")
            }
            Self::LeftHandedBasis => {
                write!(f, "world axes form a left-handed basis")
            }
        }
    }
}

impl std::error::Error for CameraConfigError {}

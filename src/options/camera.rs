use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraConfig, InteractionMode, ProjectionMode};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement, projection, and gesture sensitivities.
///
/// The defaults reproduce the viewer's conventions: a z-up world with
/// the grid in the x-y plane, and the camera starting high on the
/// positive x side.
pub struct CameraOptions {
    /// Starting interaction mode.
    pub interaction: InteractionMode,
    /// Starting projection mode.
    pub projection: ProjectionMode,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Near clipping plane distance.
    pub near_plane: f32,
    /// Far clipping plane distance.
    pub far_plane: f32,
    /// Starting world-space camera position.
    pub initial_position: [f32; 3],
    /// World-space direction the camera faces at rest.
    pub world_forward: [f32; 3],
    /// World-space direction to the camera's right at rest.
    pub world_right: [f32; 3],
    /// World-space up direction at rest.
    pub world_up: [f32; 3],
    /// Drag rotation, in degrees per pixel.
    pub rotate_speed: f32,
    /// Pan distance, in world units per pixel.
    pub pan_speed: f32,
    /// Dolly distance per wheel notch, in world units.
    pub zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            interaction: InteractionMode::Target,
            projection: ProjectionMode::Perspective,
            fov_y: 45.0,
            near_plane: 1.0,
            far_plane: 4000.0,
            initial_position: [900.0, 200.0, 100.0],
            world_forward: [-1.0, 0.0, 0.0],
            world_right: [0.0, 1.0, 0.0],
            world_up: [0.0, 0.0, 1.0],
            rotate_speed: 0.2,
            pan_speed: 1.0,
            zoom_step: 150.0,
        }
    }
}

impl CameraOptions {
    /// Build the camera configuration these options describe.
    #[must_use]
    pub fn to_config(&self) -> CameraConfig {
        CameraConfig {
            interaction: self.interaction,
            projection: self.projection,
            fov_y: self.fov_y,
            near_plane: self.near_plane,
            far_plane: self.far_plane,
            initial_position: Vec3::from_array(self.initial_position),
            world_forward: Vec3::from_array(self.world_forward),
            world_right: Vec3::from_array(self.world_right),
            world_up: Vec3::from_array(self.world_up),
        }
    }
}

//! Maps mouse-drag and wheel deltas onto camera operations.
//!
//! The conventions follow the viewer's interaction model: the left
//! button orbits/looks, the right button rolls, the middle button pans,
//! and the wheel dollies along the view direction. In Target mode the
//! horizontal orbit axis is the configured world up — flipped while the
//! camera is upside down so dragging left always turns the scene the
//! same way. In Free mode roll and pan reverse sign, matching the
//! camera-moves-instead-of-scene feel.

use glam::Vec2;

use super::config::InteractionMode;
use super::core::Camera;

/// Converts pixel deltas from drags and scrolls into camera calls.
#[derive(Debug, Clone, Copy)]
pub struct GestureMapper {
    /// Rotation per pixel of drag, in degrees.
    pub rotate_speed: f32,
    /// World units of pan per pixel of drag.
    pub pan_speed: f32,
    /// World units travelled per wheel notch.
    pub zoom_step: f32,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self {
            rotate_speed: 0.2,
            pan_speed: 1.0,
            zoom_step: 150.0,
        }
    }
}

impl GestureMapper {
    /// Left-button drag: yaw then pitch.
    pub fn orbit(&self, camera: &mut Camera, delta: Vec2) {
        let yaw_axis = match camera.interaction_mode() {
            InteractionMode::Free => camera.up_vector(),
            InteractionMode::Target => {
                if camera.is_upside_down() {
                    -camera.world_up()
                } else {
                    camera.world_up()
                }
            }
        };
        camera.rotate_axis_angle(-self.rotate_speed * delta.x, yaw_axis);
        camera.rotate_axis_angle(
            -self.rotate_speed * delta.y,
            camera.right_vector(),
        );
    }

    /// Right-button drag: roll around the view direction, plus pitch.
    pub fn roll(&self, camera: &mut Camera, delta: Vec2) {
        let dx = match camera.interaction_mode() {
            InteractionMode::Free => -delta.x,
            InteractionMode::Target => delta.x,
        };
        camera.rotate_axis_angle(
            -self.rotate_speed * dx,
            camera.forward_vector(),
        );
        camera.rotate_axis_angle(
            -self.rotate_speed * delta.y,
            camera.right_vector(),
        );
    }

    /// Middle-button drag: slide in the view plane.
    pub fn pan(&self, camera: &mut Camera, delta: Vec2) {
        let (dx, dy) = match camera.interaction_mode() {
            InteractionMode::Free => (-delta.x, -delta.y),
            InteractionMode::Target => (delta.x, delta.y),
        };
        camera.translate(camera.right_vector() * (-dx * self.pan_speed));
        camera.translate(camera.up_vector() * (dy * self.pan_speed));
    }

    /// Wheel scroll: dolly along the view direction. `precise` divides
    /// the step by ten.
    pub fn zoom(&self, camera: &mut Camera, delta: f32, precise: bool) {
        let mut step = self.zoom_step;
        if precise {
            step /= 10.0;
        }
        if delta < 0.0 {
            step = -step;
        }
        camera.translate(camera.forward_vector() * step);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::camera::config::CameraConfig;

    fn camera() -> Camera {
        Camera::new(CameraConfig {
            initial_position: Vec3::new(900.0, 200.0, 100.0),
            world_forward: Vec3::new(-1.0, 0.0, 0.0),
            world_right: Vec3::new(0.0, 1.0, 0.0),
            world_up: Vec3::new(0.0, 0.0, 1.0),
            ..CameraConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn orbit_preserves_target_distance() {
        let mut cam = camera();
        let mapper = GestureMapper::default();
        let before = cam.distance();

        mapper.orbit(&mut cam, Vec2::new(120.0, -45.0));

        assert!((cam.distance() - before).abs() < 1e-3);
        assert!(
            ((cam.target() - cam.position()).length() - before).abs() < 1e-3
        );
    }

    #[test]
    fn orbit_yaw_matches_drag_angle() {
        let mut cam = camera();
        let mapper = GestureMapper::default();
        let forward_before = cam.forward_vector();

        // 450 px at 0.2°/px is a quarter turn about world up.
        mapper.orbit(&mut cam, Vec2::new(450.0, 0.0));

        let expected = Quat::from_axis_angle(
            cam.world_up(),
            (-90.0_f32).to_radians(),
        ) * forward_before;
        assert!(cam.forward_vector().abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn pan_slides_in_view_plane() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        let mapper = GestureMapper::default();
        let right = cam.right_vector();
        let up = cam.up_vector();
        let before = cam.position();

        mapper.pan(&mut cam, Vec2::new(10.0, 4.0));

        // Free mode negates both deltas.
        let expected = before + right * 10.0 + up * -4.0;
        assert!(cam.position().abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn zoom_moves_along_forward() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        let mapper = GestureMapper::default();
        let before = cam.position();
        let forward = cam.forward_vector();

        mapper.zoom(&mut cam, 1.0, false);
        assert!(cam.position().abs_diff_eq(before + forward * 150.0, 1e-3));

        mapper.zoom(&mut cam, -1.0, true);
        assert!(cam
            .position()
            .abs_diff_eq(before + forward * (150.0 - 15.0), 1e-3));
    }

    #[test]
    fn roll_keeps_forward_direction() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        let mapper = GestureMapper::default();
        let forward = cam.forward_vector();

        mapper.roll(&mut cam, Vec2::new(90.0, 0.0));

        assert!(cam.forward_vector().abs_diff_eq(forward, 1e-3));
        assert!((cam.orientation().length() - 1.0).abs() < 1e-4);
    }
}

//! The stateful camera: position, orientation, orbit target, and a
//! lazily rebuilt view-projection matrix.
//!
//! The camera keeps its local frame fixed ([`LOCAL_FORWARD`] /
//! [`LOCAL_RIGHT`] / [`LOCAL_UP`]) and carries a single quaternion,
//! derived once from the configured world basis, that converts between
//! the host's world-axis convention and that local frame. Every mutating
//! operation marks the cached view-projection matrix dirty;
//! [`to_matrix`](Camera::to_matrix) rebuilds it on demand.

use glam::{Mat3, Mat4, Quat, Vec3};

use super::config::{
    CameraConfig, CameraConfigError, InteractionMode, ProjectionMode,
};
use super::events::{CameraEvent, CameraObserver};

/// Camera-local forward axis (into the screen).
pub const LOCAL_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
/// Camera-local right axis.
pub const LOCAL_RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// Camera-local up axis.
pub const LOCAL_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Look vectors shorter than this cannot define an orientation.
const MIN_LOOK_LENGTH_SQ: f32 = 1e-10;

/// Rotation whose x/y/z images are (−forward, right, up).
fn basis_rotation(forward: Vec3, right: Vec3, up: Vec3) -> Quat {
    Quat::from_mat3(&Mat3::from_cols(-forward, right, up)).normalize()
}

/// Orientation looking along `−backward`, with `up_ref` resolving roll.
///
/// When `backward` is near-parallel to `up_ref`, `fallback_right`
/// (projected perpendicular to `backward`) rebuilds the basis instead.
fn look_rotation(backward: Vec3, up_ref: Vec3, fallback_right: Vec3) -> Quat {
    let z = backward.normalize();
    let mut x = up_ref.cross(z);
    if x.length_squared() < MIN_LOOK_LENGTH_SQ {
        x = fallback_right - z * fallback_right.dot(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// An orientable, re-projectable viewpoint over the scene.
pub struct Camera {
    config: CameraConfig,
    /// Fixed rotation from the configured world basis to the local basis.
    world_to_local: Quat,
    position: Vec3,
    orientation: Quat,
    /// Orbit reference point (meaningful in Target mode).
    target: Vec3,
    /// Cached `|target − position|`.
    distance: f32,
    aspect_ratio: f32,
    projection: Mat4,
    view_proj: Mat4,
    dirty: bool,
    observers: Vec<CameraObserver>,
}

impl Camera {
    /// Build a camera from a validated configuration, placed at its rest
    /// pose (initial position, target at the world origin).
    ///
    /// # Errors
    ///
    /// Returns [`CameraConfigError`] when the configuration fails
    /// [`CameraConfig::validate`].
    pub fn new(config: CameraConfig) -> Result<Self, CameraConfigError> {
        config.validate()?;

        let local = basis_rotation(LOCAL_FORWARD, LOCAL_RIGHT, LOCAL_UP);
        let world = basis_rotation(
            config.world_forward,
            config.world_right,
            config.world_up,
        );

        let mut camera = Self {
            config,
            world_to_local: (local * world.conjugate()).normalize(),
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            target: Vec3::ZERO,
            distance: 0.0,
            aspect_ratio: 1.0,
            projection: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            dirty: true,
            observers: Vec::new(),
        };
        camera.reset();
        Ok(camera)
    }

    /// Register an observer, invoked synchronously after each announced
    /// state change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&CameraEvent) + 'static,
    ) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: CameraEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    // ── Transform by ─────────────────────────────────────────────────

    /// Move the camera by `delta` in world space.
    pub fn translate(&mut self, delta: Vec3) {
        self.dirty = true;
        self.position += delta;

        if self.config.interaction == InteractionMode::Target {
            self.distance = (self.target - self.position).length();
            self.update_frustum();
        }
    }

    /// Apply `delta` on top of the current orientation.
    ///
    /// In Target mode the rotation happens around the target: the camera
    /// moves on the orbit sphere and its distance to the target is
    /// preserved.
    pub fn rotate(&mut self, delta: Quat) {
        self.dirty = true;
        self.orientation = (delta * self.orientation).normalize();

        if self.config.interaction == InteractionMode::Target {
            let old = self.target - self.position;
            let new = delta * old;
            self.position += old - new;
        }
    }

    /// Rotate by `angle_deg` degrees around `axis`.
    pub fn rotate_axis_angle(&mut self, angle_deg: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.rotate(Quat::from_axis_angle(axis, angle_deg.to_radians()));
    }

    // ── Transform to ─────────────────────────────────────────────────

    /// Place the camera at an absolute world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.dirty = true;
        self.position = position;

        if self.config.interaction == InteractionMode::Target {
            self.distance = (self.target - self.position).length();
            self.update_frustum();
        }
    }

    /// Replace the orientation.
    ///
    /// In Target mode the position is re-derived so the camera keeps
    /// looking at the unchanged target from the same distance, along the
    /// new forward direction.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.dirty = true;
        self.orientation = orientation.normalize();

        if self.config.interaction == InteractionMode::Target {
            let old_distance = (self.target - self.position).length();
            self.position =
                self.target - self.forward_vector() * old_distance;
            self.distance = old_distance;
        }
    }

    /// Aim the camera at `target` and make it the orbit reference point.
    ///
    /// The camera's pre-update up vector resolves the roll of the derived
    /// look rotation. A target coinciding with the camera position leaves
    /// the orientation unchanged.
    pub fn set_target(&mut self, target: Vec3) {
        self.dirty = true;
        self.target = target;

        let backward = self.position - self.target;
        if backward.length_squared() >= MIN_LOOK_LENGTH_SQ {
            self.orientation = look_rotation(
                backward,
                self.up_vector(),
                self.right_vector(),
            );
        }
        self.distance = backward.length();
        self.update_frustum();

        self.notify(CameraEvent::TargetChanged(target));
    }

    /// Switch the interaction mode.
    ///
    /// Entering Target mode picks a new target ahead of the camera, at
    /// the configured initial distance plus the natural log of the
    /// current distance from the world origin. Hosts that know their
    /// scene should prefer [`orbit_around`](Self::orbit_around), which
    /// takes the target explicitly.
    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.config.interaction = mode;
        self.notify(CameraEvent::InteractionModeChanged(mode));

        if mode == InteractionMode::Target {
            let origin_distance = self.position.length();
            let log_term = if origin_distance > f32::EPSILON {
                origin_distance.ln()
            } else {
                0.0
            };
            let reach = self.config.initial_position.length() + log_term;
            let target = self.position + self.forward_vector() * reach;
            self.set_target(target);
        }
    }

    /// Enter Target mode orbiting an explicit point.
    pub fn orbit_around(&mut self, target: Vec3) {
        self.config.interaction = InteractionMode::Target;
        self.notify(CameraEvent::InteractionModeChanged(
            InteractionMode::Target,
        ));
        self.set_target(target);
    }

    /// Switch the projection kind and rebuild the frustum.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.config.projection = mode;
        self.set_aspect_ratio(self.aspect_ratio);
        self.notify(CameraEvent::ProjectionModeChanged(mode));
    }

    /// Set the viewport aspect ratio (width / height).
    ///
    /// Non-positive or non-finite ratios are rejected and leave the
    /// camera untouched.
    pub fn set_aspect_ratio(&mut self, ratio: f32) {
        if !(ratio.is_finite() && ratio > 0.0) {
            log::warn!("ignoring invalid aspect ratio {ratio}");
            return;
        }
        self.dirty = true;
        self.aspect_ratio = ratio;
        self.update_frustum();
    }

    /// Return to the configured rest pose: initial position, target at
    /// the world origin, canonical rest orientation derived from the
    /// world-axis convention.
    pub fn reset(&mut self) {
        self.set_position(self.config.initial_position);
        self.set_target(Vec3::ZERO);
        self.orientation = self.world_to_local.conjugate();
        self.dirty = true;
    }

    // ── Frustum ──────────────────────────────────────────────────────

    /// Rebuild the projection matrix. The far plane is pushed out to at
    /// least twice the target distance so the orbit point always stays
    /// inside the frustum.
    fn update_frustum(&mut self) {
        let near = self.config.near_plane;
        let far = (2.0 * self.distance).max(self.config.far_plane);

        self.projection = match self.config.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.config.fov_y.to_radians(),
                self.aspect_ratio,
                near,
                far,
            ),
            ProjectionMode::Orthographic => {
                // Cross-section matches the perspective frustum at the
                // target distance, so switching projections keeps the
                // apparent size.
                let half_height = self.distance
                    * (self.config.fov_y.to_radians() / 2.0).tan();
                let half_width = self.aspect_ratio * half_height;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    near,
                    far,
                )
            }
        };
    }

    // ── Matrices ─────────────────────────────────────────────────────

    /// The combined view-projection matrix, rebuilt if any input changed
    /// since the last call.
    ///
    /// The returned reference is only valid until the next mutating call;
    /// re-query instead of retaining it.
    pub fn to_matrix(&mut self) -> &Mat4 {
        if self.dirty {
            self.dirty = false;
            let view = Mat4::from_quat(self.orientation.conjugate())
                * Mat4::from_translation(-self.position);
            self.view_proj = self.projection * view;
        }
        &self.view_proj
    }

    /// The projection matrix alone.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// World-space camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space orientation (unit quaternion).
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// The orbit/look reference point.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Cached distance from the camera to the target.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current viewport aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Current interaction mode.
    pub fn interaction_mode(&self) -> InteractionMode {
        self.config.interaction
    }

    /// Current projection mode.
    pub fn projection_mode(&self) -> ProjectionMode {
        self.config.projection
    }

    /// The configuration the camera was built from (modes reflect later
    /// switches).
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// World-space forward direction.
    pub fn forward_vector(&self) -> Vec3 {
        self.orientation * LOCAL_FORWARD
    }

    /// World-space right direction.
    pub fn right_vector(&self) -> Vec3 {
        self.orientation * LOCAL_RIGHT
    }

    /// World-space up direction.
    pub fn up_vector(&self) -> Vec3 {
        self.orientation * LOCAL_UP
    }

    /// Configured world-up direction.
    pub fn world_up(&self) -> Vec3 {
        self.config.world_up
    }

    /// `true` when the camera's up vector points against the configured
    /// world up, so hosts should reverse horizontal-drag rotation.
    pub fn is_upside_down(&self) -> bool {
        (self.orientation.conjugate() * self.config.world_up)
            .dot(self.world_to_local * self.config.world_up)
            < 0.0
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer contents: the combined view-projection matrix.
pub struct CameraUniform {
    /// Column-major view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Identity view-projection uniform.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Refresh from the camera, rebuilding its cached matrix if needed.
    pub fn update_view_proj(&mut self, camera: &mut Camera) {
        self.view_proj = camera.to_matrix().to_cols_array_2d();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    const EPS: f32 = 1e-4;

    /// The original viewer's conventions: z-up world, camera starting at
    /// (900, 200, 100).
    fn viewer_config() -> CameraConfig {
        CameraConfig {
            initial_position: Vec3::new(900.0, 200.0, 100.0),
            world_forward: Vec3::new(-1.0, 0.0, 0.0),
            world_right: Vec3::new(0.0, 1.0, 0.0),
            world_up: Vec3::new(0.0, 0.0, 1.0),
            ..CameraConfig::default()
        }
    }

    fn camera() -> Camera {
        Camera::new(viewer_config()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CameraConfig {
            world_up: Vec3::new(0.0, 0.5, 0.0),
            ..CameraConfig::default()
        };
        assert!(Camera::new(config).is_err());
    }

    #[test]
    fn reset_restores_configured_pose() {
        let mut cam = camera();
        cam.translate(Vec3::new(-250.0, 40.0, 7.0));
        cam.rotate_axis_angle(33.0, Vec3::new(0.0, 0.0, 1.0));
        cam.reset();
        let _ = cam.to_matrix();

        assert_eq!(cam.position(), Vec3::new(900.0, 200.0, 100.0));
        assert_eq!(cam.target(), Vec3::ZERO);
        assert!(
            (cam.distance() - cam.config().initial_position.length()).abs()
                < EPS
        );
    }

    #[test]
    fn rest_orientation_matches_world_axes() {
        let cam = camera();
        assert!(cam
            .forward_vector()
            .abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
        assert!(cam
            .right_vector()
            .abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPS));
        assert!(cam.up_vector().abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), EPS));
        assert!(!cam.is_upside_down());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut cam = camera();
        cam.reset();
        let (p1, t1, o1) = (cam.position(), cam.target(), cam.orientation());
        cam.reset();
        assert_eq!(cam.position(), p1);
        assert_eq!(cam.target(), t1);
        assert_eq!(cam.orientation(), o1);
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut cam = camera();
        let axes = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.3, -0.8, 0.1),
            Vec3::new(-1.0, 2.0, 5.0),
        ];
        for (i, axis) in axes.iter().cycle().take(60).enumerate() {
            cam.rotate_axis_angle(17.0 + i as f32, *axis);
            assert!((cam.orientation().length() - 1.0).abs() < EPS);
        }
        cam.set_orientation(Quat::from_axis_angle(Vec3::Z, 1.2) * 3.0);
        assert!((cam.orientation().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn target_mode_distance_invariant() {
        let mut cam = camera();
        assert_eq!(cam.interaction_mode(), InteractionMode::Target);

        cam.translate(Vec3::new(10.0, -30.0, 5.0));
        assert!(
            (cam.distance() - (cam.target() - cam.position()).length()).abs()
                < EPS
        );

        cam.rotate_axis_angle(25.0, cam.world_up());
        assert!(
            (cam.distance() - (cam.target() - cam.position()).length()).abs()
                < EPS
        );

        cam.set_position(Vec3::new(0.0, 300.0, 80.0));
        assert!(
            (cam.distance() - (cam.target() - cam.position()).length()).abs()
                < EPS
        );
    }

    #[test]
    fn rotation_around_target_preserves_distance() {
        let mut cam = camera();
        let before = (cam.target() - cam.position()).length();
        let forward_before = cam.forward_vector();

        cam.rotate_axis_angle(90.0, cam.world_up());

        let after = (cam.target() - cam.position()).length();
        assert!((before - after).abs() < 1e-3);

        let expected = Quat::from_axis_angle(
            cam.world_up(),
            90.0_f32.to_radians(),
        ) * forward_before;
        assert!(cam.forward_vector().abs_diff_eq(expected, 1e-3));
    }

    #[test]
    fn free_mode_rotation_keeps_position() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        let position = cam.position();
        cam.rotate_axis_angle(45.0, cam.up_vector());
        assert_eq!(cam.position(), position);
    }

    #[test]
    fn set_orientation_in_target_mode_rederives_position() {
        let mut cam = camera();
        let distance = cam.distance();
        let q = Quat::from_axis_angle(
            Vec3::new(0.0, 0.0, 1.0),
            60.0_f32.to_radians(),
        );
        cam.set_orientation(q);

        assert!((cam.distance() - distance).abs() < EPS);
        let expected = cam.target() - cam.forward_vector() * distance;
        assert!(cam.position().abs_diff_eq(expected, 1e-2));
    }

    #[test]
    fn set_target_aims_the_camera() {
        let mut cam = camera();
        let target = Vec3::new(100.0, -50.0, 30.0);
        cam.set_target(target);

        let look = (target - cam.position()).normalize();
        assert!(cam.forward_vector().abs_diff_eq(look, 1e-3));
        assert!(
            (cam.distance() - (target - cam.position()).length()).abs() < EPS
        );
    }

    #[test]
    fn degenerate_target_keeps_orientation() {
        let mut cam = camera();
        let orientation = cam.orientation();
        cam.set_target(cam.position());

        assert_eq!(cam.orientation(), orientation);
        assert_eq!(cam.distance(), 0.0);
        assert!(cam.orientation().is_finite());
    }

    #[test]
    fn matrix_cache_rebuilds_once() {
        let mut cam = camera();
        cam.translate(Vec3::new(1.0, 2.0, 3.0));
        assert!(cam.dirty);

        let first = *cam.to_matrix();
        assert!(!cam.dirty);

        let second = *cam.to_matrix();
        assert_eq!(first.to_cols_array(), second.to_cols_array());

        cam.rotate_axis_angle(5.0, Vec3::new(0.0, 0.0, 1.0));
        assert!(cam.dirty);
    }

    #[test]
    fn projection_continuity_at_target_distance() {
        let mut cam = camera();
        cam.set_aspect_ratio(1.6);
        let d = cam.distance();

        let persp = *cam.projection_matrix();
        cam.set_projection_mode(ProjectionMode::Orthographic);
        let ortho = *cam.projection_matrix();

        // Frustum cross-section half-extents at the target distance.
        let persp_half_h = d / persp.y_axis.y;
        let ortho_half_h = 1.0 / ortho.y_axis.y;
        assert!((persp_half_h - ortho_half_h).abs() / persp_half_h < 1e-3);

        let persp_half_w = d / persp.x_axis.x;
        let ortho_half_w = 1.0 / ortho.x_axis.x;
        assert!((persp_half_w - ortho_half_w).abs() / persp_half_w < 1e-3);
    }

    #[test]
    fn upside_down_flips_past_vertical() {
        let mut cam = camera();
        assert!(!cam.is_upside_down());

        cam.rotate_axis_angle(120.0, cam.right_vector());
        assert!(cam.is_upside_down());

        cam.rotate_axis_angle(-120.0, cam.right_vector());
        assert!(!cam.is_upside_down());
    }

    #[test]
    fn entering_target_mode_places_target_ahead() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        cam.set_position(Vec3::new(200.0, 0.0, 0.0));
        let forward = cam.forward_vector();

        cam.set_interaction_mode(InteractionMode::Target);

        let reach = cam.config().initial_position.length()
            + 200.0_f32.ln();
        let expected = Vec3::new(200.0, 0.0, 0.0) + forward * reach;
        assert!(cam.target().abs_diff_eq(expected, 1e-2));
    }

    #[test]
    fn entering_target_mode_at_origin_stays_finite() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        cam.set_position(Vec3::ZERO);
        cam.set_interaction_mode(InteractionMode::Target);
        assert!(cam.target().is_finite());
    }

    #[test]
    fn orbit_around_uses_explicit_target() {
        let mut cam = camera();
        cam.set_interaction_mode(InteractionMode::Free);
        cam.orbit_around(Vec3::new(10.0, 20.0, 30.0));

        assert_eq!(cam.interaction_mode(), InteractionMode::Target);
        assert_eq!(cam.target(), Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn invalid_aspect_ratio_is_rejected() {
        let mut cam = camera();
        cam.set_aspect_ratio(1.5);
        cam.set_aspect_ratio(-1.0);
        assert_eq!(cam.aspect_ratio(), 1.5);
        cam.set_aspect_ratio(0.0);
        assert_eq!(cam.aspect_ratio(), 1.5);
        cam.set_aspect_ratio(f32::NAN);
        assert_eq!(cam.aspect_ratio(), 1.5);
    }

    #[test]
    fn observers_receive_events_in_order() {
        let mut cam = camera();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        cam.subscribe(move |event| sink.borrow_mut().push(*event));

        cam.set_target(Vec3::new(1.0, 2.0, 3.0));
        cam.set_projection_mode(ProjectionMode::Orthographic);
        cam.set_interaction_mode(InteractionMode::Free);

        let events = events.borrow();
        assert_eq!(
            events[0],
            CameraEvent::TargetChanged(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            events[1],
            CameraEvent::ProjectionModeChanged(ProjectionMode::Orthographic)
        );
        assert_eq!(
            events[2],
            CameraEvent::InteractionModeChanged(InteractionMode::Free)
        );
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn camera_uniform_mirrors_matrix() {
        let mut cam = camera();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&mut cam);
        assert_eq!(uniform.view_proj, cam.to_matrix().to_cols_array_2d());
    }
}

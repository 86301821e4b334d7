use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use super::mode::{CameraMode, ProjectionKind};
use super::uniform::CameraUniform;
use crate::options::{CameraOptions, ControlBindings, Options};

/// World-space up axis used for yaw and for orbit/look-at reconstruction.
pub const WORLD_UP: Vec3 = Vec3::Y;
/// View direction assumed when a caller passes a zero vector.
pub const DEFAULT_DIRECTION: Vec3 = Vec3::NEG_Z;
/// Pitch bound in degrees, short of the pole.
pub const PITCH_LIMIT: f32 = 89.0;
/// Smallest near plane distance accepted by [`Camera::set_near`].
pub const MIN_NEAR: f32 = 1e-4;

/// Camera position and orientation. Zero vectors mean "unset".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// View direction; normalized on construction.
    pub direction: Vec3,
    /// Up hint; re-orthogonalized against `direction`.
    pub up: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: DEFAULT_DIRECTION,
            up: WORLD_UP,
        }
    }
}

/// Projection parameters supplied at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Perspective or orthographic.
    pub kind: ProjectionKind,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Orthographic half-height.
    pub zoom: f32,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            zoom: 1.0,
            width: 800,
            height: 600,
        }
    }
}

/// A camera with cached view and projection matrices.
///
/// Every mutator ends by calling [`Camera::update`], so the basis vectors
/// are orthonormal and the matrices match the latest state whenever they
/// are read. Orientation in the Euler-driven modes is incremental: the
/// yaw/pitch/roll accumulators record where the camera should point, and
/// `update` rotates the current basis by whatever has not been applied yet.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(super) position: Vec3,
    pub(super) direction: Vec3,
    pub(super) up: Vec3,
    pub(super) right: Vec3,

    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) roll: f32,
    applied_yaw: f32,
    applied_pitch: f32,
    applied_roll: f32,
    pub(super) constrain_pitch: bool,

    pub(super) mode: CameraMode,
    pub(super) target: Vec3,
    pub(super) orbit_radius: f32,

    pub(super) projection: ProjectionKind,
    pub(super) fov: f32,
    pub(super) near: f32,
    pub(super) far: f32,
    pub(super) zoom: f32,
    width: u32,
    height: u32,

    pub(super) options: CameraOptions,
    pub(super) controls: ControlBindings,

    view: Mat4,
    proj: Mat4,
    pub(super) dirty: bool,
    degenerate: bool,
}

impl Camera {
    /// Create a camera with default tuning and key bindings.
    #[must_use]
    pub fn new(pose: Pose, mode: CameraMode, projection: ProjectionConfig) -> Self {
        let direction = if pose.direction == Vec3::ZERO {
            DEFAULT_DIRECTION
        } else {
            pose.direction.normalize_or_zero()
        };
        let up = if pose.up == Vec3::ZERO {
            WORLD_UP
        } else {
            pose.up.normalize_or_zero()
        };
        let options = CameraOptions::default();

        let mut camera = Self {
            position: pose.position,
            direction,
            up,
            right: Vec3::X,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            applied_yaw: 0.0,
            applied_pitch: 0.0,
            applied_roll: 0.0,
            constrain_pitch: options.constrain_pitch,
            mode,
            target: Vec3::ZERO,
            orbit_radius: 5.0,
            projection: projection.kind,
            fov: projection.fov,
            near: projection.near,
            far: projection.far,
            zoom: projection.zoom,
            width: projection.width,
            height: projection.height,
            options,
            controls: ControlBindings::default(),
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            dirty: true,
            degenerate: false,
        };
        camera.sync_angles_from_direction();
        camera.update();
        camera
    }

    /// Create a camera from a loaded options preset.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let initial = &options.initial;
        let mut camera = Self::new(
            initial.pose(),
            initial.mode,
            initial.projection_config(),
        );
        camera.options = options.camera.clone();
        camera.controls = options.controls;
        camera.constrain_pitch = options.camera.constrain_pitch;
        camera.target = Vec3::from_array(initial.target);
        camera.orbit_radius = camera.clamp_radius(initial.orbit_radius);
        camera.dirty = true;
        camera.update();
        camera
    }

    // ── Derivation ──

    /// Recompute the basis, the derived position and both matrices.
    ///
    /// A no-op when nothing changed since the last call, so repeated calls
    /// yield bit-identical matrices.
    pub fn update(&mut self) {
        if !self.dirty {
            return;
        }

        if self.mode.uses_euler_look() {
            self.apply_euler_delta();
        } else if self.mode == CameraMode::Orbit {
            self.apply_orbit_angles();
        }

        self.orthonormalize();

        if self.mode.follows_target() && !self.degenerate {
            self.position = self.target - self.direction * self.orbit_radius;
        }

        self.view = if self.degenerate {
            Mat4::from_translation(-self.position)
        } else {
            Mat4::look_to_rh(self.position, self.direction, self.up)
        };
        self.proj = self.build_projection();
        self.dirty = false;
    }

    /// Rotate direction and up by the not-yet-applied part of the Euler
    /// accumulators: yaw about world up, pitch about right, roll about the
    /// view direction.
    fn apply_euler_delta(&mut self) {
        if self.constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        let d_yaw = self.yaw - self.applied_yaw;
        let d_pitch = self.pitch - self.applied_pitch;
        let d_roll = self.roll - self.applied_roll;
        self.applied_yaw = self.yaw;
        self.applied_pitch = self.pitch;
        self.applied_roll = self.roll;

        if d_yaw != 0.0 {
            let q = Quat::from_axis_angle(WORLD_UP, -d_yaw.to_radians());
            self.direction = q * self.direction;
            self.up = q * self.up;
        }
        if d_pitch != 0.0 {
            let right = self.direction.cross(self.up).normalize_or_zero();
            if right == Vec3::ZERO {
                // On the pole the pitch axis is undefined; rebuild from the
                // accumulators instead.
                self.direction = spherical_direction(self.yaw, self.pitch);
            } else {
                let q = Quat::from_axis_angle(right, d_pitch.to_radians());
                self.direction = q * self.direction;
                self.up = q * self.up;
            }
        }
        if d_roll != 0.0 {
            let axis = self.direction.normalize_or_zero();
            if axis != Vec3::ZERO {
                let q = Quat::from_axis_angle(axis, d_roll.to_radians());
                self.up = q * self.up;
            }
        }
    }

    /// Point the camera along the spherical direction given by yaw/pitch,
    /// facing the target from the orbit sphere.
    fn apply_orbit_angles(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.applied_yaw = self.yaw;
        self.applied_pitch = self.pitch;
        self.applied_roll = self.roll;
        self.direction = spherical_direction(self.yaw, self.pitch);
        self.up = WORLD_UP;
    }

    /// Restore `|direction| = |up| = |right| = 1` and `up ⟂ direction`.
    fn orthonormalize(&mut self) {
        let direction = self.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            if !self.degenerate {
                log::warn!(
                    "camera direction is zero at {:?}; view matrix is degenerate",
                    self.position
                );
            }
            self.degenerate = true;
            return;
        }
        self.degenerate = false;
        self.direction = direction;

        let mut right = direction.cross(self.up).normalize_or_zero();
        if right == Vec3::ZERO {
            log::warn!("camera up is parallel to direction {direction:?}; re-deriving basis");
            let fallback = if direction.cross(WORLD_UP).length_squared() > 1e-6 {
                WORLD_UP
            } else {
                direction.any_orthonormal_vector()
            };
            right = direction.cross(fallback).normalize();
        }
        self.right = right;
        self.up = right.cross(direction).normalize();
    }

    fn build_projection(&self) -> Mat4 {
        // perspective_rh/orthographic_rh use the [0,1] depth range
        // (wgpu/Vulkan convention)
        let aspect = self.aspect();
        match self.projection {
            ProjectionKind::Perspective => {
                Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
            }
            ProjectionKind::Orthographic => Mat4::orthographic_rh(
                -self.zoom * aspect,
                self.zoom * aspect,
                -self.zoom,
                self.zoom,
                self.near,
                self.far,
            ),
        }
    }

    /// Re-seed the Euler accumulators so they describe the current
    /// direction; nothing is left pending.
    fn sync_angles_from_direction(&mut self) {
        let d = self.direction;
        if d == Vec3::ZERO {
            return;
        }
        self.pitch = d.y.clamp(-1.0, 1.0).asin().to_degrees();
        self.yaw = d.x.atan2(-d.z).to_degrees();
        self.applied_yaw = self.yaw;
        self.applied_pitch = self.pitch;
        self.applied_roll = self.roll;
    }

    pub(super) fn clamp_radius(&self, radius: f32) -> f32 {
        radius
            .max(self.options.orbit_radius_min)
            .min(self.options.orbit_radius_max)
    }

    // ── Setters ──

    /// Move the eye. In Orbit and ThirdPerson the position is derived from
    /// the target, so the next update overrides it.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.dirty = true;
        self.update();
    }

    /// Point the camera along `direction` (normalized) and re-seed yaw/pitch.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize_or_zero();
        self.sync_angles_from_direction();
        self.dirty = true;
        self.update();
    }

    /// Replace the up hint (normalized, then re-orthogonalized).
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up.normalize_or_zero();
        self.dirty = true;
        self.update();
    }

    /// Set the pivot used by Orbit and ThirdPerson.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.dirty = true;
        self.update();
    }

    /// Set the orthographic half-height, floored at the configured minimum.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(self.options.zoom_min);
        self.dirty = true;
        self.update();
    }

    /// Set the vertical field of view in degrees, within the configured
    /// bounds.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.max(self.options.fov_min).min(self.options.fov_max);
        self.dirty = true;
        self.update();
    }

    /// Set the near clipping plane distance, floored at [`MIN_NEAR`].
    pub fn set_near(&mut self, near: f32) {
        if near < MIN_NEAR {
            log::warn!("near plane {near} is below {MIN_NEAR}; clamping");
        }
        self.near = near.max(MIN_NEAR);
        self.warn_if_depth_collapsed();
        self.dirty = true;
        self.update();
    }

    /// Set the far clipping plane distance.
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
        self.warn_if_depth_collapsed();
        self.dirty = true;
        self.update();
    }

    fn warn_if_depth_collapsed(&self) {
        if self.far <= self.near {
            log::warn!(
                "far plane {} is not beyond near plane {}; projection is degenerate",
                self.far,
                self.near
            );
        }
    }

    /// Set the viewport width in pixels.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
        self.dirty = true;
        self.update();
    }

    /// Set the viewport height in pixels.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
        self.dirty = true;
        self.update();
    }

    /// Set both viewport dimensions at once.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.dirty = true;
        self.update();
    }

    /// Set the orbit radius, clamped to the configured bounds.
    pub fn set_orbit_radius(&mut self, radius: f32) {
        self.orbit_radius = self.clamp_radius(radius);
        self.dirty = true;
        self.update();
    }

    /// Switch interaction mode. Yaw, pitch and target carry over unchanged.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            log::debug!("camera mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.dirty = true;
        self.update();
    }

    /// Switch between perspective and orthographic projection.
    pub fn set_projection(&mut self, kind: ProjectionKind) {
        if kind != self.projection {
            log::debug!("camera projection {} -> {}", self.projection, kind);
        }
        self.projection = kind;
        self.dirty = true;
        self.update();
    }

    /// Enable or disable the ±89° pitch clamp applied during update.
    pub fn set_constrain_pitch(&mut self, constrain: bool) {
        self.constrain_pitch = constrain;
        self.dirty = true;
        self.update();
    }

    /// Replace the tuning block. The orbit radius is re-clamped.
    pub fn set_options(&mut self, options: CameraOptions) {
        self.options = options;
        self.orbit_radius = self.clamp_radius(self.orbit_radius);
        self.dirty = true;
        self.update();
    }

    /// Replace the key bindings used by
    /// [`process_input`](Camera::process_input).
    pub fn set_controls(&mut self, controls: ControlBindings) {
        self.controls = controls;
    }

    // ── Direct pose manipulation ──

    /// Translate along the view direction by `distance` times the damping
    /// factor. In Orbit and ThirdPerson this moves the target instead.
    pub fn move_forward(&mut self, distance: f32) {
        let step = self.direction * self.damped(distance);
        self.translate(step);
    }

    /// Inverse of [`Camera::move_forward`].
    pub fn move_backward(&mut self, distance: f32) {
        self.move_forward(-distance);
    }

    /// Translate along the right vector.
    pub fn move_right(&mut self, distance: f32) {
        let step = self.right * self.damped(distance);
        self.translate(step);
    }

    /// Inverse of [`Camera::move_right`].
    pub fn move_left(&mut self, distance: f32) {
        self.move_right(-distance);
    }

    /// Translate along the up vector.
    pub fn move_up(&mut self, distance: f32) {
        let step = self.up * self.damped(distance);
        self.translate(step);
    }

    /// Inverse of [`Camera::move_up`].
    pub fn move_down(&mut self, distance: f32) {
        self.move_up(-distance);
    }

    fn damped(&self, distance: f32) -> f32 {
        distance * self.options.movement_damping.clamp(0.0, 1.0)
    }

    fn translate(&mut self, offset: Vec3) {
        self.translate_rig(offset);
        self.update();
    }

    /// Move whichever point drives the pose: the target in follow modes,
    /// the eye otherwise.
    pub(super) fn translate_rig(&mut self, offset: Vec3) {
        if offset == Vec3::ZERO {
            return;
        }
        if self.mode.follows_target() {
            self.target += offset;
        } else {
            self.position += offset;
        }
        self.dirty = true;
    }

    /// Rotate the basis by world-space Euler angles in degrees, bypassing
    /// the yaw/pitch/roll accumulators.
    ///
    /// Positive yaw turns right, positive pitch looks up, positive roll
    /// tilts clockwise. Orbit re-derives orientation from its angles, so
    /// this has no lasting effect there.
    pub fn rotate(&mut self, pitch: f32, yaw: f32, roll: f32) {
        let rotation = Mat3::from_euler(
            EulerRot::YXZ,
            -yaw.to_radians(),
            pitch.to_radians(),
            -roll.to_radians(),
        );
        self.direction = rotation * self.direction;
        self.right = rotation * self.right;
        self.up = self.right.cross(self.direction).normalize_or_zero();
        self.dirty = true;
        self.update();
    }

    /// Face `target` without moving. Yaw and pitch are re-seeded from the
    /// new direction.
    pub fn look_at(&mut self, target: Vec3) {
        self.direction = (target - self.position).normalize_or_zero();
        let right = self.direction.cross(WORLD_UP).normalize_or_zero();
        self.up = right.cross(self.direction).normalize_or_zero();
        self.roll = 0.0;
        self.sync_angles_from_direction();
        self.dirty = true;
        self.update();
    }

    // ── Accessors ──

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// View-to-clip matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.proj * self.view
    }

    /// GPU-ready snapshot of the matrices and eye data.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::from_camera(self)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit up vector, orthogonal to the direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector, `direction × up`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Pivot for Orbit and ThirdPerson.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Accumulated yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Accumulated roll in degrees.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Current projection kind.
    #[must_use]
    pub fn projection(&self) -> ProjectionKind {
        self.projection
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Orthographic half-height.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Viewport aspect ratio (width / height). Zero dimensions count as 1.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    /// Distance kept between eye and target in follow modes.
    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Whether the pitch clamp is applied during update.
    #[must_use]
    pub fn constrain_pitch(&self) -> bool {
        self.constrain_pitch
    }

    /// Current tuning block.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Current key bindings.
    #[must_use]
    pub fn controls(&self) -> &ControlBindings {
        &self.controls
    }

    /// Whether the last update found a zero view direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Unit direction for yaw/pitch in degrees; `(0, 0)` looks down -Z and
/// positive yaw turns toward +X.
fn spherical_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.to_radians().sin_cos();
    let (sp, cp) = pitch.to_radians().sin_cos();
    Vec3::new(cp * sy, sp, -cp * cy)
}

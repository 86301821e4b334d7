//! Input-driven camera control: per-frame dispatch over the interaction
//! modes plus the mouse-look and scroll handlers shared by all of them.

use glam::Vec3;

use super::core::{Camera, PITCH_LIMIT};
use super::mode::{CameraMode, ProjectionKind};
use crate::input::{InputSource, Key};

/// `1.0` / `-1.0` / `0.0` for a pair of opposing keys.
const fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

fn key_axis<I: InputSource + ?Sized>(input: &I, positive: Key, negative: Key) -> f32 {
    axis(input.is_key_held(positive), input.is_key_held(negative))
}

/// Project onto the ground plane; zero when `v` is vertical.
fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

impl Camera {
    /// Per-frame entry point.
    ///
    /// Reads one snapshot of `input`, handles the mode-cycle key, runs the
    /// handler for the current mode, applies mouse-look and scroll, clamps
    /// pitch to ±89° and updates once. `Fixed` ignores everything except
    /// the mode-cycle key.
    pub fn process_input<I: InputSource + ?Sized>(&mut self, input: &I, dt: f32) {
        if input.is_key_pressed(self.controls.cycle_mode) {
            let next = self.mode.next();
            log::debug!("camera mode {} -> {} (cycle key)", self.mode, next);
            self.mode = next;
            self.dirty = true;
        }

        log::trace!(
            "{} input: delta={:?} scroll={:?} dt={dt}",
            self.mode,
            input.mouse_delta(),
            input.mouse_scroll()
        );

        match self.mode {
            CameraMode::Free => self.fly(input, dt),
            CameraMode::FirstPerson => self.walk(input, dt),
            CameraMode::ThirdPerson => {
                if self.options.third_person_follow {
                    self.walk(input, dt);
                }
            }
            CameraMode::Orbit => {}
            CameraMode::Fixed => {
                self.update();
                return;
            }
        }

        if self.look_enabled(input) {
            let delta = input.mouse_delta();
            if delta != glam::Vec2::ZERO {
                let gain = if self.mode == CameraMode::Orbit {
                    self.options.orbit_sensitivity
                } else {
                    1.0
                };
                self.accumulate_look(delta.x * gain, delta.y * gain);
            }
        }

        let scroll = input.mouse_scroll().y;
        if scroll != 0.0 {
            if self.mode == CameraMode::Orbit {
                self.orbit_radius =
                    self.clamp_radius(self.orbit_radius - scroll * self.options.orbit_zoom_speed);
            } else {
                self.scroll_zoom(scroll);
            }
            self.dirty = true;
        }

        let clamped = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        if clamped != self.pitch {
            self.pitch = clamped;
            self.dirty = true;
        }
        self.update();
    }

    /// Six-degree-of-freedom movement along the full basis, plus roll.
    fn fly<I: InputSource + ?Sized>(&mut self, input: &I, dt: f32) {
        let c = self.controls;
        let step = self.options.movement_speed * dt * self.options.movement_damping.clamp(0.0, 1.0);

        let forward = key_axis(input, c.forward, c.backward);
        let strafe = key_axis(input, c.right, c.left);
        let vertical = key_axis(input, c.up, c.down);
        let offset =
            (self.direction * forward + self.right * strafe + self.up * vertical) * step;
        self.translate_rig(offset);

        let roll = key_axis(input, c.roll_right, c.roll_left);
        if roll != 0.0 {
            self.roll += roll * self.options.roll_speed * dt;
            self.dirty = true;
        }
    }

    /// Ground-plane movement: forward and strafe only, no vertical drift
    /// from looking up or down.
    fn walk<I: InputSource + ?Sized>(&mut self, input: &I, dt: f32) {
        let c = self.controls;
        let step = self.options.movement_speed * dt * self.options.movement_damping.clamp(0.0, 1.0);

        let forward = key_axis(input, c.forward, c.backward);
        let strafe = key_axis(input, c.right, c.left);
        let offset = (flatten(self.direction) * forward + flatten(self.right) * strafe) * step;
        self.translate_rig(offset);
    }

    fn look_enabled<I: InputSource + ?Sized>(&self, input: &I) -> bool {
        match self.mode {
            CameraMode::Orbit => {
                !self.options.orbit_requires_drag
                    || input.is_mouse_button_held(self.options.orbit_drag_button)
            }
            CameraMode::Fixed => false,
            CameraMode::Free | CameraMode::FirstPerson | CameraMode::ThirdPerson => true,
        }
    }

    /// Horizontal motion feeds yaw; vertical motion feeds pitch, inverted so
    /// moving the mouse up looks up.
    fn accumulate_look(&mut self, dx: f32, dy: f32) {
        let sensitivity = self.options.mouse_sensitivity;
        self.yaw += dx * sensitivity;
        self.pitch -= dy * sensitivity;
        self.dirty = true;
    }

    fn scroll_zoom(&mut self, dy: f32) {
        match self.projection {
            ProjectionKind::Perspective => {
                self.fov = (self.fov - dy * self.options.fov_scroll_speed)
                    .max(self.options.fov_min)
                    .min(self.options.fov_max);
            }
            ProjectionKind::Orthographic => {
                self.zoom =
                    (self.zoom - dy * self.options.zoom_scroll_speed).max(self.options.zoom_min);
            }
        }
        self.dirty = true;
    }

    /// Apply a mouse delta in pixels to yaw/pitch.
    ///
    /// With `constrain_pitch` set, pitch is clamped to ±89° now and on every
    /// later update; without it, no clamp is applied.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.accumulate_look(dx, dy);
        self.constrain_pitch = constrain_pitch;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update();
    }

    /// Scroll-wheel zoom: narrows the field of view in perspective, shrinks
    /// the half-height in orthographic.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.scroll_zoom(dy);
        self.update();
    }

    /// Change the orbit radius by `delta`, clamped to the configured bounds.
    pub fn adjust_orbit_radius(&mut self, delta: f32) {
        self.orbit_radius = self.clamp_radius(self.orbit_radius + delta);
        self.dirty = true;
        self.update();
    }

    /// Scroll-wheel dolly for the orbit rig: scrolling forward moves closer.
    pub fn process_orbit_scroll(&mut self, dy: f32) {
        self.adjust_orbit_radius(-dy * self.options.orbit_zoom_speed);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::core::{Pose, ProjectionConfig};
    use crate::input::{InputEvent, InputState, MouseButton};
    use crate::options::CameraOptions;

    const EPS: f32 = 1e-4;

    fn camera(mode: CameraMode) -> Camera {
        Camera::new(
            Pose {
                position: Vec3::new(0.0, 0.0, 3.0),
                ..Pose::default()
            },
            mode,
            ProjectionConfig::default(),
        )
    }

    fn hold(input: &mut InputState, key: Key) {
        input.handle_event(InputEvent::Key { key, pressed: true });
    }

    fn mouse_move(input: &mut InputState, dx: f32, dy: f32) {
        input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        input.handle_event(InputEvent::CursorMoved {
            x: 100.0 + dx,
            y: 100.0 + dy,
        });
    }

    #[test]
    fn pitch_clamp_applies_when_constrained() {
        let mut cam = camera(CameraMode::Free);
        cam.process_mouse_movement(0.0, -5000.0, true);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
        assert!((cam.direction().y + PITCH_LIMIT.to_radians().sin()).abs() < 1e-5);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut cam = camera(CameraMode::Free);
        cam.process_mouse_movement(0.0, -2000.0, false);
        assert!((cam.pitch() - 200.0).abs() < EPS);
        assert!(!cam.constrain_pitch());

        let d = cam.direction();
        assert!((d.length() - 1.0).abs() < 1e-5);
        assert!(d.dot(cam.up()).abs() < 1e-5);
    }

    #[test]
    fn mouse_right_turns_right() {
        let mut cam = camera(CameraMode::Free);
        // 900 px * 0.1 deg/px = 90 degrees
        cam.process_mouse_movement(900.0, 0.0, true);
        assert!((cam.yaw() - 90.0).abs() < EPS);
        assert!(cam.direction().abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn fov_scroll_is_clamped() {
        let mut cam = camera(CameraMode::Free);
        cam.process_mouse_scroll(10.0);
        assert!((cam.fov() - 35.0).abs() < EPS);
        cam.process_mouse_scroll(500.0);
        assert_eq!(cam.fov(), 1.0);
        cam.process_mouse_scroll(-500.0);
        assert_eq!(cam.fov(), 90.0);
    }

    #[test]
    fn ortho_scroll_has_a_floor() {
        let mut cam = camera(CameraMode::Free);
        cam.set_projection(ProjectionKind::Orthographic);
        cam.process_mouse_scroll(4.0);
        assert!((cam.zoom() - 0.8).abs() < EPS);
        cam.process_mouse_scroll(1000.0);
        assert_eq!(cam.zoom(), 0.1);
    }

    #[test]
    fn orbit_radius_scroll_clamps_to_minimum() {
        let mut cam = camera(CameraMode::Orbit);
        cam.set_options(CameraOptions {
            orbit_radius_min: 1.0,
            orbit_radius_max: 20.0,
            ..CameraOptions::default()
        });
        cam.set_orbit_radius(5.0);
        cam.adjust_orbit_radius(-100.0);
        assert_eq!(cam.orbit_radius(), 1.0);
        assert!(((cam.position() - cam.target()).length() - 1.0).abs() < EPS);

        cam.process_orbit_scroll(-1000.0);
        assert_eq!(cam.orbit_radius(), 20.0);
    }

    #[test]
    fn orbit_rotation_keeps_distance() {
        let mut cam = camera(CameraMode::Orbit);
        cam.set_target(Vec3::new(2.0, 1.0, -1.0));
        cam.set_orbit_radius(6.0);
        for i in 0..20 {
            let f = i as f32;
            cam.process_mouse_movement(13.0 * f, -7.0 * f, true);
            let dist = (cam.position() - cam.target()).length();
            assert!((dist - 6.0).abs() < EPS, "distance drifted to {dist}");
            assert!(cam.pitch().abs() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn free_mode_flies_with_keys() {
        let mut cam = camera(CameraMode::Free);
        let mut input = InputState::new();
        hold(&mut input, Key::KeyW);
        hold(&mut input, Key::Space);

        // 2.5 units/s for 0.4 s
        cam.process_input(&input, 0.4);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 1.0, 2.0), EPS));
    }

    #[test]
    fn first_person_ignores_vertical_and_pitch() {
        let mut cam = camera(CameraMode::FirstPerson);
        cam.process_mouse_movement(0.0, -300.0, true);
        assert!(cam.direction().y > 0.4);

        let mut input = InputState::new();
        hold(&mut input, Key::KeyW);
        hold(&mut input, Key::Space);
        cam.process_input(&input, 1.0);

        assert!((cam.position().y).abs() < EPS);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));
    }

    #[test]
    fn free_mode_roll_keys_tilt_up_vector() {
        let mut cam = camera(CameraMode::Free);
        let mut input = InputState::new();
        hold(&mut input, Key::KeyE);
        // 60 deg/s for 0.5 s
        cam.process_input(&input, 0.5);
        assert!((cam.roll() - 30.0).abs() < EPS);
        assert!(cam.up().x > 0.49);
        assert!(cam.direction().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn mouse_look_and_pitch_clamp_in_process_input() {
        let mut cam = camera(CameraMode::Free);
        cam.set_constrain_pitch(false);
        let mut input = InputState::new();
        mouse_move(&mut input, 0.0, -5000.0);
        cam.process_input(&input, 0.016);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn orbit_look_requires_drag_button_by_default() {
        let mut cam = camera(CameraMode::Orbit);
        let mut input = InputState::new();
        mouse_move(&mut input, 50.0, 0.0);
        cam.process_input(&input, 0.016);
        assert_eq!(cam.yaw(), 0.0);

        input.end_frame();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        input.handle_event(InputEvent::CursorMoved { x: 200.0, y: 100.0 });
        cam.process_input(&input, 0.016);
        assert!((cam.yaw() - 5.0).abs() < EPS);
    }

    #[test]
    fn orbit_look_without_drag_when_configured() {
        let mut cam = camera(CameraMode::Orbit);
        cam.set_options(CameraOptions {
            orbit_requires_drag: false,
            orbit_sensitivity: 2.0,
            ..CameraOptions::default()
        });
        let mut input = InputState::new();
        mouse_move(&mut input, 50.0, 0.0);
        cam.process_input(&input, 0.016);
        assert!((cam.yaw() - 10.0).abs() < EPS);
    }

    #[test]
    fn orbit_scroll_changes_radius_not_fov() {
        let mut cam = camera(CameraMode::Orbit);
        let mut input = InputState::new();
        input.handle_event(InputEvent::Scroll { dx: 0.0, dy: 2.0 });
        cam.process_input(&input, 0.016);
        assert!((cam.orbit_radius() - 4.0).abs() < EPS);
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn third_person_keys_move_target_only_when_following() {
        let mut cam = camera(CameraMode::ThirdPerson);
        let mut input = InputState::new();
        hold(&mut input, Key::KeyW);
        cam.process_input(&input, 1.0);
        assert_eq!(cam.target(), Vec3::ZERO);

        cam.set_options(CameraOptions {
            third_person_follow: true,
            ..CameraOptions::default()
        });
        cam.process_input(&input, 1.0);
        assert!(cam.target().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));
        assert!(((cam.position() - cam.target()).length() - cam.orbit_radius()).abs() < EPS);
    }

    #[test]
    fn fixed_mode_ignores_input() {
        let mut cam = camera(CameraMode::Fixed);
        let before = cam.view_matrix();
        let mut input = InputState::new();
        hold(&mut input, Key::KeyW);
        mouse_move(&mut input, 40.0, 40.0);
        input.handle_event(InputEvent::Scroll { dx: 0.0, dy: 3.0 });
        cam.process_input(&input, 1.0);
        assert_eq!(cam.view_matrix(), before);
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn cycle_key_steps_through_modes() {
        let mut cam = camera(CameraMode::Orbit);
        let mut input = InputState::new();
        hold(&mut input, Key::Tab);
        cam.process_input(&input, 0.016);
        assert_eq!(cam.mode(), CameraMode::Fixed);

        // Held, not pressed again: no further change.
        input.end_frame();
        cam.process_input(&input, 0.016);
        assert_eq!(cam.mode(), CameraMode::Fixed);

        input.handle_event(InputEvent::Key {
            key: Key::Tab,
            pressed: false,
        });
        input.end_frame();
        hold(&mut input, Key::Tab);
        cam.process_input(&input, 0.016);
        assert_eq!(cam.mode(), CameraMode::Free);
    }

    #[test]
    fn input_snapshot_is_not_consumed() {
        let mut input = InputState::new();
        mouse_move(&mut input, 10.0, 0.0);
        let mut a = camera(CameraMode::Free);
        let mut b = camera(CameraMode::Free);
        a.process_input(&input, 0.016);
        b.process_input(&input, 0.016);
        assert_eq!(a.yaw(), b.yaw());
        assert_eq!(input.mouse_delta(), Vec2::new(10.0, 0.0));
    }
}

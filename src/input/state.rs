//! Explicit input context owned by the application loop.
//!
//! `InputState` folds [`InputEvent`]s into held / just-pressed /
//! just-released flags plus frame-relative mouse motion and scroll. The
//! application feeds events as they arrive, hands the state to the camera
//! once per frame, then calls [`InputState::end_frame`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use glam::Vec2;

use super::event::{InputEvent, Key, MouseButton};
use super::source::InputSource;

/// Two presses of the same button within this window form a double click.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    held: bool,
    just_pressed: bool,
    just_released: bool,
    double_clicked: bool,
    last_press: Option<Instant>,
}

impl ButtonState {
    fn press(&mut self, now: Instant) {
        // Key repeat arrives as another press while already held.
        if self.held {
            return;
        }
        self.held = true;
        self.just_pressed = true;
        self.double_clicked = self
            .last_press
            .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);
        self.last_press = Some(now);
    }

    fn release(&mut self) {
        if self.held {
            self.just_released = true;
        }
        self.held = false;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
        self.double_clicked = false;
    }
}

/// Keyboard and mouse state for a single window.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<Key, ButtonState>,
    buttons: HashMap<MouseButton, ButtonState>,
    cursor: Option<Vec2>,
    mouse_delta: Vec2,
    scroll: Vec2,
    mouse_locked: bool,
}

impl InputState {
    /// Create an empty input state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the current frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.handle_event_at(event, Instant::now());
    }

    /// Fold one event into the current frame using an explicit timestamp
    /// for double-click detection.
    pub fn handle_event_at(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Key { key, pressed } => {
                let state = self.keys.entry(key).or_default();
                if pressed {
                    state.press(now);
                } else {
                    state.release();
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                let state = self.buttons.entry(button).or_default();
                if pressed {
                    state.press(now);
                } else {
                    state.release();
                }
            }
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                // A locked cursor reports motion through MouseMotion.
                if let (Some(last), false) = (self.cursor, self.mouse_locked) {
                    self.mouse_delta += pos - last;
                }
                self.cursor = Some(pos);
            }
            InputEvent::MouseMotion { dx, dy } => {
                if self.mouse_locked {
                    self.mouse_delta += Vec2::new(dx, dy);
                }
            }
            InputEvent::Scroll { dx, dy } => {
                self.scroll += Vec2::new(dx, dy);
            }
        }
    }

    /// Clear per-frame edges, mouse motion and scroll. Held state persists.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.clear_edges();
        }
        for state in self.buttons.values_mut() {
            state.clear_edges();
        }
        self.mouse_delta = Vec2::ZERO;
        self.scroll = Vec2::ZERO;
    }

    /// Last known absolute cursor position.
    #[must_use]
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Whether `key` went up during this frame.
    #[must_use]
    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_released)
    }

    /// Whether `button` went down during this frame.
    #[must_use]
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.just_pressed)
    }

    /// Whether `button` went up during this frame.
    #[must_use]
    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.just_released)
    }

    /// Whether this frame's press of `button` completed a double click.
    #[must_use]
    pub fn is_mouse_button_double_clicked(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.double_clicked)
    }

    /// Translate a winit window event. Returns `true` if it was consumed.
    #[cfg(feature = "viewer")]
    pub fn handle_window_event(
        &mut self,
        event: &winit::event::WindowEvent,
    ) -> bool {
        use winit::event::{MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        let translated = match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Ok(key) = Key::try_from(code) else {
                    return false;
                };
                InputEvent::Key {
                    key,
                    pressed: event.state.is_pressed(),
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                InputEvent::MouseButton {
                    button: (*button).into(),
                    pressed: state.is_pressed(),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x as f32 * 0.01, pos.y as f32 * 0.01)
                    }
                };
                InputEvent::Scroll { dx, dy }
            }
            _ => return false,
        };
        self.handle_event(translated);
        true
    }

    /// Translate a winit device event (raw mouse motion while locked).
    #[cfg(feature = "viewer")]
    pub fn handle_device_event(&mut self, event: &winit::event::DeviceEvent) {
        if let winit::event::DeviceEvent::MouseMotion { delta } = event {
            self.handle_event(InputEvent::MouseMotion {
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            });
        }
    }
}

impl InputSource for InputState {
    fn is_key_held(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(|s| s.held)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_pressed)
    }

    fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).is_some_and(|s| s.held)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    fn mouse_scroll(&self) -> Vec2 {
        self.scroll
    }

    fn lock_mouse(&mut self) {
        if !self.mouse_locked {
            log::debug!("mouse locked");
        }
        self.mouse_locked = true;
    }

    fn unlock_mouse(&mut self) {
        if self.mouse_locked {
            log::debug!("mouse unlocked");
        }
        self.mouse_locked = false;
        // The next CursorMoved must not produce a jump.
        self.cursor = None;
    }

    fn is_mouse_locked(&self) -> bool {
        self.mouse_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, pressed: bool) -> InputEvent {
        InputEvent::Key { key, pressed }
    }

    fn click(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn press_edges_clear_on_end_frame() {
        let mut input = InputState::new();
        input.handle_event(key(Key::KeyW, true));
        assert!(input.is_key_held(Key::KeyW));
        assert!(input.is_key_pressed(Key::KeyW));

        input.end_frame();
        assert!(input.is_key_held(Key::KeyW));
        assert!(!input.is_key_pressed(Key::KeyW));

        input.handle_event(key(Key::KeyW, false));
        assert!(!input.is_key_held(Key::KeyW));
        assert!(input.is_key_released(Key::KeyW));
        input.end_frame();
        assert!(!input.is_key_released(Key::KeyW));
    }

    #[test]
    fn key_repeat_is_not_a_new_press() {
        let mut input = InputState::new();
        input.handle_event(key(Key::Space, true));
        input.end_frame();
        input.handle_event(key(Key::Space, true));
        assert!(input.is_key_held(Key::Space));
        assert!(!input.is_key_pressed(Key::Space));
    }

    #[test]
    fn cursor_motion_accumulates_and_resets() {
        let mut input = InputState::new();
        input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        // First sample only establishes a baseline.
        assert_eq!(input.mouse_delta(), Vec2::ZERO);

        input.handle_event(InputEvent::CursorMoved { x: 15.0, y: 8.0 });
        input.handle_event(InputEvent::CursorMoved { x: 20.0, y: 6.0 });
        assert_eq!(input.mouse_delta(), Vec2::new(10.0, -4.0));

        input.end_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
        assert_eq!(input.cursor_position(), Some(Vec2::new(20.0, 6.0)));
    }

    #[test]
    fn locked_mouse_uses_raw_motion_only() {
        let mut input = InputState::new();
        input.lock_mouse();
        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(InputEvent::CursorMoved { x: 50.0, y: 50.0 });
        input.handle_event(InputEvent::MouseMotion { dx: 3.0, dy: -2.0 });
        assert_eq!(input.mouse_delta(), Vec2::new(3.0, -2.0));

        input.unlock_mouse();
        input.end_frame();
        input.handle_event(InputEvent::MouseMotion { dx: 3.0, dy: -2.0 });
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn scroll_accumulates_within_a_frame() {
        let mut input = InputState::new();
        input.handle_event(InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        input.handle_event(InputEvent::Scroll { dx: 0.5, dy: 2.0 });
        assert_eq!(input.mouse_scroll(), Vec2::new(0.5, 3.0));
        input.end_frame();
        assert_eq!(input.mouse_scroll(), Vec2::ZERO);
    }

    #[test]
    fn double_click_within_threshold() {
        let mut input = InputState::new();
        let t0 = Instant::now();
        input.handle_event_at(click(MouseButton::Left, true), t0);
        assert!(!input.is_mouse_button_double_clicked(MouseButton::Left));
        input.handle_event_at(click(MouseButton::Left, false), t0);
        input.end_frame();

        let t1 = t0 + Duration::from_millis(120);
        input.handle_event_at(click(MouseButton::Left, true), t1);
        assert!(input.is_mouse_button_pressed(MouseButton::Left));
        assert!(input.is_mouse_button_double_clicked(MouseButton::Left));
    }

    #[test]
    fn slow_second_click_is_single() {
        let mut input = InputState::new();
        let t0 = Instant::now();
        input.handle_event_at(click(MouseButton::Right, true), t0);
        input.handle_event_at(click(MouseButton::Right, false), t0);
        input.end_frame();

        let t1 = t0 + Duration::from_millis(800);
        input.handle_event_at(click(MouseButton::Right, true), t1);
        assert!(!input.is_mouse_button_double_clicked(MouseButton::Right));
        assert!(input.is_mouse_button_held(MouseButton::Right));
    }
}

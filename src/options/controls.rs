use serde::{Deserialize, Serialize};

use crate::input::Key;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings for the camera rigs.
///
/// Keys use the winit `KeyCode` names, e.g. `forward = "KeyW"`.
pub struct ControlBindings {
    /// Move along the view direction.
    pub forward: Key,
    /// Move against the view direction.
    pub backward: Key,
    /// Strafe left.
    pub left: Key,
    /// Strafe right.
    pub right: Key,
    /// Rise along the camera up vector (free mode only).
    pub up: Key,
    /// Sink along the camera up vector (free mode only).
    pub down: Key,
    /// Roll counter-clockwise (free mode only).
    pub roll_left: Key,
    /// Roll clockwise (free mode only).
    pub roll_right: Key,
    /// Step to the next camera mode.
    pub cycle_mode: Key,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            forward: Key::KeyW,
            backward: Key::KeyS,
            left: Key::KeyA,
            right: Key::KeyD,
            up: Key::Space,
            down: Key::ShiftLeft,
            roll_left: Key::KeyQ,
            roll_right: Key::KeyE,
            cycle_mode: Key::Tab,
        }
    }
}

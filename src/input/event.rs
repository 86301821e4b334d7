use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState), which folds
/// them into the per-frame snapshot a camera reads through
/// [`InputSource`](super::InputSource).
///
/// # Example
///
/// ```ignore
/// input.handle_event(InputEvent::Key { key: Key::KeyW, pressed: true });
/// camera.process_input(&input, dt);
/// input.end_frame();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press (or repeat), `false` for release.
        pressed: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Raw relative motion, reported while the cursor is locked.
    MouseMotion {
        /// Horizontal motion in device units.
        dx: f32,
        /// Vertical motion in device units (positive = down).
        dy: f32,
    },
    /// Scroll wheel (positive `dy` = away from the user).
    Scroll {
        /// Horizontal scroll in lines.
        dx: f32,
        /// Vertical scroll in lines.
        dy: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Keyboard keys a camera rig can be bound to.
///
/// Variant names follow the `winit::keyboard::KeyCode` debug format so
/// TOML presets read the same as the winit key names:
/// ```toml
/// [controls]
/// forward = "KeyW"
/// down = "ShiftLeft"
/// ```
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Key {
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    Tab,
    Enter,
    Escape,
    Backquote,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl TryFrom<winit::keyboard::KeyCode> for Key {
    type Error = winit::keyboard::KeyCode;

    fn try_from(code: winit::keyboard::KeyCode) -> Result<Self, Self::Error> {
        use winit::keyboard::KeyCode as K;

        Ok(match code {
            K::KeyA => Self::KeyA,
            K::KeyB => Self::KeyB,
            K::KeyC => Self::KeyC,
            K::KeyD => Self::KeyD,
            K::KeyE => Self::KeyE,
            K::KeyF => Self::KeyF,
            K::KeyG => Self::KeyG,
            K::KeyH => Self::KeyH,
            K::KeyI => Self::KeyI,
            K::KeyJ => Self::KeyJ,
            K::KeyK => Self::KeyK,
            K::KeyL => Self::KeyL,
            K::KeyM => Self::KeyM,
            K::KeyN => Self::KeyN,
            K::KeyO => Self::KeyO,
            K::KeyP => Self::KeyP,
            K::KeyQ => Self::KeyQ,
            K::KeyR => Self::KeyR,
            K::KeyS => Self::KeyS,
            K::KeyT => Self::KeyT,
            K::KeyU => Self::KeyU,
            K::KeyV => Self::KeyV,
            K::KeyW => Self::KeyW,
            K::KeyX => Self::KeyX,
            K::KeyY => Self::KeyY,
            K::KeyZ => Self::KeyZ,
            K::ArrowUp => Self::ArrowUp,
            K::ArrowDown => Self::ArrowDown,
            K::ArrowLeft => Self::ArrowLeft,
            K::ArrowRight => Self::ArrowRight,
            K::Space => Self::Space,
            K::ShiftLeft => Self::ShiftLeft,
            K::ShiftRight => Self::ShiftRight,
            K::ControlLeft => Self::ControlLeft,
            K::ControlRight => Self::ControlRight,
            K::AltLeft => Self::AltLeft,
            K::AltRight => Self::AltRight,
            K::Tab => Self::Tab,
            K::Enter => Self::Enter,
            K::Escape => Self::Escape,
            K::Backquote => Self::Backquote,
            other => return Err(other),
        })
    }
}

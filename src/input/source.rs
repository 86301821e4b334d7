use glam::Vec2;

use super::event::{Key, MouseButton};

/// Read side of the per-frame input service a camera consumes.
///
/// Implementations hold one frame's worth of state: the camera reads it
/// once per [`process_input`](crate::camera::Camera::process_input) call
/// and never observes it changing mid-call.
pub trait InputSource {
    /// Whether `key` is currently down.
    fn is_key_held(&self, key: Key) -> bool;

    /// Whether `key` went down during this frame.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Whether `button` is currently down.
    fn is_mouse_button_held(&self, button: MouseButton) -> bool;

    /// Mouse movement accumulated this frame, in pixels (positive y = down).
    fn mouse_delta(&self) -> Vec2;

    /// Scroll accumulated this frame, in lines.
    fn mouse_scroll(&self) -> Vec2;

    /// Request that the cursor be captured for relative mouse-look.
    fn lock_mouse(&mut self);

    /// Release a captured cursor.
    fn unlock_mouse(&mut self);

    /// Whether the cursor is currently captured.
    fn is_mouse_locked(&self) -> bool;
}

//! Input handling: platform-agnostic events, the per-frame input service
//! trait the camera reads, and the default event-driven implementation.

/// Platform-agnostic input events, keys and mouse buttons.
pub mod event;
/// The input-service trait consumed by the camera.
pub mod source;
/// Event-driven input state with per-frame edge tracking.
pub mod state;

pub use event::{InputEvent, Key, MouseButton};
pub use source::InputSource;
pub use state::InputState;

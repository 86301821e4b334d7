//! Camera system for 3D scene viewing.
//!
//! Provides a single camera with free-fly, first-person, third-person,
//! orbit and fixed modes, cached view/projection matrices, and per-frame
//! input handling.

/// Per-frame input dispatch, mouse-look and scroll handling.
mod controller;
/// Core camera state, basis derivation and matrix construction.
pub mod core;
/// Interaction modes and projection kinds.
pub mod mode;
/// GPU uniform snapshot of the camera.
pub mod uniform;

pub use self::core::{
    Camera, Pose, ProjectionConfig, DEFAULT_DIRECTION, MIN_NEAR, PITCH_LIMIT, WORLD_UP,
};
pub use mode::{CameraMode, ProjectionKind};
pub use uniform::CameraUniform;

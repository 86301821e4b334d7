use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera movement, look and zoom tuning. Pure parameters, no derived state.
pub struct CameraOptions {
    /// Translation speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Factor in `[0, 1]` applied to every discrete move call.
    #[schemars(title = "Move Damping", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub movement_damping: f32,
    /// Degrees of yaw/pitch per pixel of mouse motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Roll rate in degrees per second while a roll key is held.
    #[schemars(title = "Roll Speed", range(min = 1.0, max = 360.0), extend("step" = 1.0))]
    pub roll_speed: f32,
    /// Degrees of field of view removed per scroll line.
    #[schemars(title = "FOV Scroll Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub fov_scroll_speed: f32,
    /// Narrowest field of view reachable by scrolling, in degrees.
    #[schemars(skip)]
    pub fov_min: f32,
    /// Widest field of view reachable by scrolling, in degrees.
    #[schemars(skip)]
    pub fov_max: f32,
    /// Orthographic half-height removed per scroll line.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_scroll_speed: f32,
    /// Smallest orthographic half-height.
    #[schemars(skip)]
    pub zoom_min: f32,
    /// Multiplier on mouse sensitivity while orbiting.
    #[schemars(title = "Orbit Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub orbit_sensitivity: f32,
    /// Orbit radius removed per scroll line.
    #[schemars(title = "Orbit Zoom Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub orbit_zoom_speed: f32,
    /// Closest the orbit camera may get to its target.
    #[schemars(skip)]
    pub orbit_radius_min: f32,
    /// Farthest the orbit camera may get from its target.
    #[schemars(skip)]
    pub orbit_radius_max: f32,
    /// Whether orbit rotation only follows the mouse while
    /// `orbit_drag_button` is held.
    #[schemars(skip)]
    pub orbit_requires_drag: bool,
    /// Button that gates orbit rotation.
    #[schemars(skip)]
    pub orbit_drag_button: MouseButton,
    /// Whether movement keys translate the third-person target.
    #[schemars(title = "Third-Person Follow")]
    pub third_person_follow: bool,
    /// Initial value of the camera's pitch-constraint flag.
    #[schemars(skip)]
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            movement_damping: 1.0,
            mouse_sensitivity: 0.1,
            roll_speed: 60.0,
            fov_scroll_speed: 1.0,
            fov_min: 1.0,
            fov_max: 90.0,
            zoom_scroll_speed: 0.05,
            zoom_min: 0.1,
            orbit_sensitivity: 1.0,
            orbit_zoom_speed: 0.5,
            orbit_radius_min: 1.0,
            orbit_radius_max: 100.0,
            orbit_requires_drag: true,
            orbit_drag_button: MouseButton::Right,
            third_person_follow: false,
            constrain_pitch: true,
        }
    }
}

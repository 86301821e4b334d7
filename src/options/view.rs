use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraMode, Pose, ProjectionConfig, ProjectionKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Initial View", inline)]
#[serde(default)]
/// Pose, mode and projection a camera starts with.
pub struct InitialView {
    /// Starting interaction mode.
    pub mode: CameraMode,
    /// Starting projection kind.
    pub projection: ProjectionKind,
    /// Eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// View direction; all-zero means the default `(0, 0, -1)`.
    #[schemars(skip)]
    pub direction: [f32; 3],
    /// Up hint; all-zero means the default `(0, 1, 0)`.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Pivot for orbit and third-person modes.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Distance between eye and target in follow modes.
    #[schemars(title = "Orbit Radius", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub orbit_radius: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 90.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f32,
    /// Orthographic half-height.
    #[schemars(title = "Ortho Zoom", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub zoom: f32,
    /// Viewport width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Viewport height in pixels.
    #[schemars(skip)]
    pub height: u32,
}

impl Default for InitialView {
    fn default() -> Self {
        let projection = ProjectionConfig::default();
        Self {
            mode: CameraMode::Free,
            projection: projection.kind,
            position: [0.0, 0.0, 3.0],
            direction: [0.0, 0.0, -1.0],
            up: [0.0, 1.0, 0.0],
            target: [0.0; 3],
            orbit_radius: 5.0,
            fov: projection.fov,
            near: projection.near,
            far: projection.far,
            zoom: projection.zoom,
            width: projection.width,
            height: projection.height,
        }
    }
}

impl InitialView {
    /// Starting pose as glam vectors.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            position: Vec3::from_array(self.position),
            direction: Vec3::from_array(self.direction),
            up: Vec3::from_array(self.up),
        }
    }

    /// Starting projection parameters.
    #[must_use]
    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            kind: self.projection,
            fov: self.fov,
            near: self.near,
            far: self.far,
            zoom: self.zoom,
            width: self.width,
            height: self.height,
        }
    }
}

use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block with the camera matrices and eye data, uploaded once
/// per frame.
pub struct CameraUniform {
    /// World-to-view matrix.
    pub view: [[f32; 4]; 4],
    /// View-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            forward: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }
}

impl CameraUniform {
    /// Snapshot the given camera's current state.
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: camera.position().to_array(),
            fovy: camera.fov(),
            forward: camera.direction().to_array(),
            aspect: camera.aspect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{CameraMode, Pose, ProjectionConfig};

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 3 * 64 + 2 * 16);
        let uniform = CameraUniform::default();
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 224);
    }

    #[test]
    fn uniform_mirrors_camera() {
        let camera = Camera::new(
            Pose {
                position: Vec3::new(1.0, 2.0, 3.0),
                ..Pose::default()
            },
            CameraMode::Free,
            ProjectionConfig::default(),
        );
        let uniform = camera.uniform();
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.forward, camera.direction().to_array());
        assert_eq!(
            uniform.view_proj,
            (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d()
        );
    }
}

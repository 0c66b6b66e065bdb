//! Camera parameters and the per-draw uniform layout.
//!
//! The camera is a plain value owned by the application state. Its view and
//! projection matrices are derived on demand through [`crate::math`]; nothing
//! is cached between frames.

use crate::math::{self, Mat4, Vec3};

/// Vertical half-extent of the orthographic view volume, in world units.
pub const ORTHO_HALF_HEIGHT: f32 = 10.0;
pub const ORTHO_NEAR: f32 = 1.0;
pub const ORTHO_FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    /// Look-at point. Kept for completeness, the view derivation ignores it.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(position: Vec3, fov: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            rotation: Vec3::new(0.0, 0.0, 0.0),
            target: Vec3::new(0.0, 0.0, 0.0),
            fov,
            near,
            far,
            mode: ProjectionMode::Perspective,
        }
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        math::camera_matrix(self.position, self.rotation)
    }

    /// Projection for a surface with the given width / height ratio.
    ///
    /// Orthographic mode keeps a fixed vertical extent and widens the box to
    /// the aspect ratio so shapes are not stretched.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.mode {
            ProjectionMode::Perspective => math::perspective(self.fov, aspect, self.near, self.far),
            ProjectionMode::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect;
                math::orthographic(
                    -half_width,
                    half_width,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    ORTHO_NEAR,
                    ORTHO_FAR,
                )
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 20.0), 60.0, 1.0, 10000.0)
    }
}

/// Combined clip-space transform for one draw call, as laid out on the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    view_proj_model: [[f32; 4]; 4],
}

impl MeshUniform {
    /// `view_proj` is `P * V` in OpenGL clip space; the wgpu depth correction
    /// is folded in here.
    pub fn new(view_proj: &Mat4, model: &Mat4) -> Self {
        Self {
            view_proj_model: (math::OPENGL_TO_WGPU * view_proj * model).into(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.view_proj_model.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_sandbox_setup() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(camera.fov, 60.0);
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 10000.0);
        assert_eq!(camera.mode, ProjectionMode::Perspective);
    }

    #[test]
    fn view_matrix_only_translates_unrotated_camera() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        assert_eq!(view, math::translation_camera(0.0, 0.0, -20.0));
    }

    #[test]
    fn orthographic_box_follows_aspect_ratio() {
        let camera = Camera::default().with_mode(ProjectionMode::Orthographic);
        let p = camera.projection_matrix(2.0);
        assert!((p[0][0] - 2.0 / 40.0).abs() < 1e-6);
        assert!((p[1][1] - 2.0 / 20.0).abs() < 1e-6);
        assert_eq!(p[2][3], 0.0);
        assert_eq!(p[3][3], 1.0);
    }

    #[test]
    fn uniform_is_a_single_column_major_matrix() {
        assert_eq!(std::mem::size_of::<MeshUniform>(), 64);
        let model = math::translation(Vec3::new(1.0, 2.0, 3.0));
        let uniform = MeshUniform::new(&math::IDENTITY, &model);
        let m = uniform.matrix();
        assert_eq!(m[3][0], 1.0);
        assert_eq!(m[3][1], 2.0);
        assert_eq!(m[3][2], 0.5 * 3.0 + 0.5);
    }
}

//! Per-frame matrix computation and draw submission.
//!
//! Every displayed frame recomputes the view and projection matrices from the
//! current camera, writes one combined `P * V * M` matrix per mesh into that
//! mesh's uniform buffer, and records one indexed draw per mesh.
//!
//! # Key types
//!
//! - [`FrameMatrices`] holds `V`, `P` and `PV` for one frame
//! - [`draw_scene`] encodes the draws for a whole [`Scene`] into a render pass

use crate::{
    camera::{Camera, MeshUniform},
    data_structures::scene::Scene,
    math::{self, Mat4},
    pipelines::basic::ShaderProgram,
};

/// View, projection and their product for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl FrameMatrices {
    pub fn compute(camera: &Camera, aspect: f32) -> Self {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(aspect);
        Self {
            view,
            projection,
            view_projection: math::mat_mul(&projection, &view),
        }
    }

    /// Uniform for a mesh placed with `model`.
    pub fn mesh_uniform(&self, model: &Mat4) -> MeshUniform {
        MeshUniform::new(&self.view_projection, model)
    }
}

/// Compute every mesh's uniform for this frame, in draw order.
pub fn mesh_uniforms(scene: &Scene, frame: &FrameMatrices) -> Vec<MeshUniform> {
    scene
        .meshes()
        .iter()
        .map(|(id, _)| frame.mesh_uniform(&scene.transform(id).to_matrix()))
        .collect()
}

/// Write this frame's uniforms and record one indexed draw per uploaded mesh.
///
/// Returns the number of draw calls issued. Nothing is drawn when the shader
/// program failed to build.
pub fn draw_scene(
    render_pass: &mut wgpu::RenderPass<'_>,
    queue: &wgpu::Queue,
    shader: &ShaderProgram,
    scene: &Scene,
    frame: &FrameMatrices,
) -> usize {
    if !shader.is_usable() {
        return 0;
    }

    render_pass.set_pipeline(&shader.pipeline);

    let mut draws = 0;
    for ((_, mesh), uniform) in scene.meshes().iter().zip(mesh_uniforms(scene, frame)) {
        let Some(gpu) = mesh.gpu() else {
            log::warn!("Mesh {:?} was never uploaded, skipping it", mesh.name);
            continue;
        };
        if gpu.num_elements == 0 {
            continue;
        }
        queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
        render_pass.set_bind_group(0, &gpu.bind_group, &[]);
        render_pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        render_pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..gpu.num_elements, 0, 0..1);
        draws += 1;
    }
    draws
}

#[cfg(test)]
mod tests {
    use cgmath::Vector4;

    use super::*;
    use crate::{math::Vec3, resources};

    #[test]
    fn combined_matrix_is_projection_times_view() {
        let camera = Camera::default();
        let frame = FrameMatrices::compute(&camera, 4.0 / 3.0);
        assert_eq!(frame.view, camera.view_matrix());
        assert_eq!(frame.projection, camera.projection_matrix(4.0 / 3.0));
        assert_eq!(frame.view_projection, frame.projection * frame.view);
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let frame = FrameMatrices::compute(&Camera::default(), 1024.0 / 768.0);
        let uniform = frame.mesh_uniform(&math::IDENTITY);
        let clip = uniform.matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn one_uniform_per_mesh_in_draw_order() {
        let scene = resources::demo_scene().unwrap();
        let frame = FrameMatrices::compute(&Camera::default(), 4.0 / 3.0);
        let uniforms = mesh_uniforms(&scene, &frame);
        assert_eq!(uniforms.len(), scene.len());

        // the newest mesh sits at x = -25, so its origin lands left of centre
        let clip = uniforms[0].matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x / clip.w < 0.0);

        let (first_id, _) = scene.meshes().iter().next().unwrap();
        assert_eq!(scene.transform(first_id).translation, Vec3::new(-25.0, 0.0, 0.0));
    }

    #[test]
    fn moving_the_camera_changes_the_frame() {
        let mut camera = Camera::default();
        let before = FrameMatrices::compute(&camera, 1.0);
        camera.position.z -= 0.2;
        let after = FrameMatrices::compute(&camera, 1.0);
        assert_ne!(before.view, after.view);
        assert_eq!(before.projection, after.projection);
    }
}

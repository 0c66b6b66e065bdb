#[cfg(feature = "integration-tests")]
mod common;

#[cfg(feature = "integration-tests")]
mod gpu {
    use std::iter;

    use mesh_sandbox::{
        camera::Camera,
        data_structures::{scene::Scene, texture::Texture},
        pipelines::basic::ShaderProgram,
        render::{self, FrameMatrices},
        resources,
    };

    use crate::common::test_utils::headless_device;

    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
    const WIDTH: u32 = 256;
    const HEIGHT: u32 = 192;

    /// Record one frame of `scene` into an offscreen target, submit it and
    /// return the number of draws issued.
    fn render_offscreen(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        program: &ShaderProgram,
        scene: &Scene,
    ) -> usize {
        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width: WIDTH,
                height: HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());
        let depth = Texture::create_depth_texture(device, [WIDTH, HEIGHT], "depth_texture");
        let frame = FrameMatrices::compute(&Camera::default(), WIDTH as f32 / HEIGHT as f32);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
        let draws = {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render::draw_scene(&mut render_pass, queue, program, scene, &frame)
        };
        queue.submit(iter::once(encoder.finish()));
        draws
    }

    #[tokio::test]
    async fn bundled_shaders_compile_and_link() {
        let Some((device, _queue)) = headless_device().await else {
            return;
        };
        let program = ShaderProgram::new(&device, FORMAT).await;
        assert!(program.status.vertex_compiled);
        assert!(program.status.fragment_compiled);
        assert!(program.status.linked);
    }

    #[tokio::test]
    async fn broken_vertex_shader_clears_without_drawing() {
        let Some((device, queue)) = headless_device().await else {
            return;
        };
        let program = ShaderProgram::from_sources(
            &device,
            FORMAT,
            "@vertex fn vs_main( -> @builtin(position) vec4<f32> {",
            include_str!("../src/pipelines/interpolated_colour.frag.wgsl"),
        )
        .await;
        assert!(!program.status.vertex_compiled);
        assert!(program.status.fragment_compiled);
        assert!(!program.is_usable());

        let mut scene = resources::demo_scene().unwrap();
        scene.upload(&device, &program.mesh_layout);
        assert_eq!(render_offscreen(&device, &queue, &program, &scene), 0);
    }

    #[tokio::test]
    async fn demo_scene_issues_one_draw_per_mesh() {
        let Some((device, queue)) = headless_device().await else {
            return;
        };
        let program = ShaderProgram::new(&device, FORMAT).await;
        let mut scene = resources::demo_scene().unwrap();
        scene.upload(&device, &program.mesh_layout);
        assert!(scene.meshes().iter().all(|(_, mesh)| mesh.is_uploaded()));

        assert_eq!(render_offscreen(&device, &queue, &program, &scene), scene.len());
    }

    #[tokio::test]
    async fn geometry_is_uploaded_only_once() {
        let Some((device, queue)) = headless_device().await else {
            return;
        };
        let program = ShaderProgram::new(&device, FORMAT).await;
        let mut scene = resources::demo_scene().unwrap();

        scene.upload(&device, &program.mesh_layout);
        let buffers = |scene: &Scene| -> Vec<(wgpu::Buffer, wgpu::Buffer, wgpu::Buffer)> {
            scene
                .meshes()
                .iter()
                .filter_map(|(_, mesh)| mesh.gpu())
                .map(|gpu| {
                    (
                        gpu.vertex_buffer.clone(),
                        gpu.index_buffer.clone(),
                        gpu.uniform_buffer.clone(),
                    )
                })
                .collect()
        };
        let first = buffers(&scene);
        assert_eq!(first.len(), scene.len());

        scene.upload(&device, &program.mesh_layout);
        assert_eq!(buffers(&scene), first);

        // the scene still renders with the buffers from the first upload
        assert_eq!(render_offscreen(&device, &queue, &program, &scene), scene.len());
    }
}

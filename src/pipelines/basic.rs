use crate::data_structures::{mesh::MeshVertex, texture::Texture};

/// Outcome of compiling and linking the fixed shader pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderStatus {
    pub vertex_compiled: bool,
    pub fragment_compiled: bool,
    pub linked: bool,
}

impl ShaderStatus {
    pub fn is_usable(&self) -> bool {
        self.vertex_compiled && self.fragment_compiled && self.linked
    }
}

/// The one render pipeline the sandbox draws with, plus the layout each
/// mesh's uniform bind group must follow.
#[derive(Debug)]
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub mesh_layout: wgpu::BindGroupLayout,
    pub status: ShaderStatus,
}

impl ShaderProgram {
    /// Compile both stages and link them into a pipeline.
    ///
    /// Failures do not abort: they are logged and recorded in
    /// [`ShaderStatus`], and the renderer refuses to draw with an unusable
    /// program.
    pub async fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        Self::from_sources(
            device,
            color_format,
            include_str!("normal_colour.vert.wgsl"),
            include_str!("interpolated_colour.frag.wgsl"),
        )
        .await
    }

    pub async fn from_sources(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Self {
        let (vertex, vertex_compiled) = compile_stage(
            device,
            "Vertex",
            wgpu::ShaderModuleDescriptor {
                label: Some("Normal Colour Vertex Shader"),
                source: wgpu::ShaderSource::Wgsl(vertex_source.into()),
            },
        )
        .await;
        let (fragment, fragment_compiled) = compile_stage(
            device,
            "Fragment",
            wgpu::ShaderModuleDescriptor {
                label: Some("Interpolated Colour Fragment Shader"),
                source: wgpu::ShaderSource::Wgsl(fragment_source.into()),
            },
        )
        .await;

        let mesh_layout = mk_mesh_bind_group_layout(device);

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&mesh_layout],
            push_constant_ranges: &[],
        });
        let pipeline = mk_render_pipeline(
            device,
            &layout,
            &vertex,
            &fragment,
            color_format,
            Some(Texture::DEPTH_FORMAT),
            &[MeshVertex::desc()],
        );
        let linked = match device.pop_error_scope().await {
            None => {
                log::info!("Shader program linked successfully!");
                true
            }
            Some(e) => {
                log::error!("Link error in shader program: {}", e);
                false
            }
        };

        Self {
            pipeline,
            mesh_layout,
            status: ShaderStatus {
                vertex_compiled,
                fragment_compiled,
                linked,
            },
        }
    }

    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }
}

/// Create one shader module and report its compilation messages.
async fn compile_stage(
    device: &wgpu::Device,
    stage: &str,
    descriptor: wgpu::ShaderModuleDescriptor<'_>,
) -> (wgpu::ShaderModule, bool) {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(descriptor);
    let info = module.get_compilation_info().await;
    let scope_error = device.pop_error_scope().await;

    let mut compiled = scope_error.is_none();
    for message in &info.messages {
        let location = message
            .location
            .as_ref()
            .map(|l| format!(" at {}:{}", l.line_number, l.line_position))
            .unwrap_or_default();
        match message.message_type {
            wgpu::CompilationMessageType::Error => {
                compiled = false;
                log::error!("{} shader{}: {}", stage, location, message.message);
            }
            wgpu::CompilationMessageType::Warning => {
                log::warn!("{} shader{}: {}", stage, location, message.message);
            }
            wgpu::CompilationMessageType::Info => {
                log::info!("{} shader{}: {}", stage, location, message.message);
            }
        }
    }

    match scope_error {
        Some(e) => log::error!("Error in {} shader: {}", stage.to_lowercase(), e),
        None if compiled => log::info!("{} shader compiled successfully!", stage),
        None => log::error!("Error in {} shader!", stage.to_lowercase()),
    }

    (module, compiled)
}

pub fn mk_mesh_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("mesh_bind_group_layout"),
    })
}

pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    vertex: &wgpu::ShaderModule,
    fragment: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    depth_format: Option<wgpu::TextureFormat>,
    vertex_layouts: &[wgpu::VertexBufferLayout],
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some("Render Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: vertex,
            entry_point: Some("vs_main"),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: fragment,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // the compiled-in meshes are not guaranteed to share one winding
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_requires_every_stage() {
        let ok = ShaderStatus {
            vertex_compiled: true,
            fragment_compiled: true,
            linked: true,
        };
        assert!(ok.is_usable());
        assert!(!ShaderStatus { linked: false, ..ok }.is_usable());
        assert!(!ShaderStatus { vertex_compiled: false, ..ok }.is_usable());
        assert!(!ShaderStatus { fragment_compiled: false, ..ok }.is_usable());
    }
}

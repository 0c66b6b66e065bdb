use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{config::Config, data_structures::texture, pipelines::basic::ShaderProgram};

/// GPU and window state: surface, device, queue, depth buffer and the shader
/// program. Created once when the window exists; dropped at exit, which
/// releases every GPU resource it owns.
#[derive(Debug)]
pub struct Context {
    window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub shader: ShaderProgram,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>, app_config: &Config) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No graphics adapter can present to this window")?;
        log_adapter_info(&adapter.get_info());

        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Sandbox Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("Failed to open the graphics device")?;

        log::info!("Surface");
        let surface_caps = surface.get_capabilities(&adapter);
        // Shaders write linear colours, so prefer an sRGB surface.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface reports no supported formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let shader = ShaderProgram::new(&device, config.format).await;
        if !shader.is_usable() {
            log::error!("Shader program is unusable, meshes will not be drawn");
        }

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            shader,
            clear_colour: app_config.clear_colour,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Width / height of the current surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Reconfigure the surface and depth buffer. Zero-sized requests (a
    /// minimised window) are ignored; returns whether the surface changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let Some((width, height)) = surface_extent(width, height) else {
            return false;
        };
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = texture::Texture::create_depth_texture(
            &self.device,
            [self.config.width, self.config.height],
            "depth_texture",
        );
        true
    }
}

fn log_adapter_info(info: &wgpu::AdapterInfo) {
    log::info!("Graphics adapter: {} ({:?})", info.name, info.device_type);
    log::info!("Graphics backend: {}", info.backend);
    log::info!("Graphics vendor: {:#06x}", info.vendor);
    log::info!("Graphics driver: {} {}", info.driver, info.driver_info);
}

/// A surface size that can be configured, `None` when either side is zero.
pub fn surface_extent(width: u32, height: u32) -> Option<(u32, u32)> {
    (width > 0 && height > 0).then_some((width, height))
}

//! Window, event loop and per-frame rendering.
//!
//! [`run`] opens one window, builds the GPU [`Context`] and the demo scene,
//! then hands control to winit. Frames are drawn on demand: once after start
//! up or a resize, and again whenever a key moves the camera.
//!
//! # Lifecycle
//!
//! 1. `resumed` creates the window and initializes [`AppState`]
//! 2. `window_event` handles close, resize, keyboard and redraw requests
//! 3. `exiting` drops the state, releasing every GPU resource

use std::{iter, sync::Arc};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::Window,
};

use crate::{
    camera::Camera,
    config::Config,
    context::Context,
    data_structures::scene::Scene,
    input::{self, KeyAction},
    render::{self, FrameMatrices},
    resources,
};

/// Everything the running application owns: GPU context, camera and scene.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    pub camera: Camera,
    pub scene: Scene,
    camera_step: f32,
    is_surface_configured: bool,
}

impl AppState {
    pub async fn new(window: Arc<Window>, config: &Config) -> anyhow::Result<Self> {
        let ctx = Context::new(window, config).await?;

        let mut scene = resources::demo_scene()?;
        scene.upload(&ctx.device, &ctx.shader.mesh_layout);

        let camera = Camera::default().with_mode(config.projection);
        log::info!("Camera at {:?}, {:?} projection", camera.position, camera.mode);

        let mut state = Self {
            ctx,
            camera,
            scene,
            camera_step: config.camera_step,
            is_surface_configured: false,
        };
        let size = state.ctx.window().inner_size();
        state.resize(size.width, size.height);
        Ok(state)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.ctx.resize(width, height) {
            self.is_surface_configured = true;
        }
    }

    /// Apply a key event; returns what the key did.
    fn handle_key(&mut self, event: &winit::event::KeyEvent) -> KeyAction {
        input::handle_key_event(&mut self.camera, self.camera_step, event)
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = FrameMatrices::compute(&self.camera, self.ctx.aspect_ratio());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let draws = render::draw_scene(
                &mut render_pass,
                &self.ctx.queue,
                &self.ctx.shader,
                &self.scene,
                &frame,
            );
            log::trace!("Drew {} of {} meshes", draws, self.scene.len());
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: Config,
    state: Option<AppState>,
    // Set when start up failed; reported by `run` once the loop returns.
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            init_error: None,
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(window_attributes)?);
        self.async_runtime.block_on(AppState::new(window, &self.config))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(state) => {
                state.ctx.window().request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("App initialization failed: {:#}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                state.resize(size.width, size.height);
                state.ctx.window().request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let action = state.handle_key(&event);
                if action == KeyAction::Exit {
                    event_loop.exit();
                } else if action.needs_redraw() {
                    state.ctx.window().request_redraw();
                }
            }
            WindowEvent::RedrawRequested => match state.render() {
                Ok(_) => {}
                // Reconfigure the surface if it's lost or outdated
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = state.ctx.window().inner_size();
                    state.resize(size.width, size.height);
                    state.ctx.window().request_redraw();
                }
                Err(e) => {
                    log::error!("Unable to render {}", e);
                }
            },
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Running clean up...");
        self.state = None;
        log::info!("Done!");
    }
}

/// Open the window and run until it is closed or `q` is pressed.
pub fn run(config: Config) -> anyhow::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

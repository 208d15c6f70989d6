//! Rendering module: wgpu surface, shared GPU handles and the egui debug pass
//!
//! ## Architecture
//!
//! - `mesh`: Vertex formats and immutable vertex/index buffers
//! - `pipeline`: WGSL sources, uniform bindings and pipeline construction
//! - `texture`: Sampled textures, depth buffer and image loading
//! - `ui`: Batches the menu overlay into textured quads
//!
//! Each frame the demo draws into one pass that clears color (and depth
//! when the demo asks for it); the debug window, when shown, is drawn in a
//! second pass on top.

use std::sync::Arc;

use anyhow::Context as _;
use egui::Context;
use tracing::info;
use wgpu::{Device, Queue, Surface, SurfaceConfiguration, TextureFormat};
use winit::event::WindowEvent;
use winit::window::Window;

use super::debug_ui::DebugUIState;
use super::demo::Demo;

pub mod mesh;
pub mod pipeline;
pub mod texture;
pub mod ui;

use texture::Texture;

/// GPU handles shared with demos
pub struct Gpu {
    pub device: Device,
    pub queue: Queue,
    /// Surface color format
    pub format: TextureFormat,
    /// Surface size in physical pixels
    pub size: [u32; 2],
    pub adapter_info: wgpu::AdapterInfo,
}

impl Gpu {
    /// Width over height, 1.0 for a degenerate surface
    pub fn aspect(&self) -> f32 {
        if self.size[1] == 0 {
            1.0
        } else {
            self.size[0] as f32 / self.size[1] as f32
        }
    }
}

/// Adapter and surface facts shown in the debug window
#[derive(Debug, Clone)]
pub struct RendererInfo {
    pub adapter: String,
    pub backend: wgpu::Backend,
    pub size: [u32; 2],
    pub format: TextureFormat,
    pub present_mode: wgpu::PresentMode,
}

/// Renderer handles wgpu setup, the per-frame pass and egui rendering
pub struct Renderer {
    surface: Surface<'static>,
    gpu: Gpu,
    config: SurfaceConfiguration,
    depth: Texture,
    egui_ctx: Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Renderer {
    /// Returns a reference to the surface configuration
    pub fn config(&self) -> &SurfaceConfiguration {
        &self.config
    }

    /// Shared GPU handles
    pub fn gpu(&self) -> &Gpu {
        &self.gpu
    }

    /// Snapshot of adapter and surface facts for display
    pub fn info(&self) -> RendererInfo {
        RendererInfo {
            adapter: self.gpu.adapter_info.name.clone(),
            backend: self.gpu.adapter_info.backend,
            size: self.gpu.size,
            format: self.config.format,
            present_mode: self.config.present_mode,
        }
    }

    /// Creates a new renderer for the given window
    pub async fn new(window: Arc<Window>, vsync: bool) -> anyhow::Result<Self> {
        info!("Initializing wgpu renderer");

        // Create wgpu instance
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;

        let adapter_info = adapter.get_info();
        info!(
            adapter.name = adapter_info.name,
            adapter.backend = ?adapter_info.backend,
            "Found GPU adapter"
        );

        // Request device and queue
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await
            .context("failed to create GPU device")?;

        // Configure surface
        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        info!(
            surface.width = config.width,
            surface.height = config.height,
            surface.format = ?config.format,
            vsync,
            "Surface configured"
        );

        let depth = Texture::depth(&device, config.width, config.height);

        // Initialize egui
        let egui_ctx = Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            config.format,
            egui_wgpu::RendererOptions {
                depth_stencil_format: None,
                msaa_samples: 1,
                ..Default::default()
            },
        );

        info!("egui initialized successfully");

        Ok(Self {
            surface,
            gpu: Gpu {
                device,
                queue,
                format: surface_format,
                size: [config.width, config.height],
                adapter_info,
            },
            config,
            depth,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    /// Handles window events for egui
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Resizes the surface and depth buffer
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.gpu.device, &self.config);
            self.depth = Texture::depth(&self.gpu.device, new_size.width, new_size.height);
            self.gpu.size = [new_size.width, new_size.height];

            info!(
                width = new_size.width,
                height = new_size.height,
                "Surface resized"
            );
        }
    }

    /// Renders one frame of `demo`, plus the debug window when it is shown
    pub fn draw<D: Demo>(
        &mut self,
        window: &Window,
        demo: &mut D,
        debug_ui: &mut DebugUIState,
    ) -> Result<(), wgpu::SurfaceError> {
        // Get the surface texture
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        demo.prepare(&self.gpu);

        // Prepare rendering encoder
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let depth_stencil_attachment =
                demo.uses_depth()
                    .then(|| wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    });

            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Demo Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(demo.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            demo.draw(&mut rpass);
        }

        if debug_ui.show_window {
            let info = self.info();
            self.draw_egui(window, &mut encoder, &view, |ctx| {
                debug_ui.render(ctx, &info, demo);
            });
        }

        // Submit commands
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn draw_egui(
        &mut self,
        window: &Window,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        mut render_ui: impl FnMut(&Context),
    ) {
        // Prepare egui
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| render_ui(ctx));

        // Handle platform output
        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        // Upload egui primitives
        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            &self.gpu.device,
            &self.gpu.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        // Render pass - use forget_lifetime() for egui_wgpu compatibility
        {
            let rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut rpass.forget_lifetime(), &tris, &screen_descriptor);
        }

        // Cleanup textures
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

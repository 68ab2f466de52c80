//! WGPU-based renderer implementation for frameshell
//!
//! Establishes the rendering context for a window (instance, surface,
//! adapter, device and queue) and presents one cleared frame per call.
//! Context attributes (presentation mode, power preference, frame latency)
//! are fixed before creation; creation fails if the platform cannot
//! satisfy them.

use crate::renderer::Renderer;
use crate::utils::config::{GraphicsConfig, PowerPreference};
use crate::utils::error::{IntoShellError, Result, ShellError};
use std::sync::Arc;
use winit::window::Window;

/// WGPU renderer implementation
pub struct WgpuRenderer {
    /// Window the surface is bound to
    window: Arc<Window>,

    /// Render surface
    surface: wgpu::Surface<'static>,

    /// WGPU device
    device: wgpu::Device,

    /// WGPU queue for submitting commands
    queue: wgpu::Queue,

    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,

    /// Fixed clear color, set once at creation
    clear_color: wgpu::Color,
}

impl WgpuRenderer {
    /// Create a rendering context bound to the given window
    pub fn new(window: Arc<Window>, config: &GraphicsConfig) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context_err("failed to create surface")?;

        let power_preference = match config.power_preference {
            PowerPreference::Low => wgpu::PowerPreference::LowPower,
            PowerPreference::High => wgpu::PowerPreference::HighPerformance,
        };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .binding_init_err("no compatible graphics adapter")?;

        log::debug!("using graphics adapter {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("frameshell device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            ..Default::default()
        }))
        .context_err("failed to create device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats.first().copied().ok_or_else(|| {
            ShellError::ContextBind("surface reports no compatible formats".to_string())
        })?;

        let present_mode = if config.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            desired_maximum_frame_latency: config.frame_latency,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };

        // Make the context current: bind the surface to the device.
        surface.configure(&device, &surface_config);

        let c = config.clear_color;
        let clear_color = wgpu::Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        };

        Ok(Self {
            window,
            surface,
            device,
            queue,
            surface_config,
            clear_color,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}

impl Renderer for WgpuRenderer {
    fn surface_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn present_clear(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) != (self.surface_config.width, self.surface_config.height) {
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.reconfigure();
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Stale surface; reconfigure and let the next frame draw.
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(ShellError::Graphics("out of GPU memory".to_string()));
            }
            Err(e) => {
                log::warn!("surface texture acquisition failed: {:?}", e);
                return Ok(());
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frameshell clear encoder"),
            });

        {
            // A clear-only pass: no pipeline, no draws.
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frameshell clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

impl Drop for WgpuRenderer {
    fn drop(&mut self) {
        log::debug!("releasing rendering context");
    }
}

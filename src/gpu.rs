//! GPU state management
//!
//! Owns the wgpu device, the window surface, and the vello renderer. The
//! scene is rendered into an offscreen texture (vello requires a storage
//! binding, which surfaces don't offer) and blitted to the surface.

use std::sync::Arc;

use anyhow::{Context, anyhow};
use winit::window::Window;

pub struct Gpu {
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    renderer: vello::Renderer,
    target: wgpu::Texture,
    target_view: wgpu::TextureView,
    blitter: wgpu::util::TextureBlitter,
}

impl Gpu {
    pub fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        log::debug!("Initializing GPU state");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let size = window.inner_size();
        let surface = instance
            .create_surface(window)
            .context("creating window surface")?;

        let adapter = pollster::block_on(async {
            instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
        })
        .map_err(|e| anyhow!("no suitable GPU adapter: {e}"))?;

        log::debug!(
            "GPU adapter: {:?} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = pollster::block_on(async {
            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
        })
        .context("creating GPU device")?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let renderer = vello::Renderer::new(
            &device,
            vello::RendererOptions {
                pipeline_cache: None,
                ..Default::default()
            },
        )
        .map_err(|e| anyhow!("creating vello renderer: {e}"))?;

        let (target, target_view) =
            create_target(&device, surface_config.width, surface_config.height);
        let blitter = wgpu::util::TextureBlitter::new(&device, format);

        Ok(Self {
            surface,
            surface_config,
            device,
            queue,
            renderer,
            target,
            target_view,
            blitter,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);

        let (target, target_view) = create_target(&self.device, width, height);
        self.target = target;
        self.target_view = target_view;
    }

    /// Render the scene into the offscreen target and present it
    pub fn render(&mut self, scene: &vello::Scene) -> anyhow::Result<()> {
        let params = vello::RenderParams {
            base_color: vello::peniko::color::palette::css::BLACK,
            width: self.surface_config.width,
            height: self.surface_config.height,
            antialiasing_method: vello::AaConfig::Area,
        };
        self.renderer
            .render_to_texture(&self.device, &self.queue, scene, &self.target_view, &params)
            .map_err(|e| anyhow!("vello render failed: {e}"))?;

        let frame = self
            .surface
            .get_current_texture()
            .context("acquiring surface texture")?;
        let frame_view = frame.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Backdrop Blit"),
            });
        self.blitter
            .copy(&self.device, &mut encoder, &self.target_view, &frame_view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_target(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let target = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Backdrop Target"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = target.create_view(&Default::default());
    (target, view)
}

// src/app.rs

use anyhow::Context as _;
use log::{info, warn};
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use chaos_game::{ChaosSession, Settings, TickClock};

use crate::rendering_lib::{Renderer, WGSL_SHADER_SOURCE};
use crate::ui::{build_ui, ControlPanel, PanelStatus, UiChanges};

pub struct ChaosApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    max_canvas_dimension: u32,
    renderer: Renderer,
    session: ChaosSession,
    clock: TickClock,
    settings: Settings,
    panel: ControlPanel,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    exit_requested: bool,
}

impl ChaosApp {
    pub async fn new(window: std::sync::Arc<Window>, settings: Settings) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create a drawing surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible graphics adapter found")?;
        info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await
            .context("failed to open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no supported formats")?;
        info!("surface format {surface_format:?}");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let max_canvas_dimension = device.limits().max_texture_dimension_2d;
        let params = settings.params(
            config.width.min(max_canvas_dimension),
            config.height.min(max_canvas_dimension),
        );
        let session = ChaosSession::new(params, settings.seed, settings.background, settings.foreground)
            .context("invalid initial parameters")?;
        let clock = TickClock::new(settings.tick_rate, settings.max_ticks_per_frame);
        info!(
            "starting with {} vertices, multiplier {}, {} ticks/s, seed {:?}",
            params.vertex_count, params.multiplier, clock.tick_rate(), settings.seed,
        );

        let renderer = Renderer::new(&device, config.format, WGSL_SHADER_SOURCE, session.canvas());

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        let panel = ControlPanel::new(&settings);

        Ok(Self {
            surface, device, queue, config, max_canvas_dimension,
            renderer, session, clock, settings, panel,
            egui_ctx, egui_state, egui_renderer,
            exit_requested: false,
        })
    }

    /// Reapplies the current surface configuration after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn exit_requested(&self) -> bool { self.exit_requested }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let width = new_size.width.min(self.max_canvas_dimension);
            let height = new_size.height.min(self.max_canvas_dimension);
            if let Err(e) = self.session.on_resize(width, height) {
                warn!("ignoring resize to {width}x{height}: {e}");
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        let due = self.clock.advance(dt);
        if let Err(e) = self.session.run_ticks(due) {
            warn!("tick failed: {e}");
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        self.renderer.upload_canvas(&self.device, &self.queue, self.session.canvas_mut());
        let [r, g, b, _] = self.settings.background;
        self.renderer.render_canvas(
            &mut encoder, &view,
            wgpu::Color { r: r as f64 / 255.0, g: g as f64 / 255.0, b: b as f64 / 255.0, a: 1.0 },
        );

        let status = PanelStatus {
            ticks: self.session.ticks(),
            tick_rate: self.clock.tick_rate(),
            seed: self.settings.seed,
        };
        let mut changes = UiChanges::default();
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            changes = build_ui(ctx, &mut self.panel, &status);
        });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();

        self.apply_ui_changes(changes);
        Ok(())
    }

    fn apply_ui_changes(&mut self, changes: UiChanges) {
        if let Some(count) = changes.vertex_count {
            if let Err(e) = self.session.on_vertex_count_changed(count) {
                warn!("rejected vertex count {count}: {e}");
            }
        }
        if let Some(multiplier) = changes.multiplier {
            if let Err(e) = self.session.on_multiplier_changed(multiplier) {
                warn!("rejected multiplier {multiplier}: {e}");
            }
        }
        if changes.pause_toggled {
            self.set_paused(self.panel.paused);
        }
        if changes.clear_requested {
            self.session.clear();
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if paused { self.clock.pause() } else { self.clock.resume() }
        self.panel.paused = paused;
        info!("{}", if paused { "paused" } else { "resumed" });
    }

    /// Returns true when the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if self.egui_state.on_window_event(window, event).consumed { return true; }
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } if key_event.state == ElementState::Pressed => {
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Space) => {
                        if !key_event.repeat {
                            self.set_paused(!self.clock.is_paused());
                        }
                        true
                    }
                    PhysicalKey::Code(KeyCode::KeyC) => { self.session.clear(); true }
                    PhysicalKey::Code(KeyCode::Escape) => { self.exit_requested = true; true }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

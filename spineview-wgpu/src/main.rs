use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use spineview::{
    AABB_COLOR, Aabb, Actor, ActorSettings, DebugLines, DrawList, LoadOptions, ORIGIN_COLOR,
    SkeletonBundle, atlas_is_pma, clip_from_world_centered, clip_from_world_fit,
    draw_list_bounds,
};
use spineview_wgpu::{LineRenderer, MeshRenderer, TextureStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Windowed viewer for Spine skeleton exports.
#[derive(Parser, Debug)]
#[command(name = "spineview", version)]
struct Cli {
    /// Skeleton export file (.json or .skel).
    skeleton: PathBuf,

    /// Atlas file; defaults to a sibling of the skeleton file.
    #[arg(long)]
    atlas: Option<PathBuf>,

    /// Animation for track 0; defaults to idle/walk/run or the first one.
    #[arg(long)]
    animation: Option<String>,

    /// Skin to apply.
    #[arg(long)]
    skin: Option<String>,

    /// Loader scale applied while parsing the skeleton.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Playback speed factor.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Default crossfade between animations, seconds.
    #[arg(long, default_value_t = 0.2)]
    mix: f32,

    /// Skeleton world X position.
    #[arg(long, default_value_t = 0.0)]
    x: f32,

    /// Skeleton world Y position.
    #[arg(long, default_value_t = 0.0)]
    y: f32,

    /// Fraction of the viewport the skeleton may cover.
    #[arg(long, default_value_t = 0.9)]
    margin: f32,

    /// Premultiplied alpha: detect from the atlas file name, or force it.
    #[arg(long, value_enum, default_value_t = PmaMode::Auto)]
    pma: PmaMode,

    /// Start with the debug overlay (bones, bounds, origin) visible.
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum PmaMode {
    /// Premultiplied when the atlas file stem carries a `pma` part.
    Auto,
    On,
    Off,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = LoadOptions {
        scale: cli.scale,
        default_mix: cli.mix,
        atlas: cli.atlas.clone(),
        prefer_pma_atlas: cli.pma != PmaMode::Off,
    };
    let bundle = SkeletonBundle::load(&cli.skeleton, &options)
        .with_context(|| format!("loading {}", cli.skeleton.display()))?;

    let premultiplied_alpha = match cli.pma {
        PmaMode::Auto => atlas_is_pma(&bundle.atlas_path),
        PmaMode::On => true,
        PmaMode::Off => false,
    };
    log::info!("premultiplied alpha: {premultiplied_alpha}");

    let actor = Actor::new(
        &bundle,
        &ActorSettings {
            position: [cli.x, cli.y],
            premultiplied_alpha,
            skin: cli.skin.clone(),
            animation: cli.animation.clone(),
            looping: true,
        },
    )?;

    let title = format!(
        "spineview - {}",
        cli.skeleton
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.skeleton.display().to_string())
    );

    let mut app = App {
        bundle,
        actor,
        draw_list: DrawList::default(),
        debug_lines: DebugLines::default(),
        fit_bounds: None,
        last_frame: None,
        gpu: None,
        title,
        speed: cli.speed,
        margin: cli.margin,
        show_debug: cli.debug,
        paused: false,
    };

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.run_app(&mut app).context("running event loop")?;
    Ok(())
}

struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_renderer: MeshRenderer,
    line_renderer: LineRenderer,
    textures: TextureStore,
}

struct App {
    // Owns the atlas; must outlive every draw list that references its pages.
    #[allow(dead_code)]
    bundle: SkeletonBundle,
    actor: Actor,
    draw_list: DrawList,
    debug_lines: DebugLines,
    fit_bounds: Option<Aabb>,
    last_frame: Option<Instant>,
    gpu: Option<GpuState>,
    title: String,
    speed: f32,
    margin: f32,
    show_debug: bool,
    paused: bool,
}

impl App {
    fn refit(&mut self) {
        let Some(gpu) = self.gpu.as_ref() else {
            return;
        };
        let clip_from_world = match self.fit_bounds {
            Some(bounds) => {
                clip_from_world_fit(bounds, gpu.config.width, gpu.config.height, self.margin)
            }
            None => {
                clip_from_world_centered(gpu.config.width as f32, gpu.config.height as f32)
            }
        };
        gpu.mesh_renderer.set_clip_from_world(&gpu.queue, clip_from_world);
        gpu.line_renderer.set_clip_from_world(&gpu.queue, clip_from_world);
    }

    fn rebuild_draw_list(&mut self) {
        self.draw_list.clear();
        self.actor.append_draw_list(&mut self.draw_list);
        if self.fit_bounds.is_none() {
            // First posed frame fixes the camera; refit happens on resize
            // only, so the view does not swim while the animation plays.
            self.fit_bounds = draw_list_bounds(&self.draw_list);
            self.refit();
        }
    }

    fn rebuild_debug_lines(&mut self) {
        self.debug_lines.clear();
        if !self.show_debug {
            return;
        }
        self.actor.append_bone_lines(&mut self.debug_lines);
        if let Some(bounds) = draw_list_bounds(&self.draw_list) {
            self.debug_lines.push_rect(bounds, AABB_COLOR);
        }
        self.debug_lines
            .push_cross(self.actor.position(), 8.0, ORIGIN_COLOR);
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0)
            .min(1.0 / 15.0);
        self.last_frame = Some(now);

        if !self.paused {
            self.actor.update(dt * self.speed);
            self.rebuild_draw_list();
        }
        self.rebuild_debug_lines();

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        // Pages that fail to load are skipped; the rest keep rendering.
        gpu.textures.prepare(
            &gpu.device,
            &gpu.queue,
            gpu.mesh_renderer.texture_bind_group_layout(),
            &self.draw_list,
        );

        gpu.mesh_renderer
            .upload(&gpu.device, &gpu.queue, &self.draw_list);
        gpu.line_renderer
            .upload(&gpu.device, &gpu.queue, &self.debug_lines);

        let frame = match gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("surface lost ({e}), reconfiguring");
                gpu.surface.configure(&gpu.device, &gpu.config);
                gpu.window.request_redraw();
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.12,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            gpu.mesh_renderer
                .render(&mut pass, &self.draw_list, &gpu.textures);
            if self.show_debug {
                gpu.line_renderer.render(&mut pass);
            }
        }

        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        gpu.window.request_redraw();
    }

    fn handle_key(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match event.logical_key {
            Key::Named(NamedKey::Space) => {
                if let Err(e) = self.actor.cycle_animation() {
                    log::warn!("{e}");
                }
            }
            Key::Character(ref c) if c == "d" || c == "D" => {
                self.show_debug = !self.show_debug;
            }
            Key::Character(ref c) if c == "p" || c == "P" => {
                self.paused = !self.paused;
                // Avoid a catch-up jump on the frame after unpausing.
                self.last_frame = None;
            }
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match init_gpu(event_loop, &self.title) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
            }
            Err(e) => {
                log::error!("{e:#}");
                event_loop.exit();
                return;
            }
        }

        // Pose once before the first frame so the camera can fit the
        // skeleton's actual extents instead of the setup pose origin.
        self.actor.update(0.0);
        self.rebuild_draw_list();
        self.refit();
        if let Some(gpu) = self.gpu.as_ref() {
            gpu.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.config.width = size.width.max(1);
                    gpu.config.height = size.height.max(1);
                    gpu.surface.configure(&gpu.device, &gpu.config);
                }
                self.refit();
                if let Some(gpu) = self.gpu.as_ref() {
                    gpu.window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }
}

fn init_gpu(event_loop: &ActiveEventLoop, title: &str) -> anyhow::Result<GpuState> {
    let window = Arc::new(
        event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(title)
                    .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0)),
            )
            .context("creating window")?,
    );

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let surface = instance
        .create_surface(window.clone())
        .context("creating surface")?;
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .context("requesting adapter")?;
    let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("spineview device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::default(),
        experimental_features: Default::default(),
        memory_hints: wgpu::MemoryHints::Performance,
        trace: Default::default(),
    }))
    .context("requesting device")?;

    let size = window.inner_size();
    let caps = surface.get_capabilities(&adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(caps.formats[0]);
    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    let mesh_renderer = MeshRenderer::new(&device, format);
    let line_renderer = LineRenderer::new(&device, format);

    Ok(GpuState {
        window,
        surface,
        device,
        queue,
        config,
        mesh_renderer,
        line_renderer,
        textures: TextureStore::new(),
    })
}

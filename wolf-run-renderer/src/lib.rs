use std::time::{Duration, Instant};

use clock::{Clock, FrameTimer};
use winit::{
    error::EventLoopError,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use wolf_run_game::{Command, Game, Phase, FRAMES_PER_SECOND};

pub use error::Error;
use sprite_renderer::{SpriteBatch, SpriteRenderer};
use text_renderer::TextRenderer;

pub mod assets;
pub mod clock;

mod error;
mod sprite_renderer;
mod text_renderer;
mod texture;

pub struct State<'a, C: Clock> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    window: &'a Window,
    sprite_renderer: SpriteRenderer,
    text_renderer: TextRenderer,
    batch: SpriteBatch,
    game: Game,
    frame_timer: FrameTimer<C>,
}

impl<'a, C: Clock> State<'a, C> {
    pub async fn new(
        window: &'a Window,
        backends: wgpu::Backends,
        clock: C,
        assets: &assets::Assets,
    ) -> Result<Self, Error> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Error::NoAdapter)?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: adapter.limits(),
                    label: None,
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        if size.width > 0 && size.height > 0 {
            surface.configure(&device, &config);
        }

        let sprite_renderer = SpriteRenderer::new(&device, &queue, config.format, assets);
        let text_renderer = TextRenderer::new(&device, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            sprite_renderer,
            text_renderer,
            batch: SpriteBatch::new(),
            game: Game::new(),
            frame_timer: FrameTimer::new(clock, FRAMES_PER_SECOND),
        })
    }

    pub fn run(&mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, control_flow| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == self.window.id() => {
                if !self.input(event) {
                    match event {
                        WindowEvent::CloseRequested => self.game.handle(Command::Quit),
                        WindowEvent::Resized(physical_size) => self.resize(*physical_size),
                        WindowEvent::RedrawRequested => {
                            self.update();
                            match self.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    self.resize(self.size);
                                }
                                Err(
                                    wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other,
                                ) => {
                                    log::error!("OutOfMemory");
                                    control_flow.exit();
                                }
                                Err(wgpu::SurfaceError::Timeout) => {
                                    log::warn!("Surface timeout")
                                }
                            }
                        }
                        _ => {}
                    }
                }

                if self.game.phase() == Phase::Terminated {
                    log::info!("Quitting");
                    control_flow.exit();
                }
            }
            Event::AboutToWait => {
                let wait = self.frame_timer.seconds_until_next_frame();
                if wait > 0.0 {
                    control_flow.set_control_flow(ControlFlow::WaitUntil(
                        Instant::now() + Duration::from_secs_f32(wait),
                    ));
                } else {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => match command_for_key(self.game.phase(), *key) {
                Some(command) => {
                    self.game.handle(command);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn update(&mut self) {
        for _ in 0..self.frame_timer.tick() {
            self.game.update();
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Ok(());
        }

        self.game.draw(&mut self.batch);
        self.sprite_renderer
            .prepare(&self.device, &self.queue, &self.batch);

        let output = self.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let text_commands = self.text_renderer.prepare(
            &self.device,
            &self.queue,
            &mut encoder,
            self.batch.labels(),
            self.size,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.batch.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.sprite_renderer.render(&mut render_pass);
        }

        {
            let mut text_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Text Render Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.text_renderer.render(&mut text_pass);
        }

        self.queue
            .submit(text_commands.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}

/// Space starts a run from the start screen and jumps during play.
pub fn command_for_key(phase: Phase, key: KeyCode) -> Option<Command> {
    match (phase, key) {
        (Phase::StartScreen, KeyCode::Space) => Some(Command::Start),
        (Phase::Playing, KeyCode::Space) => Some(Command::Jump),
        (_, KeyCode::KeyR) => Some(Command::Restart),
        (_, KeyCode::KeyQ) => Some(Command::Quit),
        _ => None,
    }
}

use anyhow::Context;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

use wolf_run_game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use wolf_run_renderer::{
    assets::{Assets, ASSET_ROOT},
    State,
};

#[pollster::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let assets = Assets::load(ASSET_ROOT).context("Couldn't load game assets")?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Wolf Run")
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut state = State::new(&window, wgpu::Backends::all(), Clock, &assets)
        .await
        .context("Couldn't initialize renderer")?;
    drop(assets);

    log::info!("Wolf Run started");
    state.run(event_loop)?;

    Ok(())
}

struct Clock;

impl wolf_run_renderer::clock::Clock for Clock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn seconds_elapsed(&self, start: Self::Instant, end: Self::Instant) -> f32 {
        let duration = end.duration_since(start);
        duration.as_secs_f32()
    }
}

use anyhow::Result;
use log::info;
use rand::Rng;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::StaticCatalog;
use engine::audio::NullAudio;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use game::session::GameSession;
use game::stats::{STAGE_HEIGHT, STAGE_WIDTH};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Forest Fray...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Forest Fray")
        .with_inner_size(winit::dpi::LogicalSize::new(
            STAGE_WIDTH as u32,
            STAGE_HEIGHT as u32,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let seed: u64 = rand::rng().random();
    let mut session = GameSession::new(
        Box::new(StaticCatalog::forest_defaults()),
        Box::new(NullAudio),
        seed,
    );
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput {
                        event: key_event, ..
                    },
                    ..
                } => {
                    input.process_key_event(&key_event);
                }
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    // The renderer binds to the per-frame snapshot here
                    let _snapshot = session.snapshot();
                    window.request_redraw();
                }
                Event::AboutToWait => {
                    let ticks = game_loop.begin_frame();
                    for _ in 0..ticks {
                        session.update(&input.frame_input());
                        input.end_frame();
                    }

                    if game_loop.frame_count() % 600 == 0 {
                        log::debug!("fps: {:.1}", game_loop.fps());
                    }

                    if session.exit_requested() {
                        info!("Exit requested, shutting down...");
                        elwt.exit();
                    }

                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

use std::time::{Duration, Instant};

use chrono::Local;
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::render::BlendMode;

mod art;
mod draw;
mod game;
mod gui;
mod input_system;
mod modes;
mod save;
mod settings;
mod stats;
mod text;
mod ui;

use game::GameWorld;
use input_system::{GameAction, InputSystem};
use save::SaveManager;

// Logical canvas; SDL scales it up to the window
const GAME_WIDTH: u32 = 320;
const GAME_HEIGHT: u32 = 240;
const FALLBACK_SCALE: u32 = 3;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / GAME_WIDTH as i32).min(usable_h / GAME_HEIGHT as i32);

            // Clamp to reasonable range (2x minimum, 6x maximum)
            scale.clamp(2, 6) as u32
        }
        Err(e) => {
            warn!("Could not detect monitor size ({}), using {}x scale", e, FALLBACK_SCALE);
            FALLBACK_SCALE
        }
    }
}

/// Open the save directory, falling back to the working directory
fn open_storage() -> Result<SaveManager, String> {
    let preferred = SaveManager::default_directory();
    SaveManager::new(&preferred)
        .or_else(|e| {
            warn!("Cannot use {} ({}), saving to the working directory", preferred.display(), e);
            SaveManager::new(".")
        })
        .map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;
    info!("Monitor scale: {}x (window: {}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Panda Desk", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let mut event_pump = sdl_context.event_pump()?;

    let storage = open_storage()?;
    info!("Save directory: {}", storage.save_directory().display());

    let mut world = GameWorld::new(
        storage,
        Local::now().date_naive(),
        Instant::now(),
        StdRng::from_entropy(),
    );
    let mut input = InputSystem::new();

    'running: loop {
        input.update_context(world.mode);
        let actions = input.poll_events(&mut event_pump);
        if actions.contains(&GameAction::Quit) {
            break 'running;
        }

        world.update(&actions, Instant::now(), Local::now().date_naive());
        world.render(&mut canvas)?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    world.shutdown();
    Ok(())
}

mod config;
mod game;
mod input;
mod protocol;
mod theme;

use tokio::time::{interval, Duration};
use tracing::debug;

use crate::config::*;
use crate::game::engine;
use crate::input::Viewport;
use crate::theme::Theme;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let theme = Theme::load("theme.json");
    let viewport = Viewport::default();

    // Create game world
    let world = engine::create_world();
    println!(
        "✅ World created ({}x{}, {} enemies, {} food)",
        MAP_SIZE, MAP_SIZE, ENEMY_COUNT, FOOD_COUNT
    );

    // Pointer snapshot the host updates; starts centered (no movement).
    let pointer = input::create_input(viewport);

    // Stand-in for the external renderer: read a frame snapshot once per
    // second and log a summary of it.
    let frame_world = world.clone();
    let frame_theme = theme.clone();
    tokio::spawn(async move {
        let mut frame_interval = interval(Duration::from_secs(1));
        loop {
            frame_interval.tick().await;
            let w = frame_world.read().await;
            let frame = engine::build_frame(&w, viewport, &frame_theme);
            debug!(
                tick = w.tick_count,
                enemies = frame.enemies.len(),
                food = frame.food.len(),
                radius = frame.player.radius,
                "frame ready"
            );
        }
    });

    println!("✅ Game loop running at {} TPS", TICK_RATE);
    engine::game_loop(world, pointer, viewport, theme).await;
}

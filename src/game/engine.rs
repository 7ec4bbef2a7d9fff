use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};
use tracing::info;

use crate::config::*;
use crate::game::world::{SessionStatus, World};
use crate::input::{SharedInput, Viewport};
use crate::protocol::messages::*;
use crate::theme::Theme;

pub type SharedWorld = Arc<RwLock<World>>;

pub fn create_world() -> SharedWorld {
    Arc::new(RwLock::new(World::new()))
}

/// Drive the simulation at a fixed tick rate. Each pass samples the latest
/// pointer snapshot, advances the world once, and starts a fresh session
/// after a game over.
pub async fn game_loop(world: SharedWorld, input: SharedInput, viewport: Viewport, theme: Theme) {
    let mut tick_interval = interval(Duration::from_millis(TICK_DURATION_MS));

    loop {
        tick_interval.tick().await;
        let pointer = *input.read().await;
        let (steer_x, steer_y) = pointer.offset_from_center(viewport);

        let mut w = world.write().await;
        w.tick(steer_x, steer_y, &theme);

        if w.status == SessionStatus::GameOver {
            info!(
                ticks = w.tick_count,
                radius = w.player.radius,
                "game over: the player was eaten, restarting"
            );
            w.reset();
        }
    }
}

/// Assemble the read-only render snapshot of the post-tick state. The camera
/// offset translates the map so the player lands at the viewport center.
pub fn build_frame(world: &World, viewport: Viewport, theme: &Theme) -> FrameState {
    let player = &world.player;

    FrameState {
        player: PlayerState {
            x: player.x,
            y: player.y,
            radius: player.radius,
            color: player.color.clone(),
        },
        enemies: world
            .enemies
            .iter()
            .map(|e| EnemyState {
                x: e.x,
                y: e.y,
                radius: e.radius,
                color: e.color.clone(),
            })
            .collect(),
        food: world
            .foods
            .iter()
            .map(|f| FoodState {
                x: f.x,
                y: f.y,
                radius: f.radius,
                color: f.color.clone(),
            })
            .collect(),
        camera: CameraOffset {
            x: viewport.width / 2.0 - player.x,
            y: viewport.height / 2.0 - player.y,
        },
        background: theme.background.clone(),
    }
}

use crate::config::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_speed: f64,
    pub color: String,
}

impl Player {
    /// Spawn the player at the map center with the starting radius.
    pub fn new() -> Self {
        Player {
            x: MAP_SIZE / 2.0,
            y: MAP_SIZE / 2.0,
            radius: PLAYER_START_RADIUS,
            base_speed: PLAYER_BASE_SPEED,
            color: String::new(),
        }
    }

    /// Derived speed, recomputed from the radius on every read.
    pub fn speed(&self) -> f64 {
        speed_for_radius(self.base_speed, self.radius)
    }
}

// Map constants
pub const MAP_SIZE: f64 = 5000.0;
pub const TICK_RATE: u64 = 60; // simulation ticks per second
pub const TICK_DURATION_MS: u64 = 1000 / TICK_RATE;

// Player constants
pub const PLAYER_START_RADIUS: f64 = 30.0;
pub const PLAYER_BASE_SPEED: f64 = 5.0;

// Enemy constants
pub const ENEMY_COUNT: usize = 500;
pub const ENEMY_MIN_RADIUS: f64 = 15.0;
pub const ENEMY_MAX_RADIUS: f64 = 30.0;
pub const ENEMY_MIN_BASE_SPEED: f64 = 2.0;
pub const ENEMY_MAX_BASE_SPEED: f64 = 3.0;

// Food constants
pub const FOOD_COUNT: usize = 200;
pub const FOOD_RADIUS: f64 = 5.0;

// Consumption tuning. Predation needs the center distance below the eater's
// radius minus this margin; food only needs to be inside the player's radius.
pub const EAT_MARGIN: f64 = 5.0;
pub const FOOD_GROWTH: f64 = 1.0;
pub const ENEMY_GROWTH: f64 = 5.0;

// Default viewport (the host may supply its own)
pub const VIEWPORT_WIDTH: f64 = 1280.0;
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// Helper: derived speed for a circle of the given radius
pub fn speed_for_radius(base_speed: f64, radius: f64) -> f64 {
    base_speed / (radius / 10.0)
}

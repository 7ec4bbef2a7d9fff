use serde::Serialize;

// ── Simulation → Renderer ──

/// One render snapshot, read after each tick. The renderer draws it and must
/// never write back.
#[derive(Debug, Serialize, Clone)]
pub struct FrameState {
    pub player: PlayerState,
    pub enemies: Vec<EnemyState>,
    pub food: Vec<FoodState>,
    pub camera: CameraOffset,
    pub background: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct EnemyState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct FoodState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

/// Translation that puts the player at the viewport center.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct CameraOffset {
    pub x: f64,
    pub y: f64,
}

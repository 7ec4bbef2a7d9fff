use std::collections::HashMap;

use tracing::warn;

pub const DEFAULT_PLAYER_COLOR: &str = "rgb(255, 255, 255)";
pub const DEFAULT_ENEMY_COLOR: &str = "rgb(0, 255, 0)";
pub const DEFAULT_FOOD_COLOR: &str = "rgb(255, 255, 255)";
pub const DEFAULT_BACKGROUND_COLOR: &str = "rgb(0, 0, 0)";

/// The four display colors the renderer needs. Colors are opaque strings to
/// the simulation; they only ever land on entities as display metadata.
#[derive(Debug, Clone)]
pub struct Theme {
    pub player: String,
    pub enemy: String,
    pub food: String,
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            player: DEFAULT_PLAYER_COLOR.to_string(),
            enemy: DEFAULT_ENEMY_COLOR.to_string(),
            food: DEFAULT_FOOD_COLOR.to_string(),
            background: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl Theme {
    /// Resolve the theme from a named color lookup. Missing or blank entries
    /// fall back to the defaults.
    pub fn from_lookup(lookup: &HashMap<String, String>) -> Self {
        let pick = |name: &str, default: &str| {
            lookup
                .get(name)
                .map(|color| color.trim().to_string())
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Theme {
            player: pick("player-color", DEFAULT_PLAYER_COLOR),
            enemy: pick("enemy-color", DEFAULT_ENEMY_COLOR),
            food: pick("food-color", DEFAULT_FOOD_COLOR),
            background: pick("background-color", DEFAULT_BACKGROUND_COLOR),
        }
    }

    /// Load a theme from a JSON color map on disk. A missing file is normal
    /// (defaults apply); a malformed one is reported and ignored.
    pub fn load(path: &str) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Theme::default(),
        };
        match serde_json::from_str::<HashMap<String, String>>(&text) {
            Ok(lookup) => Theme::from_lookup(&lookup),
            Err(err) => {
                warn!(%err, path, "ignoring malformed theme file");
                Theme::default()
            }
        }
    }
}

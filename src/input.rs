use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::*;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Latest pointer position in viewport coordinates. The host writes it at
/// whatever rate it samples events; the simulation reads it once per tick,
/// so the last write before a tick wins.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// Starting position: the viewport center, which steers nowhere.
    pub fn centered(viewport: Viewport) -> Self {
        Pointer {
            x: viewport.width / 2.0,
            y: viewport.height / 2.0,
        }
    }

    /// Offset from the viewport center, the player's steering vector.
    pub fn offset_from_center(&self, viewport: Viewport) -> (f64, f64) {
        (
            self.x - viewport.width / 2.0,
            self.y - viewport.height / 2.0,
        )
    }
}

pub type SharedInput = Arc<RwLock<Pointer>>;

pub fn create_input(viewport: Viewport) -> SharedInput {
    Arc::new(RwLock::new(Pointer::centered(viewport)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_steers_nowhere() {
        let viewport = Viewport {
            width: 640.0,
            height: 480.0,
        };
        let pointer = Pointer::centered(viewport);
        assert_eq!(pointer.offset_from_center(viewport), (0.0, 0.0));
    }

    #[test]
    fn offset_is_relative_to_the_viewport_center() {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let pointer = Pointer { x: 500.0, y: 150.0 };
        assert_eq!(pointer.offset_from_center(viewport), (100.0, -150.0));
    }
}

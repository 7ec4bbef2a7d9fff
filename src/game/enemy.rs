use crate::config::*;
use crate::game::ai::Target;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_speed: f64,
    pub color: String,
    /// Chase target for the current tick. Index handles are only valid until
    /// the removal phases run; targeting rewrites this every tick.
    pub target: Option<Target>,
}

impl Enemy {
    pub fn new(x: f64, y: f64, radius: f64, base_speed: f64) -> Self {
        Enemy {
            x,
            y,
            radius,
            base_speed,
            color: String::new(),
            target: None,
        }
    }

    /// Spawn an enemy at a random map position with randomized size and pace.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Enemy::new(
            rng.gen_range(0.0..MAP_SIZE),
            rng.gen_range(0.0..MAP_SIZE),
            rng.gen_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS),
            rng.gen_range(ENEMY_MIN_BASE_SPEED..ENEMY_MAX_BASE_SPEED),
        )
    }

    pub fn speed(&self) -> f64 {
        speed_for_radius(self.base_speed, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_spawns_within_configured_ranges() {
        for _ in 0..100 {
            let enemy = Enemy::random();
            assert!(enemy.x >= 0.0 && enemy.x < MAP_SIZE);
            assert!(enemy.y >= 0.0 && enemy.y < MAP_SIZE);
            assert!(enemy.radius >= ENEMY_MIN_RADIUS && enemy.radius < ENEMY_MAX_RADIUS);
            assert!(enemy.base_speed >= ENEMY_MIN_BASE_SPEED);
            assert!(enemy.base_speed < ENEMY_MAX_BASE_SPEED);
            assert!(enemy.target.is_none());
        }
    }

    #[test]
    fn speed_uses_the_shared_formula() {
        let enemy = Enemy::new(0.0, 0.0, 20.0, 2.0);
        assert!((enemy.speed() - 1.0).abs() < 1e-9);
    }
}

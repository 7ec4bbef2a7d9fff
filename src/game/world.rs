use crate::config::*;
use crate::game::ai::{self, Target};
use crate::game::enemy::Enemy;
use crate::game::food::Food;
use crate::game::physics;
use crate::game::player::Player;
use crate::theme::Theme;

/// Session state machine. GameOver is terminal; the driver resets the whole
/// world to leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    GameOver,
}

pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub foods: Vec<Food>,
    pub status: SessionStatus,
    pub tick_count: u64,
}

impl World {
    pub fn new() -> Self {
        let mut enemies = Vec::with_capacity(ENEMY_COUNT);
        for _ in 0..ENEMY_COUNT {
            enemies.push(Enemy::random());
        }
        // Food is a finite resource: spawned once, never replenished.
        let mut foods = Vec::with_capacity(FOOD_COUNT);
        for _ in 0..FOOD_COUNT {
            foods.push(Food::random());
        }
        World {
            player: Player::new(),
            enemies,
            foods,
            status: SessionStatus::Running,
            tick_count: 0,
        }
    }

    /// Restore the initial conditions for a fresh session.
    pub fn reset(&mut self) {
        *self = World::new();
    }

    /// Advance the simulation by one step. `steer_x`/`steer_y` is the pointer
    /// offset from the viewport center, sampled by the driver this tick.
    pub fn tick(&mut self, steer_x: f64, steer_y: f64, theme: &Theme) {
        if self.status != SessionStatus::Running {
            return;
        }
        self.tick_count += 1;

        self.apply_theme(theme);
        self.move_player(steer_x, steer_y);
        self.retarget_enemies();
        self.move_enemies();
        self.check_food_eating();
        self.check_player_eating();
        if self.status == SessionStatus::GameOver {
            // The player was eaten mid-resolution; the rest of the tick is moot.
            return;
        }
        self.check_enemy_eating();
    }

    // Refresh display colors from the current theme. Display metadata only,
    // no effect on simulation rules.
    fn apply_theme(&mut self, theme: &Theme) {
        self.player.color = theme.player.clone();
        for enemy in &mut self.enemies {
            enemy.color = theme.enemy.clone();
        }
        for food in &mut self.foods {
            food.color = theme.food.clone();
        }
    }

    // The pointer offset is a direction, not a destination. The player moves
    // one full step along it unless the offset is within one step of center.
    fn move_player(&mut self, steer_x: f64, steer_y: f64) {
        let dist = (steer_x * steer_x + steer_y * steer_y).sqrt();
        let speed = self.player.speed();
        if dist > speed {
            let (nx, ny) = physics::normalize(steer_x, steer_y);
            self.player.x += nx * speed;
            self.player.y += ny * speed;
        }
    }

    // Recompute every enemy's chase target. Stale targets are never reused;
    // the collection does not mutate between here and the movement phase, so
    // the index handles stay valid.
    fn retarget_enemies(&mut self) {
        let targets: Vec<Option<Target>> = (0..self.enemies.len())
            .map(|i| ai::find_target(i, &self.player, &self.enemies))
            .collect();
        for (enemy, target) in self.enemies.iter_mut().zip(targets) {
            enemy.target = target;
        }
    }

    fn move_enemies(&mut self) {
        let goals: Vec<Option<(f64, f64)>> = self
            .enemies
            .iter()
            .map(|enemy| match enemy.target {
                Some(Target::Player) => Some((self.player.x, self.player.y)),
                Some(Target::Enemy(j)) => Some((self.enemies[j].x, self.enemies[j].y)),
                None => None,
            })
            .collect();

        for (enemy, goal) in self.enemies.iter_mut().zip(goals) {
            let (gx, gy) = match goal {
                Some(g) => g,
                None => continue, // nothing worth chasing this tick
            };
            let speed = enemy.speed();
            if physics::distance(enemy.x, enemy.y, gx, gy) > speed {
                let (nx, ny) = physics::direction(enemy.x, enemy.y, gx, gy);
                enemy.x += nx * speed;
                enemy.y += ny * speed;
            }
        }
    }

    // Food pickup. Reverse index order so swap_remove never skips an entry;
    // radius gained from one food already counts for the next check.
    fn check_food_eating(&mut self) {
        for i in (0..self.foods.len()).rev() {
            let food = &self.foods[i];
            if physics::distance(food.x, food.y, self.player.x, self.player.y) < self.player.radius
            {
                self.foods.swap_remove(i);
                self.player.radius += FOOD_GROWTH;
            }
        }
    }

    // Player-versus-enemy resolution. The player-wins branch must be checked
    // first; an enemy win ends the session on the spot and leaves the
    // remaining entries untouched.
    fn check_player_eating(&mut self) {
        for i in (0..self.enemies.len()).rev() {
            let dist = physics::distance(
                self.enemies[i].x,
                self.enemies[i].y,
                self.player.x,
                self.player.y,
            );
            if dist < self.player.radius - EAT_MARGIN {
                self.enemies.swap_remove(i);
                self.player.radius += ENEMY_GROWTH;
            } else if dist < self.enemies[i].radius - EAT_MARGIN {
                self.status = SessionStatus::GameOver;
                return;
            }
        }
    }

    // Enemy-versus-enemy resolution over all ordered pairs. Kills are marked
    // rather than removed so the double scan keeps stable indices; an eater's
    // growth is visible to its later pairings, which allows multi-kill chains
    // inside a single tick.
    fn check_enemy_eating(&mut self) {
        let count = self.enemies.len();
        let mut alive = vec![true; count];

        for i in (0..count).rev() {
            for j in (0..count).rev() {
                if i == j || !alive[i] || !alive[j] {
                    continue;
                }
                let dist = physics::distance(
                    self.enemies[i].x,
                    self.enemies[i].y,
                    self.enemies[j].x,
                    self.enemies[j].y,
                );
                if dist < self.enemies[i].radius - EAT_MARGIN {
                    self.enemies[i].radius += self.enemies[j].radius / 2.0;
                    alive[j] = false;
                }
            }
        }

        let mut idx = 0;
        self.enemies.retain(|_| {
            let keep = alive[idx];
            idx += 1;
            keep
        });
    }
}

use crate::game::enemy::Enemy;
use crate::game::physics;
use crate::game::player::Player;

/// Non-owning handle to a chase target. Indices are only valid for the tick
/// they were computed in; targeting runs before any removal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Player,
    Enemy(usize),
}

/// Pick the nearest candidate the hunter is strictly larger than, or none.
/// The player is checked before the enemy collection, so it wins an exact
/// distance tie.
pub fn find_target(hunter_idx: usize, player: &Player, enemies: &[Enemy]) -> Option<Target> {
    let hunter = &enemies[hunter_idx];
    let mut closest: Option<Target> = None;
    let mut closest_dist = f64::INFINITY;

    if hunter.radius > player.radius {
        closest = Some(Target::Player);
        closest_dist = physics::distance(hunter.x, hunter.y, player.x, player.y);
    }

    for (i, other) in enemies.iter().enumerate() {
        if i == hunter_idx || other.radius >= hunter.radius {
            continue;
        }
        let dist = physics::distance(hunter.x, hunter.y, other.x, other.y);
        if dist < closest_dist {
            closest = Some(Target::Enemy(i));
            closest_dist = dist;
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f64, y: f64, radius: f64) -> Player {
        let mut player = Player::new();
        player.x = x;
        player.y = y;
        player.radius = radius;
        player
    }

    #[test]
    fn ignores_candidates_it_cannot_eat() {
        let player = player_at(10.0, 0.0, 50.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 20.0, 2.0),
            Enemy::new(5.0, 0.0, 20.0, 2.0), // equal radius, not valid
            Enemy::new(8.0, 0.0, 25.0, 2.0), // larger, not valid
        ];
        assert_eq!(find_target(0, &player, &enemies), None);
    }

    #[test]
    fn picks_the_nearest_smaller_enemy() {
        let player = player_at(1000.0, 1000.0, 50.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 25.0, 2.0),
            Enemy::new(100.0, 0.0, 10.0, 2.0),
            Enemy::new(30.0, 0.0, 10.0, 2.0),
        ];
        assert_eq!(find_target(0, &player, &enemies), Some(Target::Enemy(2)));
    }

    #[test]
    fn prefers_the_player_when_closest() {
        let player = player_at(10.0, 0.0, 15.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 25.0, 2.0),
            Enemy::new(200.0, 0.0, 10.0, 2.0),
        ];
        assert_eq!(find_target(0, &player, &enemies), Some(Target::Player));
    }

    #[test]
    fn player_wins_an_exact_distance_tie() {
        let player = player_at(50.0, 0.0, 15.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 25.0, 2.0),
            Enemy::new(-50.0, 0.0, 10.0, 2.0), // same distance as the player
        ];
        assert_eq!(find_target(0, &player, &enemies), Some(Target::Player));
    }

    #[test]
    fn first_seen_enemy_wins_an_exact_distance_tie() {
        let player = player_at(5000.0, 5000.0, 50.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 25.0, 2.0),
            Enemy::new(60.0, 0.0, 10.0, 2.0),
            Enemy::new(-60.0, 0.0, 10.0, 2.0),
        ];
        assert_eq!(find_target(0, &player, &enemies), Some(Target::Enemy(1)));
    }

    #[test]
    fn never_targets_itself() {
        let player = player_at(9000.0, 9000.0, 500.0);
        let enemies = vec![Enemy::new(0.0, 0.0, 20.0, 2.0)];
        assert_eq!(find_target(0, &player, &enemies), None);
    }

    #[test]
    fn target_radius_is_always_strictly_smaller() {
        let player = player_at(40.0, 0.0, 18.0);
        let enemies = vec![
            Enemy::new(0.0, 0.0, 19.0, 2.0),
            Enemy::new(10.0, 0.0, 19.0, 2.0),
            Enemy::new(20.0, 0.0, 18.5, 2.0),
        ];
        match find_target(0, &player, &enemies) {
            Some(Target::Player) => assert!(player.radius < enemies[0].radius),
            Some(Target::Enemy(i)) => assert!(enemies[i].radius < enemies[0].radius),
            None => {}
        }
        // radius 19 hunter: player (18) at distance 40, enemy 2 (18.5) at 20
        assert_eq!(find_target(0, &player, &enemies), Some(Target::Enemy(2)));
    }
}

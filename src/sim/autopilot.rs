//! Idle/demo mode - the ship flies itself
//!
//! Produces a `TickInput` from the current state, so the demo runs through
//! exactly the same simulation path as a human player.

use super::state::SessionState;
use super::tick::TickInput;
use crate::consts::PLAYER_SPAWN_OFFSET;

/// Horizontal dead zone so the ship doesn't jitter around its target
const DEAD_ZONE: f32 = 6.0;

pub fn autopilot(state: &SessionState) -> TickInput {
    let player = &state.player;
    let home_y = state.bounds.height - PLAYER_SPAWN_OFFSET;

    // Go grab the nearest pickup, otherwise line up under the lowest enemy
    let target_x = state
        .pickups
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.pos.x)
        .or_else(|| {
            state
                .enemies
                .iter()
                .filter(|e| e.pos.y < player.pos.y)
                .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(std::cmp::Ordering::Equal))
                .map(|e| e.pos.x)
        });

    let dx = target_x.map(|x| x - player.pos.x).unwrap_or(0.0);
    let dy = home_y - player.pos.y;

    TickInput {
        left: dx < -DEAD_ZONE,
        right: dx > DEAD_ZONE,
        up: dy < -player.speed,
        down: dy > player.speed,
        fire: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::character::CharacterKey;
    use crate::sim::entities::{Enemy, EnemyKind, Pickup};
    use crate::sim::powerups::PowerupKind;
    use crate::sim::tick::{TickOutcome, tick};
    use glam::Vec2;

    fn state() -> SessionState {
        SessionState::new(CharacterKey::Nova, 1, &Settings::default())
    }

    #[test]
    fn test_idle_holds_fire() {
        let input = autopilot(&state());
        assert!(input.fire);
        assert!(!input.left && !input.right && !input.up && !input.down);
    }

    #[test]
    fn test_tracks_lowest_enemy() {
        let mut s = state();
        s.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(100.0, 50.0)));
        s.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(700.0, 200.0)));
        let input = autopilot(&s);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_prefers_pickups() {
        let mut s = state();
        s.enemies.push(Enemy::new(EnemyKind::Basic, Vec2::new(700.0, 200.0)));
        s.pickups.push(Pickup::with_kind(Vec2::new(100.0, 300.0), PowerupKind::RapidFire));
        let input = autopilot(&s);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_returns_home_row() {
        let mut s = state();
        s.player.pos.y = 100.0;
        assert!(autopilot(&s).down);
    }

    #[test]
    fn test_demo_run_scores() {
        let mut s = state();
        for _ in 0..3600 {
            let input = autopilot(&s);
            if tick(&mut s, &input) == TickOutcome::PlayerDefeated {
                break;
            }
        }
        assert!(s.score > 0);
    }
}

//! Enemy spawning
//!
//! All rolls draw from the gameplay RNG in a fixed order: spawn chance,
//! x position, then kind.

use glam::Vec2;
use rand::Rng;

use super::entities::{Enemy, EnemyKind};
use crate::consts::{ENEMY_SPAWN_INSET, ENEMY_SPAWN_Y};

/// Per-tick spawn probability for a stage
pub fn spawn_chance(stage: u8) -> f32 {
    0.02 + stage as f32 * 0.005
}

/// Map one uniform draw to an enemy kind.
///
/// Both thresholds test the same draw, so heavies are a subset of the
/// fast-eligible draws rather than an independent roll.
pub fn kind_for_roll(stage: u8, roll: f32) -> EnemyKind {
    let mut kind = EnemyKind::Basic;
    if stage >= 2 && roll < 0.3 {
        kind = EnemyKind::Fast;
    }
    if stage >= 3 && roll < 0.15 {
        kind = EnemyKind::Heavy;
    }
    kind
}

/// Roll for a new enemy this tick
pub fn maybe_spawn_enemy<R: Rng>(rng: &mut R, stage: u8, width: f32) -> Option<Enemy> {
    if rng.random::<f32>() >= spawn_chance(stage) {
        return None;
    }
    let span = (width - 2.0 * ENEMY_SPAWN_INSET).max(0.0);
    let x = rng.random::<f32>() * span + ENEMY_SPAWN_INSET;
    let kind = kind_for_roll(stage, rng.random::<f32>());
    Some(Enemy::new(kind, Vec2::new(x, ENEMY_SPAWN_Y)))
}

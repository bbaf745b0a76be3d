//! Collision detection
//!
//! Pure overlap tests. Nothing here knows what kind of entity it is looking
//! at; callers pick the radii.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Strict axis-aligned overlap (touching edges do not count)
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Circles overlap when the center distance is strictly below the radius sum
#[inline]
pub fn circle_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Fixed radius pairs used by combat resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPair {
    PlayerBulletEnemy,
    EnemyBulletPlayer,
    EnemyPlayer,
    PickupPlayer,
}

impl CollisionPair {
    /// (radius of the first entity, radius of the second)
    pub fn radii(self) -> (f32, f32) {
        match self {
            CollisionPair::PlayerBulletEnemy => (BULLET_RADIUS, ENEMY_HIT_RADIUS),
            CollisionPair::EnemyBulletPlayer => (BULLET_RADIUS, PLAYER_RADIUS),
            CollisionPair::EnemyPlayer => (ENEMY_RAM_RADIUS, PLAYER_RADIUS),
            CollisionPair::PickupPlayer => (PICKUP_RADIUS, PLAYER_RADIUS),
        }
    }

    #[inline]
    pub fn test(self, a: Vec2, b: Vec2) -> bool {
        let (ra, rb) = self.radii();
        circle_overlap(a, ra, b, rb)
    }
}

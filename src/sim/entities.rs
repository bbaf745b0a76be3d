//! Transient entities: bullets, enemies and falling pickups

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::events::{Feedback, GameEvent};
use super::powerups::{PowerupKind, PowerupRegistry};
use crate::Color;
use crate::consts::*;

const ENEMY_BULLET_COLOR: Color = Color::hex(0xff4040);
const EXPLOSION_COLOR: Color = Color::hex(0xffff40);

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: u32,
    pub color: Color,
    pub owner: BulletOwner,
}

impl Bullet {
    /// Straight-down enemy shot
    pub fn enemy_shot(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, ENEMY_BULLET_SPEED),
            damage: 1,
            color: ENEMY_BULLET_COLOR,
            owner: BulletOwner::Enemy,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.owner == BulletOwner::Player
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Outside the canvas by more than the bullet margin on any side
    pub fn is_expired(&self, width: f32, height: f32) -> bool {
        self.pos.y < -BULLET_MARGIN
            || self.pos.y > height + BULLET_MARGIN
            || self.pos.x < -BULLET_MARGIN
            || self.pos.x > width + BULLET_MARGIN
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Basic,
    Fast,
    Heavy,
}

/// Per-kind constants, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemyStats {
    /// Sprite side length
    pub size: f32,
    pub speed: f32,
    pub health: i32,
    /// Expected shots per 1000 ticks
    pub fire_rate: f32,
    pub points: u64,
    pub color: Color,
}

const BASIC: EnemyStats = EnemyStats {
    size: 30.0,
    speed: 2.0,
    health: 1,
    fire_rate: 2.0,
    points: 10,
    color: Color::hex(0xff6040),
};

const FAST: EnemyStats = EnemyStats {
    size: 25.0,
    speed: 4.0,
    health: 1,
    fire_rate: 3.0,
    points: 15,
    color: Color::hex(0x40ff60),
};

const HEAVY: EnemyStats = EnemyStats {
    size: 45.0,
    speed: 1.0,
    health: 3,
    fire_rate: 1.0,
    points: 25,
    color: Color::hex(0xff4040),
};

impl EnemyKind {
    pub fn stats(self) -> &'static EnemyStats {
        match self {
            EnemyKind::Basic => &BASIC,
            EnemyKind::Fast => &FAST,
            EnemyKind::Heavy => &HEAVY,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    kind: EnemyKind,
    health: i32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            pos,
            kind,
            health: kind.stats().health,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn stats(&self) -> &'static EnemyStats {
        self.kind.stats()
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Descend and maybe fire. Returns the bullet fired this tick, if any.
    pub fn update<R: Rng>(&mut self, game_speed: f32, rng: &mut R) -> Option<Bullet> {
        let stats = self.stats();
        self.pos.y += stats.speed * game_speed;

        if rng.random::<f32>() < stats.fire_rate / 1000.0 {
            Some(Bullet::enemy_shot(self.pos + Vec2::new(0.0, 20.0)))
        } else {
            None
        }
    }

    pub fn is_expired(&self, height: f32) -> bool {
        self.pos.y > height + OFFSCREEN_MARGIN
    }

    /// Apply damage. On death, award points, maybe drop a pickup, and
    /// return true; the caller removes the enemy.
    pub fn take_damage<R: Rng>(
        &mut self,
        amount: u32,
        score: &mut u64,
        pickups: &mut Vec<Pickup>,
        rng: &mut R,
        fx: &mut Feedback,
    ) -> bool {
        self.health -= amount as i32;
        fx.emit(GameEvent::EnemyHit);
        fx.burst(self.pos, HIT_PARTICLES, self.stats().color);

        if self.health > 0 {
            return false;
        }

        *score += self.stats().points;
        fx.burst(self.pos, EXPLOSION_PARTICLES, EXPLOSION_COLOR);
        if rng.random::<f32>() < POWERUP_DROP_CHANCE {
            pickups.push(Pickup::new(self.pos, rng));
        }
        fx.emit(GameEvent::Explosion);
        true
    }
}

/// A falling power-up pickup
#[derive(Debug, Clone, Serialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PowerupKind,
    /// Cosmetic spin (radians)
    pub rotation: f32,
}

impl Pickup {
    /// Pickup of a uniformly random kind
    pub fn new<R: Rng>(pos: Vec2, rng: &mut R) -> Self {
        let kind = PowerupKind::ALL[rng.random_range(0..PowerupKind::ALL.len())];
        Self::with_kind(pos, kind)
    }

    pub fn with_kind(pos: Vec2, kind: PowerupKind) -> Self {
        Self {
            pos,
            kind,
            rotation: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += PICKUP_FALL_SPEED;
        self.rotation += PICKUP_SPIN;
    }

    pub fn is_expired(&self, height: f32) -> bool {
        self.pos.y > height + OFFSCREEN_MARGIN
    }

    pub fn collect(&self, registry: &mut PowerupRegistry, fx: &mut Feedback) {
        registry.activate(self.kind);
        fx.emit(GameEvent::PowerupCollected(self.kind));
    }
}

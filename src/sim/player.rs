//! The player's ship

use glam::Vec2;
use serde::Serialize;

use super::character::{Archetype, CharacterKey};
use super::entities::{Bullet, BulletOwner};
use super::events::{Feedback, GameEvent};
use super::powerups::{PowerupKind, PowerupRegistry};
use super::tick::TickInput;
use crate::Color;
use crate::consts::*;

const DAMAGE_PARTICLE_COLOR: Color = Color::hex(0xff4040);

/// Session lives and health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vitals {
    pub lives: u8,
    /// Always within 0..=MAX_HEALTH
    pub health: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            lives: START_LIVES,
            health: MAX_HEALTH,
        }
    }
}

impl Vitals {
    /// Subtract health; a depleted bar costs a life and refills.
    /// Returns true if a life was lost.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).clamp(0, MAX_HEALTH);
        if self.health > 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.health = MAX_HEALTH;
        true
    }

    pub fn is_depleted(&self) -> bool {
        self.lives == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub character: CharacterKey,
    pub speed: f32,
    pub fire_rate: u32,
    pub damage: u32,
    pub color: Color,
    /// Tick of the last volley (None until the first shot)
    pub last_shot_tick: Option<u64>,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
}

impl Player {
    /// Fresh ship at the spawn point for the given canvas
    pub fn new(character: CharacterKey, width: f32, height: f32) -> Self {
        let Archetype {
            speed,
            fire_rate,
            damage,
            color,
            ..
        } = *character.archetype();
        Self {
            pos: Vec2::new(width / 2.0, height - PLAYER_SPAWN_OFFSET),
            character,
            speed,
            fire_rate,
            damage,
            color,
            last_shot_tick: None,
            invulnerable: false,
            invulnerable_ticks: 0,
        }
    }

    /// Whether a shot is allowed at `now` (logical ticks)
    pub fn can_fire(&self, now: u64) -> bool {
        match self.last_shot_tick {
            None => true,
            Some(last) => now.saturating_sub(last) * self.fire_rate as u64 >= TICK_RATE as u64,
        }
    }

    /// Move, fire, and count down the grace window.
    /// Returns true if a volley was fired.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        input: &TickInput,
        now: u64,
        width: f32,
        height: f32,
        powerups: &PowerupRegistry,
        bullets: &mut Vec<Bullet>,
        fx: &mut Feedback,
    ) -> bool {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
        if input.up {
            self.pos.y -= self.speed;
        }
        if input.down {
            self.pos.y += self.speed;
        }
        self.pos.x = self
            .pos
            .x
            .clamp(PLAYER_EDGE_MARGIN, (width - PLAYER_EDGE_MARGIN).max(PLAYER_EDGE_MARGIN));
        self.pos.y = self
            .pos
            .y
            .clamp(PLAYER_EDGE_MARGIN, (height - PLAYER_EDGE_MARGIN).max(PLAYER_EDGE_MARGIN));

        let fired = input.fire && self.can_fire(now);
        if fired {
            self.shoot(powerups, bullets, fx);
            self.last_shot_tick = Some(now);
        }

        if self.invulnerable {
            if self.invulnerable_ticks == 0 {
                self.invulnerable = false;
            } else {
                self.invulnerable_ticks -= 1;
            }
        }

        fired
    }

    /// Fire one volley, shaped by active power-ups
    pub fn shoot(&self, powerups: &PowerupRegistry, bullets: &mut Vec<Bullet>, fx: &mut Feedback) {
        let speed = if powerups.is_active(PowerupKind::RapidFire) {
            RAPID_BULLET_SPEED
        } else {
            BULLET_SPEED
        };
        let damage = if powerups.is_active(PowerupKind::PowerShot) {
            self.damage * 2
        } else {
            self.damage
        };
        let angles: &[f32] = if powerups.is_active(PowerupKind::TripleShot) {
            &[-TRIPLE_SHOT_ANGLE, 0.0, TRIPLE_SHOT_ANGLE]
        } else {
            &[0.0]
        };

        let muzzle = self.pos - Vec2::new(0.0, 20.0);
        bullets.extend(angles.iter().map(|angle| Bullet {
            pos: muzzle,
            vel: Vec2::new(angle.sin() * speed, -speed),
            damage,
            color: self.color,
            owner: BulletOwner::Player,
        }));
        fx.emit(GameEvent::Shoot);
    }

    /// Apply damage unless inside the grace window. Returns whether the hit
    /// landed.
    pub fn take_damage(&mut self, amount: i32, vitals: &mut Vitals, fx: &mut Feedback) -> bool {
        if self.invulnerable {
            return false;
        }

        self.invulnerable = true;
        self.invulnerable_ticks = INVULNERABLE_TICKS;
        fx.emit(GameEvent::PlayerHit);
        fx.burst(self.pos, DAMAGE_PARTICLES, DAMAGE_PARTICLE_COLOR);

        if vitals.apply_damage(amount) {
            log::debug!("Life lost, {} remaining", vitals.lives);
            fx.emit(GameEvent::LifeLost {
                lives_left: vitals.lives,
            });
            if vitals.is_depleted() {
                fx.emit(GameEvent::GameOver);
            }
        }
        true
    }
}

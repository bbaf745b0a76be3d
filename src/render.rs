//! Draw contract for an external renderer
//!
//! The core owns no pixels. Each live entity describes itself as one sprite
//! and hands it to a `DrawSink`, after all mutation for the tick is done.

use glam::Vec2;

use crate::Color;
use crate::consts::*;
use crate::sim::{Bullet, Enemy, Particle, Pickup, Player, SessionState, Star};

/// Ticks per blink phase while the player is invulnerable (~100 ms)
const BLINK_TICKS: u64 = 6;

/// One textured or flat-colored quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub alpha: f32,
    /// Radians, about the center
    pub rotation: f32,
}

impl Sprite {
    pub fn new(center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            center,
            size,
            color,
            alpha: 1.0,
            rotation: 0.0,
        }
    }

    pub fn square(center: Vec2, side: f32, color: Color) -> Self {
        Self::new(center, Vec2::splat(side), color)
    }
}

/// Rendering collaborator
pub trait DrawSink {
    /// Called once before any sprite of a frame
    fn begin_frame(&mut self, _width: f32, _height: f32) {}

    fn sprite(&mut self, sprite: Sprite);
}

/// Anything that can put itself on screen
pub trait Draw {
    fn draw(&self, sink: &mut dyn DrawSink, tick: u64);
}

impl Draw for Player {
    fn draw(&self, sink: &mut dyn DrawSink, tick: u64) {
        let mut sprite = Sprite::square(self.pos, PLAYER_SIZE, self.color);
        if self.invulnerable && (tick / BLINK_TICKS) % 2 == 1 {
            sprite.alpha = 0.5;
        }
        sink.sprite(sprite);
    }
}

impl Draw for Bullet {
    fn draw(&self, sink: &mut dyn DrawSink, _tick: u64) {
        sink.sprite(Sprite::new(self.pos, Vec2::new(4.0, 10.0), self.color));
    }
}

impl Draw for Enemy {
    fn draw(&self, sink: &mut dyn DrawSink, _tick: u64) {
        let stats = self.stats();
        sink.sprite(Sprite::square(self.pos, stats.size, stats.color));
    }
}

impl Draw for Particle {
    fn draw(&self, sink: &mut dyn DrawSink, _tick: u64) {
        let mut sprite = Sprite::square(self.pos, 4.0, self.color);
        sprite.alpha = self.fade();
        sink.sprite(sprite);
    }
}

impl Draw for Pickup {
    fn draw(&self, sink: &mut dyn DrawSink, _tick: u64) {
        let mut sprite = Sprite::square(self.pos, PICKUP_SIZE, self.kind.color());
        sprite.rotation = self.rotation;
        sink.sprite(sprite);
    }
}

impl Draw for Star {
    fn draw(&self, sink: &mut dyn DrawSink, _tick: u64) {
        let mut sprite = Sprite::square(self.pos, self.size, Color::hex(0xffffff));
        sprite.alpha = 0.8;
        sink.sprite(sprite);
    }
}

/// Draw the whole live world, back to front
pub fn render_frame(state: &SessionState, sink: &mut dyn DrawSink) {
    let tick = state.time_ticks;
    sink.begin_frame(state.bounds.width, state.bounds.height);

    for star in state.starfield.stars() {
        star.draw(sink, tick);
    }
    state.player.draw(sink, tick);
    for bullet in &state.bullets {
        bullet.draw(sink, tick);
    }
    for enemy in &state.enemies {
        enemy.draw(sink, tick);
    }
    for particle in state.fx.particles.iter() {
        particle.draw(sink, tick);
    }
    for pickup in &state.pickups {
        pickup.draw(sink, tick);
    }
}

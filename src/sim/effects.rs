//! Cosmetic effects: particles and starfield
//!
//! Nothing here feeds back into gameplay. Both run on their own RNG stream
//! so toggling or resizing them never changes gameplay rolls.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::Color;
use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.life == 0
    }

    /// Remaining life in 0..=1, used as draw alpha
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Fixed-capacity particle pool. The oldest particle is evicted when full.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: VecDeque<Particle>,
    capacity: usize,
    rng: Pcg32,
}

impl ParticleField {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Emit `count` particles at `pos` with random velocity
    pub fn burst(&mut self, pos: Vec2, count: usize, color: Color) {
        if self.capacity == 0 {
            return;
        }
        for _ in 0..count {
            if self.particles.len() >= self.capacity {
                self.particles.pop_front();
            }
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            );
            self.particles.push_back(Particle {
                pos,
                vel,
                color,
                life: PARTICLE_LIFE,
                max_life: PARTICLE_LIFE,
            });
        }
    }

    /// Advance every particle and drop the dead ones
    pub fn update(&mut self) {
        self.particles.retain_mut(|p| {
            p.update();
            !p.is_expired()
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Background star
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

/// Vertically wrapping parallax starfield
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height),
                speed: rng.random::<f32>() * 2.0 + 1.0,
                size: rng.random::<f32>() * 2.0,
            })
            .collect();
        Self {
            stars,
            width,
            height,
            rng,
        }
    }

    pub fn advance(&mut self, game_speed: f32) {
        for star in &mut self.stars {
            star.pos.y += star.speed * game_speed;
            if star.pos.y > self.height {
                star.pos.y = 0.0;
                star.pos.x = self.rng.random::<f32>() * self.width;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

//! Game events emitted during a tick
//!
//! Fire-and-forget: the host drains them after the tick for audio and HUD.

use glam::Vec2;
use serde::Serialize;

use super::effects::ParticleField;
use super::powerups::PowerupKind;
use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Player fired a volley
    Shoot,
    /// Enemy took damage
    EnemyHit,
    /// Player took damage
    PlayerHit,
    /// Pickup collected
    PowerupCollected(PowerupKind),
    /// Enemy destroyed
    Explosion,
    /// Player ran out of health and lost a life
    LifeLost { lives_left: u8 },
    /// Difficulty went up
    StageAdvanced(u8),
    /// Last life gone
    GameOver,
    /// Background music should start (new game)
    MusicStart,
    /// Background music should stop (game over or back to the start screen)
    MusicStop,
}

/// Side effects collected during a tick: cosmetic particles and the event
/// stream. Events are cleared at the start of every tick.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub particles: ParticleField,
    events: Vec<GameEvent>,
}

impl Feedback {
    pub fn new(particles: ParticleField) -> Self {
        Self {
            particles,
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn burst(&mut self, pos: Vec2, count: usize, color: Color) {
        self.particles.burst(pos, count, color);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

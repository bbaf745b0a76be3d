//! Session state and core simulation types
//!
//! Everything a running game mutates lives in one `SessionState`; there are
//! no ambient globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::character::CharacterKey;
use super::effects::{ParticleField, Starfield};
use super::entities::{Bullet, Enemy, Pickup};
use super::events::Feedback;
use super::player::{Player, Vitals};
use super::powerups::PowerupRegistry;
use super::stage::Difficulty;
use crate::settings::Settings;

/// Stream offsets so cosmetic RNGs never share a sequence with gameplay
const PARTICLE_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;
const STAR_STREAM: u64 = 0xc2b2_ae3d_27d4_eb4f;

/// Playfield size in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Complete state of one game (deterministic for a given seed and inputs)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG
    pub rng: Pcg32,
    pub bounds: Bounds,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Only ever increases
    pub score: u64,
    pub vitals: Vitals,
    pub difficulty: Difficulty,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<Pickup>,
    pub powerups: PowerupRegistry,
    /// Particles and per-tick events
    pub fx: Feedback,
    pub starfield: Starfield,
}

impl SessionState {
    /// Fresh game for the selected character
    pub fn new(character: CharacterKey, seed: u64, settings: &Settings) -> Self {
        let bounds = Bounds {
            width: settings.canvas_width,
            height: settings.canvas_height,
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            time_ticks: 0,
            score: 0,
            vitals: Vitals::default(),
            difficulty: Difficulty::default(),
            player: Player::new(character, bounds.width, bounds.height),
            bullets: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            powerups: PowerupRegistry::new(),
            fx: Feedback::new(ParticleField::new(
                settings.particle_capacity(),
                seed ^ PARTICLE_STREAM,
            )),
            starfield: Starfield::new(
                settings.effective_star_count(),
                bounds.width,
                bounds.height,
                seed ^ STAR_STREAM,
            ),
        }
    }

    pub fn stage(&self) -> u8 {
        self.difficulty.stage()
    }

    pub fn game_speed(&self) -> f32 {
        self.difficulty.game_speed()
    }

    pub fn character(&self) -> CharacterKey {
        self.player.character
    }
}

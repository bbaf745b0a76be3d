//! Star Shooter - A vertical arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty, session)
//! - `render`: Abstract draw contract for an external renderer
//! - `audio`: Sound trigger dispatch to an optional audio backend
//! - `hud`: Read-only session display snapshot
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod hud;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{SessionError, SettingsError};
pub use hud::HudSnapshot;
pub use settings::Settings;

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }
}

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player is kept this far inside every canvas edge
    pub const PLAYER_EDGE_MARGIN: f32 = 20.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_OFFSET: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 40.0;

    pub const START_LIVES: u8 = 3;
    pub const MAX_HEALTH: i32 = 100;
    /// Grace window after a successful hit
    pub const INVULNERABLE_TICKS: u32 = 60;

    /// Damage dealt to the player
    pub const ENEMY_BULLET_DAMAGE: i32 = 20;
    pub const ENEMY_RAM_DAMAGE: i32 = 30;

    /// Collision radii
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const ENEMY_HIT_RADIUS: f32 = 20.0;
    pub const ENEMY_RAM_RADIUS: f32 = 25.0;
    pub const PICKUP_RADIUS: f32 = 15.0;

    /// Bullets
    pub const BULLET_SPEED: f32 = 8.0;
    pub const RAPID_BULLET_SPEED: f32 = 12.0;
    pub const TRIPLE_SHOT_ANGLE: f32 = 0.3;
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;
    /// Bullets expire this far outside the canvas
    pub const BULLET_MARGIN: f32 = 10.0;
    /// Enemies and pickups expire this far below the canvas
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    /// Enemies enter at this height
    pub const ENEMY_SPAWN_Y: f32 = -30.0;
    /// Enemies spawn at least this far from either side
    pub const ENEMY_SPAWN_INSET: f32 = 30.0;

    /// Powerups
    pub const POWERUP_DURATION_TICKS: u32 = 600;
    pub const POWERUP_DROP_CHANCE: f32 = 0.15;
    pub const PICKUP_FALL_SPEED: f32 = 2.0;
    pub const PICKUP_SPIN: f32 = 0.1;
    pub const PICKUP_SIZE: f32 = 20.0;

    /// Difficulty
    pub const POINTS_PER_STAGE: u64 = 500;
    pub const MAX_STAGE: u8 = 3;
    pub const SPEED_PER_STAGE: f32 = 0.3;

    /// Particles
    pub const PARTICLE_LIFE: u32 = 60;
    pub const PARTICLE_GRAVITY: f32 = 0.2;
    pub const PARTICLE_SPREAD: f32 = 10.0;
    pub const MAX_PARTICLES: usize = 512;
    pub const DAMAGE_PARTICLES: usize = 10;
    pub const HIT_PARTICLES: usize = 5;
    pub const EXPLOSION_PARTICLES: usize = 15;

    /// Starfield
    pub const STAR_COUNT: usize = 100;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of entity lists)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod character;
pub mod collision;
pub mod effects;
pub mod entities;
pub mod events;
pub mod player;
pub mod powerups;
pub mod session;
pub mod spawn;
pub mod stage;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use character::{Archetype, CharacterKey};
pub use collision::{CollisionPair, Rect, circle_overlap, rect_overlap};
pub use effects::{Particle, ParticleField, Star, Starfield};
pub use entities::{Bullet, BulletOwner, Enemy, EnemyKind, EnemyStats, Pickup};
pub use events::{Feedback, GameEvent};
pub use player::{Player, Vitals};
pub use powerups::{PowerupKind, PowerupRegistry};
pub use session::{GamePhase, Session};
pub use stage::{Difficulty, game_speed_for_stage, stage_for_score};
pub use state::{Bounds, SessionState};
pub use tick::{TickInput, TickOutcome, tick};

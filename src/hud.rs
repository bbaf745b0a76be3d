//! Read-only session display snapshot
//!
//! Polled by the display layer once per tick.

use serde::Serialize;

use crate::consts::MAX_HEALTH;
use crate::sim::{GamePhase, SessionState};

/// Values shown on the HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Health as a percentage of the maximum
    pub health_percent: u32,
    pub stage: u8,
    pub character: &'static str,
    /// Names of active powerups, in a stable order
    pub active_powerups: Vec<&'static str>,
}

impl HudSnapshot {
    pub fn new(phase: GamePhase, state: &SessionState) -> Self {
        let health = state.vitals.health.clamp(0, MAX_HEALTH);
        Self {
            phase,
            score: state.score,
            lives: state.vitals.lives,
            health_percent: (health * 100 / MAX_HEALTH) as u32,
            stage: state.stage(),
            character: state.character().archetype().name,
            active_powerups: state.powerups.names(),
        }
    }

    /// `"Active: a, b"`, or empty when nothing is active
    pub fn powerup_line(&self) -> String {
        if self.active_powerups.is_empty() {
            String::new()
        } else {
            format!("Active: {}", self.active_powerups.join(", "))
        }
    }
}

//! Difficulty progression
//!
//! Stage is derived from cumulative score and only ever moves up.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_STAGE, POINTS_PER_STAGE, SPEED_PER_STAGE};

/// Stage the given score earns, clamped to the last stage
pub fn stage_for_score(score: u64) -> u8 {
    let stage = score / POINTS_PER_STAGE + 1;
    stage.min(MAX_STAGE as u64) as u8
}

/// Descent speed multiplier for a stage
pub fn game_speed_for_stage(stage: u8) -> f32 {
    1.0 + (stage.saturating_sub(1)) as f32 * SPEED_PER_STAGE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    stage: u8,
    game_speed: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            stage: 1,
            game_speed: 1.0,
        }
    }
}

impl Difficulty {
    pub fn stage(&self) -> u8 {
        self.stage
    }

    pub fn game_speed(&self) -> f32 {
        self.game_speed
    }

    /// Recompute from score. Returns the new stage if it advanced.
    pub fn advance(&mut self, score: u64) -> Option<u8> {
        let target = stage_for_score(score);
        if target > self.stage {
            self.stage = target;
            self.game_speed = game_speed_for_stage(target);
            Some(target)
        } else {
            None
        }
    }
}

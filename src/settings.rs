//! Runtime settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Session seed (None = pick one at random)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Particle bursts (cosmetic only)
    pub particles: bool,
    pub max_particles: usize,
    /// Scrolling starfield
    pub starfield: bool,
    pub star_count: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Start the music track with each game
    pub music: bool,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: None,

            particles: true,
            max_particles: MAX_PARTICLES,
            starfield: true,
            star_count: STAR_COUNT,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.6,
            music: true,
            muted: false,
        }
    }
}

impl Settings {
    /// Effective particle cap (0 when particles are disabled)
    pub fn particle_capacity(&self) -> usize {
        if self.particles {
            self.max_particles
        } else {
            0
        }
    }

    /// Effective star count (0 when the starfield is disabled)
    pub fn effective_star_count(&self) -> usize {
        if self.starfield { self.star_count } else { 0 }
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({e})");
                Self::default()
            }
        }
    }
}

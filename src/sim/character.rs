//! Playable ship archetypes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::error::SessionError;

/// Selection key for one of the fixed archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKey {
    #[default]
    Nova,
    Blaze,
    Viper,
}

/// Immutable stat template
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    /// Pixels per tick per held direction
    pub speed: f32,
    /// Shots per second
    pub fire_rate: u32,
    pub damage: u32,
    pub color: Color,
}

const NOVA: Archetype = Archetype {
    name: "Nova",
    speed: 5.0,
    fire_rate: 8,
    damage: 1,
    color: Color::hex(0x00d4ff),
};

const BLAZE: Archetype = Archetype {
    name: "Blaze",
    speed: 4.0,
    fire_rate: 6,
    damage: 2,
    color: Color::hex(0xff4040),
};

const VIPER: Archetype = Archetype {
    name: "Viper",
    speed: 7.0,
    fire_rate: 12,
    damage: 1,
    color: Color::hex(0x40ff40),
};

impl CharacterKey {
    pub const ALL: [CharacterKey; 3] = [
        CharacterKey::Nova,
        CharacterKey::Blaze,
        CharacterKey::Viper,
    ];

    pub fn archetype(self) -> &'static Archetype {
        match self {
            CharacterKey::Nova => &NOVA,
            CharacterKey::Blaze => &BLAZE,
            CharacterKey::Viper => &VIPER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterKey::Nova => "nova",
            CharacterKey::Blaze => "blaze",
            CharacterKey::Viper => "viper",
        }
    }
}

impl FromStr for CharacterKey {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nova" => Ok(CharacterKey::Nova),
            "blaze" => Ok(CharacterKey::Blaze),
            "viper" => Ok(CharacterKey::Viper),
            _ => Err(SessionError::UnknownCharacter(s.to_string())),
        }
    }
}

impl fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.archetype().name)
    }
}

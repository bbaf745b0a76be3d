//! Timed buffs
//!
//! The registry maps each active kind to its remaining ticks. Entries are
//! refreshed (never stacked) on pickup and dropped the moment they hit zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::POWERUP_DURATION_TICKS;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerupKind {
    /// Three-way spread
    TripleShot,
    /// Faster bullets
    RapidFire,
    /// Double bullet damage
    PowerShot,
    /// Absorbs incoming hits
    Shield,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 4] = [
        PowerupKind::TripleShot,
        PowerupKind::RapidFire,
        PowerupKind::PowerShot,
        PowerupKind::Shield,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerupKind::TripleShot => "tripleShot",
            PowerupKind::RapidFire => "rapidFire",
            PowerupKind::PowerShot => "powerShot",
            PowerupKind::Shield => "shield",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PowerupKind::TripleShot => Color::hex(0xffff00),
            PowerupKind::RapidFire => Color::hex(0xff8000),
            PowerupKind::PowerShot => Color::hex(0xff0080),
            PowerupKind::Shield => Color::hex(0x00ff80),
        }
    }
}

/// Active power-up effects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerupRegistry {
    active: BTreeMap<PowerupKind, u32>,
}

impl PowerupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate or refresh a kind for the full duration
    pub fn activate(&mut self, kind: PowerupKind) {
        self.active.insert(kind, POWERUP_DURATION_TICKS);
    }

    pub fn is_active(&self, kind: PowerupKind) -> bool {
        self.active.contains_key(&kind)
    }

    pub fn remaining(&self, kind: PowerupKind) -> Option<u32> {
        self.active.get(&kind).copied()
    }

    /// Decrement every entry by one tick, removing the ones that run out
    pub fn age(&mut self) {
        self.active.retain(|_, ticks| {
            *ticks = ticks.saturating_sub(1);
            *ticks > 0
        });
    }

    /// Active kinds in stable order
    pub fn kinds(&self) -> impl Iterator<Item = PowerupKind> + '_ {
        self.active.keys().copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.kinds().map(PowerupKind::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_sets_full_duration() {
        let mut reg = PowerupRegistry::new();
        reg.activate(PowerupKind::RapidFire);
        assert_eq!(reg.remaining(PowerupKind::RapidFire), Some(600));
        assert!(!reg.is_active(PowerupKind::Shield));
    }

    #[test]
    fn test_refresh_resets_instead_of_stacking() {
        let mut reg = PowerupRegistry::new();
        reg.activate(PowerupKind::TripleShot);
        for _ in 0..250 {
            reg.age();
        }
        assert_eq!(reg.remaining(PowerupKind::TripleShot), Some(350));
        reg.activate(PowerupKind::TripleShot);
        assert_eq!(reg.remaining(PowerupKind::TripleShot), Some(600));
    }

    #[test]
    fn test_expires_after_duration() {
        let mut reg = PowerupRegistry::new();
        reg.activate(PowerupKind::PowerShot);
        for _ in 0..599 {
            reg.age();
        }
        assert_eq!(reg.remaining(PowerupKind::PowerShot), Some(1));
        reg.age();
        assert!(reg.is_empty());
        // Never holds a non-positive countdown
        reg.age();
        assert_eq!(reg.remaining(PowerupKind::PowerShot), None);
    }

    #[test]
    fn test_names_in_stable_order() {
        let mut reg = PowerupRegistry::new();
        reg.activate(PowerupKind::Shield);
        reg.activate(PowerupKind::TripleShot);
        assert_eq!(reg.names(), vec!["tripleShot", "shield"]);
    }
}

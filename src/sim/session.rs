//! Game session lifecycle
//!
//! start --start_game--> playing --lives exhausted--> game over
//! --restart_game--> start. Ticks only run while playing.
//!
//! Entering play cues the background music; game over and restart cue it
//! off. The cues travel in the same event stream as the tick events.

use serde::{Deserialize, Serialize};

use super::character::CharacterKey;
use super::events::GameEvent;
use super::state::SessionState;
use super::tick::{TickInput, TickOutcome, tick};
use crate::error::SessionError;
use crate::hud::HudSnapshot;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    /// Idle, waiting for a character and start
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; final values frozen for display
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: GamePhase,
    settings: Settings,
    /// Base seed; each game derives its own from this
    seed: u64,
    games_started: u64,
    /// Current or most recent game
    state: Option<SessionState>,
    /// Events not yet drained by the host, oldest first
    outbox: Vec<GameEvent>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self {
            phase: GamePhase::Start,
            settings,
            seed,
            games_started: 0,
            state: None,
            outbox: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Mutable access to the running game (for hosts and tests)
    pub fn state_mut(&mut self) -> Option<&mut SessionState> {
        self.state.as_mut()
    }

    /// Validate the selection key and begin a fresh game
    pub fn start_game(&mut self, character: &str) -> Result<(), SessionError> {
        if self.phase != GamePhase::Start {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: "start a game",
            });
        }
        let character: CharacterKey = character.parse().inspect_err(|e| log::warn!("{e}"))?;

        let seed = self.seed.wrapping_add(self.games_started);
        self.games_started += 1;
        log::info!("Starting game as {} (seed {})", character, seed);

        self.state = Some(SessionState::new(character, seed, &self.settings));
        self.phase = GamePhase::Playing;
        self.outbox.push(GameEvent::MusicStart);
        Ok(())
    }

    /// Run one tick if playing. Returns the phase after the tick.
    pub fn tick(&mut self, input: &TickInput) -> GamePhase {
        if self.phase != GamePhase::Playing {
            return self.phase;
        }
        let Some(state) = self.state.as_mut() else {
            return self.phase;
        };
        let outcome = tick(state, input);
        self.outbox.extend(state.fx.drain_events());
        if outcome == TickOutcome::PlayerDefeated {
            log::info!(
                "Game over: score {}, stage {}, {} ticks",
                state.score,
                state.stage(),
                state.time_ticks
            );
            self.phase = GamePhase::GameOver;
            self.outbox.push(GameEvent::MusicStop);
        }
        self.phase
    }

    /// Display values for the current or last game
    pub fn hud(&self) -> Option<HudSnapshot> {
        self.state
            .as_ref()
            .map(|state| HudSnapshot::new(self.phase, state))
    }

    /// Take every event emitted since the last drain. Hosts drain once per
    /// tick.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Leave the game-over screen for the start screen
    pub fn restart_game(&mut self) -> Result<(), SessionError> {
        if self.phase != GamePhase::GameOver {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: "restart",
            });
        }
        self.phase = GamePhase::Start;
        self.outbox.push(GameEvent::MusicStop);
        Ok(())
    }
}

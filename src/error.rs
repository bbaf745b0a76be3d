//! Error types for session control and configuration loading
//!
//! The simulation step itself cannot fail; these only surface at the
//! session boundary.

use thiserror::Error;

use crate::sim::GamePhase;

/// Errors raised by the session state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Character key not present in the archetype table
    #[error("unknown character '{0}' (expected nova, blaze or viper)")]
    UnknownCharacter(String),

    /// Lifecycle call made from a phase that does not allow it
    #[error("cannot {action} while in {from:?}")]
    InvalidTransition { from: GamePhase, action: &'static str },
}

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

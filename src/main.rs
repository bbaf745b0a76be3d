//! Star Shooter native driver
//!
//! Runs a headless autopilot session and prints the final HUD as JSON.
//!
//! Usage: star-shooter [character] [ticks] [settings.json]

use std::process::ExitCode;

use star_shooter::Settings;
use star_shooter::audio::AudioManager;
use star_shooter::consts::TICK_RATE;
use star_shooter::sim::{GamePhase, Session, autopilot};

/// Two minutes of play
const DEFAULT_TICKS: u64 = 120 * TICK_RATE as u64;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Star Shooter (native) starting...");

    let mut args = std::env::args().skip(1);
    let character = args.next().unwrap_or_else(|| "nova".to_string());
    let ticks = match args.next().map(|t| t.parse::<u64>()) {
        None => DEFAULT_TICKS,
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut session = Session::new(settings);
    let mut audio = AudioManager::from_settings(None, session.settings());
    if let Err(e) = session.start_game(&character) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    for _ in 0..ticks {
        let Some(input) = session.state().map(autopilot) else {
            break;
        };
        let phase = session.tick(&input);
        audio.dispatch(&session.drain_events());
        if phase == GamePhase::GameOver {
            break;
        }
    }
    audio.stop_music();

    let Some(hud) = session.hud() else {
        return ExitCode::FAILURE;
    };
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize HUD: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Carrot Hop headless runner
//!
//! Plays one run on the arcade host with autopilot steering and prints the
//! final state as JSON.
//!
//! Usage: `carrot-hop [tuning.json] [seed]`

use std::process::ExitCode;

use carrot_hop::arcade::{ArcadeHost, Autopilot};
use carrot_hop::consts::{GAME_OVER_SCENE, SIM_DT};
use carrot_hop::sim::{GameEvent, GameState};
use carrot_hop::{Tuning, TuningError};

/// Stop after two minutes of game time
const MAX_TICKS: u64 = 120 * 120;

fn load_tuning(path: Option<&str>) -> Result<Tuning, TuningError> {
    match path {
        Some(path) => Tuning::load(path),
        None => {
            let tuning = Tuning::default();
            tuning.validate()?;
            Ok(tuning)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Carrot Hop (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning = match load_tuning(args.first().map(String::as_str)) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_CA77_0700_u64);

    let mut state = GameState::new(tuning, seed);
    state.initialize();
    let mut host = ArcadeHost::new(&state);
    let mut pilot = Autopilot::new();

    while !state.is_over() && state.time_ticks < MAX_TICKS {
        host.controls = pilot.steer(&state);
        host.step(&mut state, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::ItemCollected { .. } => log::info!("{}", state.hud_label()),
                GameEvent::RunOver { collected } => {
                    log::info!("Switching to '{GAME_OVER_SCENE}' ({collected} carrots)")
                }
                other => log::trace!("{other:?}"),
            }
        }
    }

    if !state.is_over() {
        log::info!("Tick limit reached; run still alive");
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize final state: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

//! Alien Invasion entry point
//!
//! Headless runner: the autopilot plays a session at the fixed timestep and
//! frame outcomes are logged in place of rendering and audio.
//!
//! Usage: `alien-invasion [settings.json] [frames]`

use std::time::{SystemTime, UNIX_EPOCH};

use alien_invasion::consts::SIM_DT;
use alien_invasion::persistence::DEFAULT_SAVE_PATH;
use alien_invasion::sim::GameEvent;
use alien_invasion::{Command, FrameOutcome, Game, Settings};

const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Alien Invasion (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = Settings::load(args.next().unwrap_or_else(|| "settings.json".to_string()));
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(settings, seed, DEFAULT_SAVE_PATH);
    game.set_idle_mode(true);

    for frame in 0..frames {
        let commands: &[Command] = if frame + 1 == frames {
            &[Command::Save, Command::Quit]
        } else {
            &[]
        };
        if game.frame(commands, SIM_DT) == FrameOutcome::Quit {
            break;
        }

        for event in game.events() {
            match event {
                GameEvent::LevelUp { .. } | GameEvent::ShipHit { .. } | GameEvent::GameOver => {
                    log::info!("Frame {}: {:?}", frame, event)
                }
                _ => log::debug!("Frame {}: {:?}", frame, event),
            }
        }

        if !game.state().game_active() {
            break;
        }
    }

    let state = game.state();
    println!(
        "Level {} | Score {} | High {} | Lives {}",
        state.progression.level, state.stats.score, state.stats.high_score, state.stats.ships_left
    );
}

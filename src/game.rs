//! Command-level orchestration
//!
//! `Game` sits between the host (window, input devices, renderer, audio)
//! and the simulation. It turns commands into tick input, runs fixed
//! timestep ticks for the elapsed frame time, and owns the side effects the
//! simulation must not do itself: saving, loading and quitting.

use std::path::{Path, PathBuf};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::Command;
use crate::persistence::{self, PersistenceError, SaveData};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, progression, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Stop immediately; nothing is saved
    Quit,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    save_path: PathBuf,
    /// Events from every tick run during the last frame
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: Settings, seed: u64, save_path: impl AsRef<Path>) -> Self {
        Self {
            state: GameState::new(settings, seed),
            input: TickInput::default(),
            accumulator: 0.0,
            save_path: save_path.as_ref().to_path_buf(),
            events: Vec::new(),
        }
    }

    /// Read-only view for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Let the autopilot play
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Run one frame: apply commands in order, then advance the simulation
    /// by `elapsed` seconds of fixed ticks.
    pub fn frame(&mut self, commands: &[Command], elapsed: f32) -> FrameOutcome {
        for &command in commands {
            match command {
                Command::Quit => {
                    log::info!("Quit requested");
                    return FrameOutcome::Quit;
                }
                Command::Save => {
                    if let Err(e) = self.save() {
                        log::warn!("Save failed: {}", e);
                    }
                }
                Command::Load => {
                    if let Err(e) = self.load() {
                        log::warn!("Load failed: {}", e);
                    }
                }
                Command::MoveLeftStart => self.input.move_left = Some(true),
                Command::MoveLeftStop => self.input.move_left = Some(false),
                Command::MoveRightStart => self.input.move_right = Some(true),
                Command::MoveRightStop => self.input.move_right = Some(false),
                Command::Fire => self.input.fire += 1,
            }
        }

        self.update(elapsed);
        FrameOutcome::Continue
    }

    /// Run simulation ticks
    fn update(&mut self, elapsed: f32) {
        self.events.clear();
        self.accumulator += elapsed.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.events.extend_from_slice(&self.state.events);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.move_left = None;
            self.input.move_right = None;
            self.input.fire = 0;
        }
    }

    /// Save level, score and health
    pub fn save(&self) -> Result<(), PersistenceError> {
        let data = SaveData {
            level: self.state.progression.level,
            score: self.state.stats.score,
            health: self.state.stats.ships_left,
        };
        persistence::save(&self.save_path, &data)
    }

    /// Load level, score and health; the state is untouched on failure
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        let data = persistence::load(&self.save_path)?;
        progression::restore(&mut self.state, data.level, data.score, data.health);
        self.input.fire = 0;
        log::info!(
            "Game loaded (level {}, score {}, health {})",
            data.level,
            data.score,
            data.health
        );
        Ok(())
    }
}

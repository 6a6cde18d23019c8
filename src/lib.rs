//! Alien Invasion - simulation core for a fleet-shooter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet, collisions, bonuses, progression)
//! - `persistence`: Save/load of level, score and health
//! - `settings`: Static game configuration
//! - `input`: Abstract player commands
//! - `game`: Command-level orchestration around the simulation (save/load/quit)

pub mod game;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use game::{FrameOutcome, Game};
pub use input::Command;
pub use persistence::{PersistenceError, SaveData, SaveDataError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Starting lives
    pub const SHIP_LIMIT: u32 = 3;

    /// Bullet height (width comes from settings and power-ups)
    pub const BULLET_HEIGHT: f32 = 15.0;
    /// Side length of a bonus pickup
    pub const BONUS_SIZE: f32 = 50.0;
}

/// Convert a duration in seconds to whole simulation ticks (at least one)
#[inline]
pub fn secs_to_ticks(secs: f32) -> u64 {
    ((secs / consts::SIM_DT).round() as u64).max(1)
}

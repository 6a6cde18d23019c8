//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering, audio or file I/O

pub mod bonus;
pub mod collision;
pub mod fleet;
pub mod progression;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BulletHit, bullet_alien_hits};
pub use fleet::Fleet;
pub use progression::Progression;
pub use rect::Rect;
pub use state::{
    ActiveEffects, Alien, Bonus, BonusKind, Bullet, GameEvent, GamePhase, GameState, GameStats,
    Ship,
};
pub use tick::{TickInput, ship_hit, tick};

//! Game state and core simulation types
//!
//! One `GameState` is the whole session: every system reads and writes it
//! through `&mut`, one phase after another, within a single tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fleet::Fleet;
use super::progression::Progression;
use super::rect::Rect;
use crate::consts::BULLET_HEIGHT;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Pacing pause after losing a life; nothing advances
    Stunned,
    /// Run ended; state is frozen until a load
    GameOver,
}

/// Bonus pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    Life,
    Shield,
    PowerBullet,
}

/// Side effects of a tick, for the audio/render collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired,
    AlienDestroyed { points: u32 },
    BonusSpawned(BonusKind),
    BonusCollected(BonusKind),
    /// A life was lost
    ShipHit { ships_left: u32 },
    LevelUp { level: u32 },
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// Ship at the bottom center of the screen
    pub fn new(settings: &Settings) -> Self {
        Self {
            rect: Rect::from_midbottom(
                Vec2::new(settings.screen_width / 2.0, settings.screen_height),
                settings.ship_size,
            ),
            moving_left: false,
            moving_right: false,
        }
    }

    /// Put the ship back at the bottom center
    pub fn center(&mut self, settings: &Settings) {
        self.rect = Rect::from_midbottom(
            Vec2::new(settings.screen_width / 2.0, settings.screen_height),
            self.rect.size,
        );
    }

    /// Apply the movement flags, staying inside the screen
    pub fn update(&mut self, settings: &Settings, dt: f32) {
        let step = settings.ship_speed * dt;
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.rect.pos.x += step;
        }
        if self.moving_left && self.rect.left() > 0.0 {
            self.rect.pos.x -= step;
        }
        let max_x = (settings.screen_width - self.rect.size.x).max(0.0);
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
    }
}

/// A bullet in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub rect: Rect,
    /// Upward speed (pixels/second), fixed at fire time
    pub speed: f32,
}

impl Bullet {
    /// Bullet leaving the ship's nose
    pub fn fire(id: u32, ship: &Ship, width: f32, speed: f32) -> Self {
        Self {
            id,
            rect: Rect::from_midtop(
                Vec2::new(ship.rect.center_x(), ship.rect.top()),
                Vec2::new(width, BULLET_HEIGHT),
            ),
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.rect.pos.y -= self.speed * dt;
    }

    /// Fully past the top edge
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

/// A single alien; movement is driven by the owning [`Fleet`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub id: u32,
    pub rect: Rect,
}

impl Alien {
    /// Touching either vertical screen edge
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0.0
    }
}

/// A falling bonus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub id: u32,
    pub kind: BonusKind,
    pub rect: Rect,
    /// Falling speed (pixels/second)
    pub speed: f32,
}

impl Bonus {
    pub fn advance(&mut self, dt: f32) {
        self.rect.pos.y += self.speed * dt;
    }
}

/// Timed effects on the ship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    /// Tick at which the shield runs out
    pub shield_until: Option<u64>,
}

impl ActiveEffects {
    pub fn shield_active(&self) -> bool {
        self.shield_until.is_some()
    }

    /// Drop the shield once its end tick is reached
    pub fn expire(&mut self, now: u64) -> bool {
        match self.shield_until {
            Some(end) if now >= end => {
                self.shield_until = None;
                true
            }
            _ => false,
        }
    }
}

/// Lives and score
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub high_score: u64,
}

impl GameStats {
    pub fn new(ships_left: u32) -> Self {
        Self {
            ships_left,
            score: 0,
            high_score: 0,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(u64::from(points));
        self.high_score = self.high_score.max(self.score);
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub progression: Progression,
    pub stats: GameStats,
    pub phase: GamePhase,
    /// Stun ticks remaining (only meaningful while `Stunned`)
    pub stun_ticks: u64,
    /// Simulation tick counter (the clock for timed effects)
    pub time_ticks: u64,
    pub ship: Ship,
    /// Bullets in firing order
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub bonuses: Vec<Bonus>,
    pub effects: ActiveEffects,
    /// Width of newly fired bullets
    pub bullet_width: f32,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            progression: Progression::new(&settings),
            stats: GameStats::new(settings.ship_limit),
            phase: GamePhase::Playing,
            stun_ticks: 0,
            time_ticks: 0,
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            fleet: Fleet::default(),
            bonuses: Vec::new(),
            effects: ActiveEffects::default(),
            bullet_width: settings.bullet_width,
            events: Vec::new(),
            next_id: 1,
            settings,
        };

        state.rebuild_fleet();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the simulation is still running (not game over)
    pub fn game_active(&self) -> bool {
        self.phase != GamePhase::GameOver
    }

    /// Replace the fleet with a fresh formation
    pub fn rebuild_fleet(&mut self) {
        let layout = Fleet::layout(&self.settings);
        let mut aliens = Vec::with_capacity(layout.len());
        for rect in layout {
            let id = self.next_entity_id();
            aliens.push(Alien { id, rect });
        }
        self.fleet.aliens = aliens;
    }

    /// Fire a bullet if under the cap. Returns false when the shot was dropped.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        let id = self.next_entity_id();
        let bullet = Bullet::fire(id, &self.ship, self.bullet_width, self.progression.bullet_speed);
        self.bullets.push(bullet);
        self.events.push(GameEvent::BulletFired);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_fleet_and_lives() {
        let state = GameState::new(Settings::default(), 1);
        assert!(!state.fleet.is_empty());
        assert_eq!(state.stats.ships_left, crate::consts::SHIP_LIMIT);
        assert_eq!(state.progression.level, 1);
        assert!(state.game_active());
    }

    #[test]
    fn test_fire_respects_cap() {
        let mut state = GameState::new(Settings::default(), 1);
        for _ in 0..state.settings.bullets_allowed {
            assert!(state.fire_bullet());
        }
        assert!(!state.fire_bullet());
        assert_eq!(state.bullets.len(), state.settings.bullets_allowed);
    }

    #[test]
    fn test_ship_stays_on_screen() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.moving_left = true;
        for _ in 0..1000 {
            ship.update(&settings, 1.0 / 60.0);
        }
        assert_eq!(ship.rect.left(), 0.0);
    }

    #[test]
    fn test_shield_expiry() {
        let mut effects = ActiveEffects {
            shield_until: Some(10),
        };
        assert!(!effects.expire(9));
        assert!(effects.shield_active());
        assert!(effects.expire(10));
        assert!(!effects.shield_active());
    }
}

//! Game settings
//!
//! Static configuration for a session. Everything that changes with level
//! lives in [`crate::sim::Progression`] and is derived from these base values.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Static game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    pub ship_size: Vec2,
    /// Horizontal ship speed (pixels/second), never scaled by level
    pub ship_speed: f32,
    /// Lives at the start of a run
    pub ship_limit: u32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Starting bullet width (doubled by power bullets)
    pub bullet_width: f32,
    pub bullets_allowed: usize,

    // === Aliens ===
    pub alien_size: Vec2,
    pub alien_speed: f32,
    /// Pixels the fleet drops on each edge touch
    pub fleet_drop_speed: f32,
    pub alien_points: u32,

    // === Progression ===
    /// Multiplier applied to bullet/alien/drop speeds on each level-up
    pub speedup_scale: f32,
    /// Multiplier applied to alien point value on each level-up
    pub score_scale: f32,
    /// Speeds never exceed base * this multiplier
    pub max_speed_multiplier: f32,

    // === Bonuses ===
    /// Chance that a destroyed alien drops a bonus (0.0 - 1.0)
    pub bonus_probability: f64,
    /// Falling speed (pixels/second)
    pub bonus_speed: f32,
    /// Shield duration (seconds)
    pub shield_duration: f32,
    /// Whether power bullets are part of the spawn pool
    pub spawn_power_bullets: bool,

    // === Pacing ===
    /// Stun after losing a life (seconds)
    pub hit_pause: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,

            ship_size: Vec2::new(60.0, 48.0),
            ship_speed: 300.0,
            ship_limit: crate::consts::SHIP_LIMIT,

            bullet_speed: 600.0,
            bullet_width: 3.0,
            bullets_allowed: 3,

            alien_size: Vec2::new(60.0, 58.0),
            alien_speed: 60.0,
            fleet_drop_speed: 10.0,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,
            max_speed_multiplier: 4.0,

            bonus_probability: 0.1,
            bonus_speed: 120.0,
            shield_duration: 5.0,
            spawn_power_bullets: false,

            hit_pause: 0.5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Screen size as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }
}

//! Difficulty progression
//!
//! Level-dependent values are never stored on their own: they are derived
//! from the base settings by applying one speed-up step per level gained.
//! That makes a loaded level reproduce exactly the speeds it had in play.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use crate::settings::Settings;

/// Level-scaled values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    /// Current level (starts at 1)
    pub level: u32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    /// Points for destroying one alien
    pub alien_points: u32,
}

impl Progression {
    /// Level 1 values
    pub fn new(settings: &Settings) -> Self {
        Self {
            level: 1,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            fleet_drop_speed: settings.fleet_drop_speed,
            alien_points: settings.alien_points,
        }
    }

    /// Values for `level`, replayed step by step from the base settings.
    ///
    /// The replay stops early once a step no longer changes anything (speeds
    /// at their cap, points saturated), so huge saved levels load at once.
    pub fn for_level(settings: &Settings, level: u32) -> Self {
        let mut progression = Self::new(settings);
        for _ in 1..level.max(1) {
            let before = progression.clone();
            progression.increase_speed(settings);
            if progression == before {
                break;
            }
        }
        progression.level = level.max(1);
        progression
    }

    /// One discrete speed-up step. Ship speed is unaffected.
    pub fn increase_speed(&mut self, settings: &Settings) {
        let scale = settings.speedup_scale;
        let cap = settings.max_speed_multiplier;
        self.bullet_speed = (self.bullet_speed * scale).min(settings.bullet_speed * cap);
        self.alien_speed = (self.alien_speed * scale).min(settings.alien_speed * cap);
        self.fleet_drop_speed =
            (self.fleet_drop_speed * scale).min(settings.fleet_drop_speed * cap);
        self.alien_points = (self.alien_points as f32 * settings.score_scale).round() as u32;
    }
}

/// Level-up: clear bullets, new fleet, next level, faster speeds
pub fn level_up(state: &mut GameState) {
    state.bullets.clear();
    state.rebuild_fleet();
    state.progression.level = state.progression.level.saturating_add(1);
    state.progression.increase_speed(&state.settings);

    let level = state.progression.level;
    log::info!(
        "Level {}: alien speed {:.1}, bullet speed {:.1}, {} aliens",
        level,
        state.progression.alien_speed,
        state.progression.bullet_speed,
        state.fleet.len()
    );
    state.events.push(GameEvent::LevelUp { level });
}

/// Resume from a saved level, score and life count.
///
/// Speeds are replayed from base settings, the fleet direction resets, and
/// bullets and aliens are rebuilt. A run with lives left resumes play.
pub fn restore(state: &mut GameState, level: u32, score: u64, ships_left: u32) {
    state.progression = Progression::for_level(&state.settings, level);
    state.stats.score = score;
    state.stats.high_score = state.stats.high_score.max(score);
    state.stats.ships_left = ships_left;

    state.fleet.aliens.clear();
    state.fleet.direction = 1.0;
    state.bullets.clear();
    state.rebuild_fleet();

    state.stun_ticks = 0;
    state.phase = if ships_left > 0 {
        GamePhase::Playing
    } else {
        GamePhase::GameOver
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_matches_reached_level() {
        let mut played = GameState::new(Settings::default(), 1);
        for _ in 0..4 {
            level_up(&mut played);
        }

        let mut loaded = GameState::new(Settings::default(), 2);
        loaded.fire_bullet();
        restore(&mut loaded, 5, 900, 2);

        assert_eq!(loaded.progression, played.progression);
        assert_eq!(loaded.stats.score, 900);
        assert_eq!(loaded.stats.ships_left, 2);
        assert!(loaded.bullets.is_empty());
        assert_eq!(loaded.fleet.len(), played.fleet.len());
        assert!(loaded.game_active());
    }

    #[test]
    fn test_increase_speed_scales_and_keeps_ship() {
        let settings = Settings::default();
        let mut p = Progression::new(&settings);
        p.increase_speed(&settings);
        assert!((p.alien_speed - settings.alien_speed * 1.1).abs() < 1e-4);
        assert!((p.bullet_speed - settings.bullet_speed * 1.1).abs() < 1e-3);
        assert!((p.fleet_drop_speed - settings.fleet_drop_speed * 1.1).abs() < 1e-4);
        assert_eq!(p.alien_points, 75);
    }

    #[test]
    fn test_speed_is_capped() {
        let settings = Settings::default();
        let p = Progression::for_level(&settings, 200);
        assert_eq!(p.level, 200);
        assert_eq!(p.alien_speed, settings.alien_speed * settings.max_speed_multiplier);
        assert_eq!(p.bullet_speed, settings.bullet_speed * settings.max_speed_multiplier);
    }

    #[test]
    fn test_max_level_replay_is_bounded() {
        let settings = Settings::default();
        let start = std::time::Instant::now();
        let p = Progression::for_level(&settings, u32::MAX);
        assert!(start.elapsed() < std::time::Duration::from_secs(1));

        assert_eq!(p.level, u32::MAX);
        assert_eq!(p.alien_speed, settings.alien_speed * settings.max_speed_multiplier);
        assert_eq!(
            p.fleet_drop_speed,
            settings.fleet_drop_speed * settings.max_speed_multiplier
        );
        assert_eq!(p.alien_points, u32::MAX);
        // Same values as a level far past saturation
        assert_eq!(
            Progression {
                level: 500,
                ..p.clone()
            },
            Progression::for_level(&settings, 500)
        );
    }

    #[test]
    fn test_unit_scales_stop_immediately() {
        let settings = Settings {
            speedup_scale: 1.0,
            score_scale: 1.0,
            ..Default::default()
        };
        let p = Progression::for_level(&settings, u32::MAX);
        assert_eq!(
            p,
            Progression {
                level: u32::MAX,
                ..Progression::new(&settings)
            }
        );
    }

    #[test]
    fn test_level_up_at_max_level_saturates() {
        let mut state = GameState::new(Settings::default(), 3);
        restore(&mut state, u32::MAX, 0, 3);
        level_up(&mut state);
        assert_eq!(state.progression.level, u32::MAX);
        assert!(state.events.contains(&GameEvent::LevelUp { level: u32::MAX }));
    }

    #[test]
    fn test_replay_matches_play() {
        let settings = Settings::default();
        let mut played = Progression::new(&settings);
        for _ in 0..6 {
            played.increase_speed(&settings);
            played.level += 1;
        }
        assert_eq!(Progression::for_level(&settings, 7), played);
    }

    #[test]
    fn test_level_up_on_state() {
        let mut state = GameState::new(Settings::default(), 3);
        state.fire_bullet();
        state.fleet.aliens.clear();

        level_up(&mut state);

        assert_eq!(state.progression.level, 2);
        assert!(state.bullets.is_empty());
        assert!(!state.fleet.is_empty());
        assert!(state.events.contains(&GameEvent::LevelUp { level: 2 }));
    }
}

//! Bonus drops: spawn rolls, falling motion and pickup effects

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::{Bonus, BonusKind, GameEvent, GameState};
use crate::consts::BONUS_SIZE;
use crate::secs_to_ticks;

/// Roll for a bonus drop from one destroyed alien
pub fn roll_spawn(state: &mut GameState) -> Option<BonusKind> {
    let roll: f64 = state.rng.random();
    if roll >= state.settings.bonus_probability {
        return None;
    }

    let kind = if state.settings.spawn_power_bullets {
        match state.rng.random_range(0..3u32) {
            0 => BonusKind::Life,
            1 => BonusKind::Shield,
            _ => BonusKind::PowerBullet,
        }
    } else if state.rng.random_bool(0.5) {
        BonusKind::Life
    } else {
        BonusKind::Shield
    };
    Some(kind)
}

/// Drop a bonus at a random x just above the top of the screen
pub fn spawn(state: &mut GameState, kind: BonusKind) {
    let max_x = (state.settings.screen_width - BONUS_SIZE).max(0.0);
    let x = if max_x > 0.0 {
        state.rng.random_range(0.0..=max_x)
    } else {
        0.0
    };

    let id = state.next_entity_id();
    state.bonuses.push(Bonus {
        id,
        kind,
        rect: Rect::new(Vec2::new(x, -BONUS_SIZE), Vec2::splat(BONUS_SIZE)),
        speed: state.settings.bonus_speed,
    });
    log::debug!("Bonus {:?} spawned at x={:.0}", kind, x);
    state.events.push(GameEvent::BonusSpawned(kind));
}

/// Move bonuses down and drop the ones that fell off the bottom
pub fn advance(state: &mut GameState, dt: f32) {
    for bonus in &mut state.bonuses {
        bonus.advance(dt);
    }
    let bottom = state.settings.screen_height;
    state.bonuses.retain(|b| b.rect.top() < bottom);
}

/// Apply a collected bonus
pub fn apply(state: &mut GameState, kind: BonusKind) {
    match kind {
        BonusKind::Life => {
            state.stats.ships_left = state.stats.ships_left.saturating_add(1);
        }
        BonusKind::Shield => {
            // Re-collecting restarts the timer rather than adding to it
            let end = state.time_ticks + secs_to_ticks(state.settings.shield_duration);
            state.effects.shield_until = Some(end);
        }
        BonusKind::PowerBullet => {
            state.bullet_width = (state.bullet_width * 2.0).min(state.settings.screen_width);
        }
    }
    log::debug!("Bonus {:?} collected", kind);
    state.events.push(GameEvent::BonusCollected(kind));
}

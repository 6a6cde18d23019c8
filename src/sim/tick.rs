//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. One call
//! runs the phases of a frame strictly in order:
//! input → ship → bullets (vs aliens, progression) → fleet (vs ship, bottom)
//! → bonuses (fall, pickup).

use super::collision::{
    alien_reached_bottom, bullet_alien_hits, remove_indices, ship_alien_contact,
    ship_bonus_pickups,
};
use super::state::{GameEvent, GamePhase, GameState};
use super::{bonus, progression};
use crate::secs_to_ticks;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// New state of the move-left key, if it changed
    pub move_left: Option<bool>,
    /// New state of the move-right key, if it changed
    pub move_right: Option<bool>,
    /// Shots requested this tick
    pub fire: u32,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let mut input = input.clone();
    if input.idle_mode && state.phase == GamePhase::Playing {
        autopilot(state, &mut input);
    }
    let input = &input;

    // Key state is tracked in every phase so releases are never lost
    if let Some(pressed) = input.move_left {
        state.ship.moving_left = pressed;
    }
    if let Some(pressed) = input.move_right {
        state.ship.moving_right = pressed;
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    if state.effects.expire(state.time_ticks) {
        log::debug!("Shield expired at tick {}", state.time_ticks);
    }

    if state.phase == GamePhase::Stunned {
        state.stun_ticks = state.stun_ticks.saturating_sub(1);
        if state.stun_ticks == 0 {
            state.phase = GamePhase::Playing;
        }
        return;
    }

    for _ in 0..input.fire {
        // Shots over the cap are dropped
        state.fire_bullet();
    }

    state.ship.update(&state.settings, dt);
    update_bullets(state, dt);
    update_aliens(state, dt);

    if state.phase == GamePhase::GameOver {
        return;
    }
    update_bonuses(state, dt);
}

/// Move bullets, resolve hits, and level up when the fleet is gone
fn update_bullets(state: &mut GameState, dt: f32) {
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    state.bullets.retain(|b| !b.is_off_screen());

    let hits = bullet_alien_hits(&state.bullets, &state.fleet.aliens);
    if !hits.is_empty() {
        let bullet_idx: Vec<usize> = hits.iter().map(|h| h.bullet).collect();
        let alien_idx: Vec<usize> = hits.iter().map(|h| h.alien).collect();
        remove_indices(&mut state.bullets, &bullet_idx);
        remove_indices(&mut state.fleet.aliens, &alien_idx);

        for _ in &hits {
            let points = state.progression.alien_points;
            state.stats.add_score(points);
            state.events.push(GameEvent::AlienDestroyed { points });

            if let Some(kind) = bonus::roll_spawn(state) {
                bonus::spawn(state, kind);
            }
        }
    }

    // Runs at most once per tick, even when the new fleet is empty too
    if state.fleet.is_empty() {
        progression::level_up(state);
    }
}

/// Move the fleet and check it against the ship and the bottom edge
fn update_aliens(state: &mut GameState, dt: f32) {
    state.fleet.advance(
        state.settings.screen_width,
        state.progression.alien_speed,
        state.progression.fleet_drop_speed,
        dt,
    );

    let mut hit = false;
    if ship_alien_contact(&state.ship.rect, &state.fleet.aliens) {
        hit = ship_hit(state);
    }
    if !hit && alien_reached_bottom(&state.fleet.aliens, state.settings.screen_height) {
        ship_hit(state);
    }
}

/// Let bonuses fall and collect the ones touching the ship
fn update_bonuses(state: &mut GameState, dt: f32) {
    bonus::advance(state, dt);

    let picked = ship_bonus_pickups(&state.ship.rect, &state.bonuses);
    let kinds: Vec<_> = picked.iter().map(|&i| state.bonuses[i].kind).collect();
    remove_indices(&mut state.bonuses, &picked);
    for kind in kinds {
        bonus::apply(state, kind);
    }
}

/// The ship was hit by an alien or the fleet reached the bottom.
///
/// Returns false when the shield absorbed the hit.
pub fn ship_hit(state: &mut GameState) -> bool {
    if state.effects.shield_active() {
        return false;
    }

    if state.stats.ships_left == 0 {
        game_over(state);
        return true;
    }

    state.stats.ships_left -= 1;
    state.fleet.aliens.clear();
    state.bullets.clear();
    state.rebuild_fleet();
    state.ship.center(&state.settings);

    let ships_left = state.stats.ships_left;
    log::info!("Ship hit, {} left", ships_left);
    state.events.push(GameEvent::ShipHit { ships_left });

    if ships_left == 0 {
        game_over(state);
    } else {
        state.phase = GamePhase::Stunned;
        state.stun_ticks = secs_to_ticks(state.settings.hit_pause);
    }
    true
}

fn game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over at level {} with score {}",
        state.progression.level,
        state.stats.score
    );
    state.events.push(GameEvent::GameOver);
}

/// Demo player: chase bonuses when they are close, otherwise line up under
/// the nearest alien and shoot
fn autopilot(state: &GameState, input: &mut TickInput) {
    let ship_x = state.ship.rect.center_x();
    let half_screen = state.settings.screen_height / 2.0;

    let bonus_target = state
        .bonuses
        .iter()
        .filter(|b| b.rect.bottom() > half_screen)
        .map(|b| b.rect.center_x())
        .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()));

    let alien_target = state
        .fleet
        .aliens
        .iter()
        .map(|a| a.rect.center_x())
        .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()));

    if let Some(target) = bonus_target.or(alien_target) {
        let dead_zone = 5.0;
        input.move_left = Some(target < ship_x - dead_zone);
        input.move_right = Some(target > ship_x + dead_zone);
    }

    let lined_up = state
        .fleet
        .aliens
        .iter()
        .any(|a| a.rect.left() <= ship_x && ship_x <= a.rect.right());
    if lined_up {
        input.fire = input.fire.max(1);
    }
}

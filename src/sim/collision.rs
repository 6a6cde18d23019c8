//! Collision detection between bullets, aliens, the ship and bonuses
//!
//! Detection only: these functions report what overlaps and leave removal
//! and side effects to the tick.

use super::rect::Rect;
use super::state::{Alien, Bonus, Bullet};

/// A bullet that destroyed an alien
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletHit {
    pub bullet: usize,
    pub alien: usize,
}

/// Pair bullets with the aliens they hit.
///
/// Bullets are resolved in firing order. Each bullet takes at most one alien
/// and each alien is taken by at most one bullet.
pub fn bullet_alien_hits(bullets: &[Bullet], aliens: &[Alien]) -> Vec<BulletHit> {
    let mut taken = vec![false; aliens.len()];
    let mut hits = Vec::new();

    for (bullet_idx, bullet) in bullets.iter().enumerate() {
        let target = aliens
            .iter()
            .enumerate()
            .find(|(i, alien)| !taken[*i] && bullet.rect.intersects(&alien.rect));
        if let Some((alien_idx, _)) = target {
            taken[alien_idx] = true;
            hits.push(BulletHit {
                bullet: bullet_idx,
                alien: alien_idx,
            });
        }
    }
    hits
}

/// Any alien touching the ship
pub fn ship_alien_contact(ship: &Rect, aliens: &[Alien]) -> bool {
    aliens.iter().any(|a| a.rect.intersects(ship))
}

/// Any alien at or past the bottom of the screen (stops at the first)
pub fn alien_reached_bottom(aliens: &[Alien], screen_height: f32) -> bool {
    aliens.iter().any(|a| a.rect.bottom() >= screen_height)
}

/// Indices of every bonus the ship is touching
pub fn ship_bonus_pickups(ship: &Rect, bonuses: &[Bonus]) -> Vec<usize> {
    bonuses
        .iter()
        .enumerate()
        .filter(|(_, b)| b.rect.intersects(ship))
        .map(|(i, _)| i)
        .collect()
}

/// Remove the entries at `indices` (any order, no duplicates), keeping the
/// order of what remains
pub fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    for idx in sorted.into_iter().rev() {
        items.remove(idx);
    }
}

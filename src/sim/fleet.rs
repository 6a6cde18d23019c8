//! Alien fleet: formation layout and rigid-body movement
//!
//! The fleet moves as one block. All aliens share a single horizontal
//! direction; when any of them touches a side of the screen the whole fleet
//! drops and reverses, once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Alien;
use crate::settings::Settings;

/// The alien swarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    /// Shared horizontal direction, +1.0 (right) or -1.0 (left)
    pub direction: f32,
}

impl Default for Fleet {
    fn default() -> Self {
        Self {
            aliens: Vec::new(),
            direction: 1.0,
        }
    }
}

impl Fleet {
    /// Grid positions for a fresh formation.
    ///
    /// Aliens are spaced one alien-width apart horizontally and one
    /// alien-height apart vertically, leaving a margin at the sides and room
    /// above the ship. Returns no rects when the screen is too small.
    pub fn layout(settings: &Settings) -> Vec<Rect> {
        let size = settings.alien_size;
        if size.x <= 0.0 || size.y <= 0.0 {
            return Vec::new();
        }

        let available_x = settings.screen_width - 2.0 * size.x;
        let available_y = settings.screen_height - 3.0 * size.y - settings.ship_size.y;
        if available_x <= 0.0 || available_y <= 0.0 {
            return Vec::new();
        }

        let cols = (available_x / (2.0 * size.x)).floor() as usize;
        let rows = (available_y / (2.0 * size.y)).floor() as usize;

        let mut rects = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let x = size.x + 2.0 * size.x * col as f32;
                let y = size.y + 2.0 * size.y * row as f32;
                rects.push(Rect::new(Vec2::new(x, y), size));
            }
        }
        rects
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    /// Any alien touching a vertical edge
    pub fn check_edges(&self, screen_width: f32) -> bool {
        self.aliens.iter().any(|a| a.check_edges(screen_width))
    }

    /// Drop every alien and reverse the shared direction
    pub fn change_direction(&mut self, drop: f32) {
        for alien in &mut self.aliens {
            alien.rect.pos.y += drop;
        }
        self.direction = -self.direction;
    }

    /// Advance the formation one tick.
    ///
    /// Returns true if an edge touch made the fleet drop and reverse.
    pub fn advance(&mut self, screen_width: f32, speed: f32, drop: f32, dt: f32) -> bool {
        let edge = self.check_edges(screen_width);
        if edge {
            self.change_direction(drop);
        }

        let dx = speed * self.direction * dt;
        for alien in &mut self.aliens {
            alien.rect.pos.x += dx;
        }
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fleet_at(xs: &[f32], size: Vec2) -> Fleet {
        Fleet {
            aliens: xs
                .iter()
                .enumerate()
                .map(|(i, &x)| Alien {
                    id: i as u32,
                    rect: Rect::new(Vec2::new(x, 100.0), size),
                })
                .collect(),
            direction: 1.0,
        }
    }

    #[test]
    fn test_default_layout() {
        let settings = Settings::default();
        // (1200 - 120) / 120 = 9 columns, (800 - 174 - 48) / 116 = 4 rows
        let rects = Fleet::layout(&settings);
        assert_eq!(rects.len(), 9 * 4);
        assert_eq!(rects[0].pos, Vec2::new(60.0, 58.0));
        assert_eq!(rects[1].pos, Vec2::new(180.0, 58.0));
        assert_eq!(rects[9].pos, Vec2::new(60.0, 174.0));
    }

    #[test]
    fn test_degenerate_screen_gives_empty_fleet() {
        let settings = Settings {
            screen_width: 100.0,
            screen_height: 100.0,
            ..Default::default()
        };
        assert!(Fleet::layout(&settings).is_empty());
    }

    #[test]
    fn test_moves_in_shared_direction() {
        let mut fleet = fleet_at(&[100.0, 300.0], Vec2::new(60.0, 58.0));
        let edge = fleet.advance(1200.0, 60.0, 10.0, 1.0);
        assert!(!edge);
        assert_eq!(fleet.aliens[0].rect.pos.x, 160.0);
        assert_eq!(fleet.aliens[1].rect.pos.x, 360.0);
    }

    #[test]
    fn test_edge_drops_and_reverses_once() {
        // Two aliens touching the right edge at the same time
        let size = Vec2::new(60.0, 58.0);
        let mut fleet = fleet_at(&[500.0, 1140.0, 1140.0], size);
        let edge = fleet.advance(1200.0, 60.0, 10.0, 1.0);
        assert!(edge);
        assert_eq!(fleet.direction, -1.0);
        for alien in &fleet.aliens {
            assert_eq!(alien.rect.pos.y, 110.0);
        }
        assert_eq!(fleet.aliens[0].rect.pos.x, 440.0);
    }

    proptest! {
        #[test]
        fn prop_edge_touch_is_one_shared_event(
            xs in proptest::collection::vec(0.0f32..1140.0, 1..20),
            dir in prop_oneof![Just(1.0f32), Just(-1.0f32)],
        ) {
            let size = Vec2::new(60.0, 58.0);
            let mut fleet = fleet_at(&xs, size);
            fleet.direction = dir;
            let touching = fleet.check_edges(1200.0);

            let edge = fleet.advance(1200.0, 60.0, 10.0, 1.0 / 60.0);

            prop_assert_eq!(edge, touching);
            let expected_dir = if touching { -dir } else { dir };
            prop_assert_eq!(fleet.direction, expected_dir);
            let expected_y = if touching { 110.0 } else { 100.0 };
            for alien in &fleet.aliens {
                prop_assert_eq!(alien.rect.pos.y, expected_y);
            }
        }
    }
}

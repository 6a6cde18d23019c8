//! Axis-aligned rectangle geometry for sprites
//!
//! Screen space: origin at the top-left corner, y grows downward.
//! A rect is stored as its top-left corner plus size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Build a rect from its bottom-center point
    pub fn from_midbottom(midbottom: Vec2, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(midbottom.x - size.x / 2.0, midbottom.y - size.y),
            size,
        }
    }

    /// Build a rect from its top-center point
    pub fn from_midtop(midtop: Vec2, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(midtop.x - size.x / 2.0, midtop.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Overlap test. Touching edges do not count as an intersection.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

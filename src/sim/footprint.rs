//! Axis-aligned collision footprints
//!
//! Sprites are positioned by their center, so a footprint is a center plus
//! half extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Size;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub center: Vec2,
    pub half: Vec2,
}

impl Footprint {
    pub fn new(center: Vec2, size: Size) -> Self {
        Self {
            center,
            half: size.half(),
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Strict overlap; touching edges do not count
    pub fn intersects(&self, other: &Footprint) -> bool {
        let d = (self.center - other.center).abs();
        d.x < self.half.x + other.half.x && d.y < self.half.y + other.half.y
    }

    /// Horizontal extents overlap (used for landing checks)
    pub fn overlaps_x(&self, other: &Footprint) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
    }
}

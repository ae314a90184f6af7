//! Platform pool and recycling
//!
//! A fixed number of platforms fake an endless tower: whenever one scrolls
//! far enough below the camera it is moved back above the view.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::UniformSource;
use crate::tuning::Span;

/// A platform slot in the pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Pool slot index (stable for the whole run)
    pub slot: usize,
    /// Center position in scroll space (y grows downward)
    pub pos: Vec2,
    pub active: bool,
    /// Set on the tick this platform was recycled, cleared on the next scan
    pub just_recycled: bool,
}

/// Owns every platform position; nothing else mutates them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformField {
    platforms: Vec<Platform>,
    spawn_x: Option<Span>,
    rise: Option<Span>,
}

impl PlatformField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out `count` platforms, one every `spacing` units starting at y = 0
    pub fn initialize(
        &mut self,
        count: usize,
        spawn_x: Span,
        spacing: f32,
        rise: Span,
        rng: &mut impl UniformSource,
    ) {
        debug_assert!(count > 0, "platform pool must not be empty");
        self.spawn_x = Some(spawn_x);
        self.rise = Some(rise);
        self.platforms = (0..count)
            .map(|slot| Platform {
                slot,
                pos: Vec2::new(
                    rng.uniform(spawn_x.min, spawn_x.max),
                    slot as f32 * spacing,
                ),
                active: true,
                just_recycled: false,
            })
            .collect();
        log::debug!("Laid out {} platforms, spacing {}", count, spacing);
    }

    /// Recycle every platform at or past `scroll_y + recycle_threshold`.
    ///
    /// Returns copies of the platforms recycled on this call, in slot order.
    pub fn tick(
        &mut self,
        scroll_y: f32,
        recycle_threshold: f32,
        rng: &mut impl UniformSource,
    ) -> Vec<Platform> {
        let (Some(spawn_x), Some(rise)) = (self.spawn_x, self.rise) else {
            debug_assert!(false, "PlatformField::tick before initialize");
            log::warn!("Platform tick before initialize ignored");
            return Vec::new();
        };

        for platform in &mut self.platforms {
            platform.just_recycled = false;
        }

        let due: Vec<usize> = self
            .platforms
            .iter()
            .filter(|p| p.active && p.pos.y >= scroll_y + recycle_threshold)
            .map(|p| p.slot)
            .collect();

        let mut recycled = Vec::with_capacity(due.len());
        for slot in due {
            let platform = &mut self.platforms[slot];
            platform.pos.y = scroll_y - rng.uniform(rise.min, rise.max);
            platform.pos.x = rng.uniform(spawn_x.min, spawn_x.max);
            platform.just_recycled = true;
            log::debug!(
                "Recycled platform {} to ({:.1}, {:.1})",
                slot,
                platform.pos.x,
                platform.pos.y
            );
            recycled.push(*platform);
        }
        recycled
    }

    /// The platform lowest on screen (maximum y). Ties resolve to the later slot.
    pub fn lowest(&self) -> Option<&Platform> {
        self.platforms
            .iter()
            .filter(|p| p.active)
            .fold(None, |lowest: Option<&Platform>, p| match lowest {
                Some(l) if p.pos.y < l.pos.y => Some(l),
                _ => Some(p),
            })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn get(&self, slot: usize) -> Option<&Platform> {
        self.platforms.get(slot)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.platforms.iter().filter(|p| p.active).count()
    }

    /// Place a platform directly. Hosts and tests use this to stage layouts.
    pub fn set_position(&mut self, slot: usize, pos: Vec2) {
        if let Some(platform) = self.platforms.get_mut(slot) {
            platform.pos = pos;
        }
    }
}

//! Contact and overlap detection for the arcade host
//!
//! Platforms are one-way: the player only collides with a platform's top
//! edge while falling onto it. Carrots never block; they only report overlap.

use crate::sim::{Footprint, ItemPool, PlatformField};
use crate::tuning::Size;

/// Result of a landing check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the player landed this step
    pub hit: bool,
    /// Platform slot landed on
    pub slot: usize,
    /// Y of the platform's top edge
    pub surface_y: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            slot: 0,
            surface_y: 0.0,
        }
    }
}

/// Check a falling player against a single platform's top edge.
///
/// `prev_bottom` is the player's bottom edge before this step's movement.
pub fn landing_on(prev_bottom: f32, player: &Footprint, platform: &Footprint) -> bool {
    let top = platform.top();
    prev_bottom <= top && player.bottom() >= top && player.overlaps_x(platform)
}

/// Find the highest platform the player landed on this step
pub fn player_platform_landing(
    prev_bottom: f32,
    player: &Footprint,
    platforms: &PlatformField,
    platform_size: Size,
) -> CollisionResult {
    platforms
        .platforms()
        .iter()
        .filter(|p| p.active)
        .map(|p| (p.slot, Footprint::new(p.pos, platform_size)))
        .filter(|(_, fp)| landing_on(prev_bottom, player, fp))
        .fold(CollisionResult::miss(), |best, (slot, fp)| {
            if !best.hit || fp.top() < best.surface_y {
                CollisionResult {
                    hit: true,
                    slot,
                    surface_y: fp.top(),
                }
            } else {
                best
            }
        })
}

/// Ids of active items overlapping the player
pub fn overlapping_items(player: &Footprint, items: &ItemPool) -> Vec<u32> {
    items
        .active()
        .filter(|item| item.footprint().intersects(player))
        .map(|item| item.id)
        .collect()
}

//! Carrots: spawning above recycled platforms and collection
//!
//! Items are pooled. A collected or expired carrot is deactivated, not freed,
//! and its id goes on a free list for the next spawn to pick up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::footprint::Footprint;
use super::platform::Platform;
use crate::tuning::Size;

/// A collectible carrot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub pos: Vec2,
    /// Collision footprint size (sprite bounds)
    pub size: Size,
    /// Participates in overlap detection
    pub active: bool,
    pub visible: bool,
    pub collected: bool,
}

impl Item {
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.pos, self.size)
    }
}

/// Item pool; also the spawner. Ids are indices into `items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPool {
    items: Vec<Item>,
    free_list: Vec<u32>,
}

impl ItemPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every item (run restart)
    pub fn clear(&mut self) {
        self.items.clear();
        self.free_list.clear();
    }

    /// Activate an item at `pos`, reusing a freed slot if any
    pub fn spawn_at(&mut self, pos: Vec2, size: Size) -> u32 {
        let fresh = Item {
            id: 0,
            pos,
            size,
            active: true,
            visible: true,
            collected: false,
        };

        if let Some(id) = self.free_list.pop() {
            self.items[id as usize] = Item { id, ..fresh };
            return id;
        }

        let id = self.items.len() as u32;
        self.items.push(Item { id, ..fresh });
        id
    }

    /// Place one carrot on top of a freshly recycled platform.
    ///
    /// The carrot sits one platform-height above the platform center.
    pub fn spawn_above(
        &mut self,
        platform: &Platform,
        platform_height: f32,
        size: Size,
    ) -> Option<u32> {
        if !platform.active {
            debug_assert!(false, "spawn above inactive platform {}", platform.slot);
            log::warn!("Ignored spawn above inactive platform {}", platform.slot);
            return None;
        }
        let pos = Vec2::new(platform.pos.x, platform.pos.y - platform_height);
        let id = self.spawn_at(pos, size);
        log::debug!("Spawned carrot {} at ({:.1}, {:.1})", id, pos.x, pos.y);
        Some(id)
    }

    /// Hide an item and remove it from overlap detection.
    /// Returns false if it was already inactive.
    pub fn deactivate(&mut self, id: u32) -> bool {
        match self.items.get_mut(id as usize) {
            Some(item) if item.active => {
                item.active = false;
                item.visible = false;
                item.collected = true;
                self.free_list.push(id);
                true
            }
            _ => false,
        }
    }

    /// Retire uncollected carrots at or below `limit_y` (scrolled off the
    /// bottom). Returns the expired ids in pool order.
    pub fn expire_below(&mut self, limit_y: f32) -> Vec<u32> {
        let mut expired = Vec::new();
        for item in self.items.iter_mut().filter(|i| i.active && i.pos.y >= limit_y) {
            item.active = false;
            item.visible = false;
            expired.push(item.id);
        }
        self.free_list.extend_from_slice(&expired);
        expired
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.get(id as usize)
    }

    /// Items currently registered for overlap detection
    pub fn active(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.active)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Counter sentinel before the first carrot is picked up
pub const NOT_STARTED: i32 = -1;

/// Counts carrots picked up during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTracker {
    collected: i32,
}

impl Default for CollectionTracker {
    fn default() -> Self {
        Self {
            collected: NOT_STARTED,
        }
    }
}

impl CollectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.collected = NOT_STARTED;
    }

    /// Overlap reaction: deactivate the item and bump the count.
    ///
    /// Returns the new count, or None if the item was already gone.
    pub fn collect(&mut self, items: &mut ItemPool, id: u32) -> Option<i32> {
        if !items.deactivate(id) {
            log::debug!("Overlap with inactive carrot {} ignored", id);
            return None;
        }
        self.collected += 1;
        log::debug!("Collected carrot {} (count {})", id, self.collected);
        Some(self.collected)
    }

    /// Raw count, including the `NOT_STARTED` sentinel
    pub fn count(&self) -> i32 {
        self.collected
    }

    /// Count for display; the sentinel shows as zero
    pub fn display_count(&self) -> i32 {
        self.collected.max(0)
    }

    pub fn label(&self) -> String {
        format!("Carrots: {}", self.display_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARROT: Size = Size::new(53.0, 79.0);

    fn platform(x: f32, y: f32) -> Platform {
        Platform {
            slot: 0,
            pos: Vec2::new(x, y),
            active: true,
            just_recycled: true,
        }
    }

    #[test]
    fn test_spawn_above_position() {
        let mut pool = ItemPool::new();
        let id = pool.spawn_above(&platform(150.0, -80.0), 47.0, CARROT).unwrap();
        let item = pool.get(id).unwrap();
        assert_eq!(item.pos, Vec2::new(150.0, -127.0));
        assert!(item.active && item.visible && !item.collected);
        assert_eq!(item.size, CARROT);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_spawn_above_inactive_platform_asserts() {
        let mut pool = ItemPool::new();
        let mut p = platform(0.0, 0.0);
        p.active = false;
        pool.spawn_above(&p, 47.0, CARROT);
    }

    #[test]
    fn test_collected_slot_is_reused() {
        let mut pool = ItemPool::new();
        let a = pool.spawn_at(Vec2::ZERO, CARROT);
        let b = pool.spawn_at(Vec2::ONE, CARROT);
        assert_ne!(a, b);

        assert!(pool.deactivate(a));
        let c = pool.spawn_at(Vec2::new(5.0, 5.0), CARROT);
        assert_eq!(c, a);
        assert_eq!(pool.len(), 2);
        let item = pool.get(c).unwrap();
        assert!(item.active && !item.collected);
        assert_eq!(item.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_free_list_grows_only_when_empty() {
        let mut pool = ItemPool::new();
        let ids: Vec<u32> = (0..3).map(|_| pool.spawn_at(Vec2::ZERO, CARROT)).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        pool.deactivate(0);
        pool.deactivate(2);
        // Most recently freed first
        assert_eq!(pool.spawn_at(Vec2::ZERO, CARROT), 2);
        assert_eq!(pool.spawn_at(Vec2::ZERO, CARROT), 0);
        assert_eq!(pool.spawn_at(Vec2::ZERO, CARROT), 3);
        assert_eq!(pool.len(), 4);

        // A failed deactivate must not free the slot twice
        assert!(pool.deactivate(1));
        assert!(!pool.deactivate(1));
        assert_eq!(pool.spawn_at(Vec2::ZERO, CARROT), 1);
        assert_eq!(pool.spawn_at(Vec2::ZERO, CARROT), 4);
    }

    #[test]
    fn test_expire_below() {
        let mut pool = ItemPool::new();
        let high = pool.spawn_at(Vec2::new(0.0, -200.0), CARROT);
        let edge = pool.spawn_at(Vec2::new(0.0, 500.0), CARROT);
        let low = pool.spawn_at(Vec2::new(0.0, 900.0), CARROT);
        let taken = pool.spawn_at(Vec2::new(0.0, 900.0), CARROT);
        pool.deactivate(taken);

        assert_eq!(pool.expire_below(500.0), vec![edge, low]);
        assert!(pool.get(high).unwrap().active);
        let item = pool.get(low).unwrap();
        assert!(!item.active && !item.visible && !item.collected);
        // Already-collected carrots are left alone
        assert!(pool.get(taken).unwrap().collected);
        assert!(pool.expire_below(500.0).is_empty());

        // Expired slots are recycled by the next spawns
        let mut reused = vec![
            pool.spawn_at(Vec2::ZERO, CARROT),
            pool.spawn_at(Vec2::ZERO, CARROT),
            pool.spawn_at(Vec2::ZERO, CARROT),
        ];
        reused.sort();
        assert_eq!(reused, vec![edge, low, taken]);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_tracker_starts_at_sentinel() {
        let tracker = CollectionTracker::new();
        assert_eq!(tracker.count(), NOT_STARTED);
        assert_eq!(tracker.label(), "Carrots: 0");
    }

    #[test]
    fn test_collect_is_idempotent() {
        let mut pool = ItemPool::new();
        let mut tracker = CollectionTracker::new();
        let id = pool.spawn_at(Vec2::ZERO, CARROT);

        assert_eq!(tracker.collect(&mut pool, id), Some(0));
        assert_eq!(tracker.collect(&mut pool, id), None);
        assert_eq!(tracker.count(), 0);

        let item = pool.get(id).unwrap();
        assert!(!item.active && !item.visible && item.collected);
        assert_eq!(pool.active().count(), 0);
    }

    #[test]
    fn test_collect_counts_each_distinct_item() {
        let mut pool = ItemPool::new();
        let mut tracker = CollectionTracker::new();
        let ids: Vec<u32> = (0..4)
            .map(|i| pool.spawn_at(Vec2::new(i as f32, 0.0), CARROT))
            .collect();

        let mut last = tracker.count();
        for id in ids {
            let count = tracker.collect(&mut pool, id).unwrap();
            assert_eq!(count, last + 1);
            last = count;
        }
        assert_eq!(tracker.label(), "Carrots: 3");
    }

    #[test]
    fn test_collect_unknown_item() {
        let mut pool = ItemPool::new();
        let mut tracker = CollectionTracker::new();
        assert_eq!(tracker.collect(&mut pool, 99), None);
        assert_eq!(tracker.count(), NOT_STARTED);
    }
}

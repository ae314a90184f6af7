//! Per-frame simulation step
//!
//! Order within a tick: expiry of carrots left below the view, platform
//! recycling and carrot spawns, then player
//! control, then the termination check. Overlap reactions arrive separately
//! through `handle_overlap`, whenever the engine reports them.

use super::rng::UniformSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Engine-provided inputs for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Camera scroll (top of the view in scroll space)
    pub scroll_y: f32,
    /// Engine contact query: player body touching something below
    pub touching_down: bool,
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

/// Advance the game by one frame.
///
/// The player's body position and velocity must already be synced from the
/// engine (`Player::sync_body`). No-op unless a run is in progress.
pub fn tick<R: UniformSource>(state: &mut GameState<R>, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    // Platforms and carrots
    let expiry_y = input.scroll_y + state.tuning.recycle_threshold;
    for id in state.items.expire_below(expiry_y) {
        log::debug!("Carrot {} expired below the view", id);
        state.emit(GameEvent::ItemExpired { id });
    }

    let recycled = state.platforms.tick(
        input.scroll_y,
        state.tuning.recycle_threshold,
        &mut state.rng,
    );
    for platform in &recycled {
        state.emit(GameEvent::PlatformRecycled {
            slot: platform.slot,
        });
        let spawned = state.items.spawn_above(
            platform,
            state.tuning.platform_size.height,
            state.tuning.carrot_size,
        );
        if let Some(id) = spawned {
            state.emit(GameEvent::ItemSpawned { id });
        }
    }

    // Player
    let controller = state.controller;
    let outcome = controller.update(
        &mut state.player,
        input.touching_down,
        input.left,
        input.right,
    );
    if outcome.bounced {
        state.emit(GameEvent::Bounced);
    }
    if let Some(pose) = outcome.pose_changed {
        state.emit(GameEvent::PoseChanged(pose));
    }

    // Termination
    if state.supervisor.check(state.player.pos.y, &state.platforms) {
        state.phase = GamePhase::GameOver;
        let collected = state.tracker.count();
        log::info!("Run over after {} ticks, {}", state.time_ticks, state.hud_label());
        state.emit(GameEvent::RunOver { collected });
    }
}

/// Engine overlap callback: the player touched carrot `item_id`.
///
/// Returns the new count when the carrot was collected.
pub fn handle_overlap<R: UniformSource>(state: &mut GameState<R>, item_id: u32) -> Option<i32> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    let count = state.tracker.collect(&mut state.items, item_id)?;
    state.emit(GameEvent::ItemCollected { id: item_id, count });
    Some(count)
}

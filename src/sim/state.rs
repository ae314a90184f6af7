//! Game state and events
//!
//! One `GameState` lives for the whole session; `initialize` starts (or
//! restarts) a run.

use serde::{Deserialize, Serialize};

use super::item::{CollectionTracker, ItemPool};
use super::platform::PlatformField;
use super::player::{Player, PlayerController, Pose};
use super::rng::{PcgUniform, UniformSource};
use super::supervisor::RunSupervisor;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, `initialize` not yet called
    Idle,
    /// Active run
    Playing,
    /// Run ended; the host should switch to the game-over scene
    GameOver,
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlatformRecycled { slot: usize },
    ItemSpawned { id: u32 },
    /// Uncollected carrot dropped below the view and was returned to the pool
    ItemExpired { id: u32 },
    /// Player bounced off a platform (jump sound)
    Bounced,
    PoseChanged(Pose),
    ItemCollected { id: u32, count: i32 },
    RunOver { collected: i32 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState<R = PcgUniform> {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub platforms: PlatformField,
    pub items: ItemPool,
    pub player: Player,
    pub tracker: CollectionTracker,
    pub supervisor: RunSupervisor,
    /// Ticks since `initialize`
    pub time_ticks: u64,
    #[serde(skip)]
    pub(crate) controller: PlayerController,
    #[serde(skip)]
    pub(crate) rng: R,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState<PcgUniform> {
    /// Create a session with a seeded PCG random source
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, PcgUniform::new(seed))
    }
}

impl<R: UniformSource> GameState<R> {
    /// Create a session with any random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            phase: GamePhase::Idle,
            platforms: PlatformField::new(),
            items: ItemPool::new(),
            player: Player::new(tuning.player_start, tuning.player_size),
            tracker: CollectionTracker::new(),
            supervisor: RunSupervisor::new(tuning.fall_threshold),
            time_ticks: 0,
            controller: PlayerController::from_tuning(&tuning),
            rng,
            events: Vec::new(),
            tuning,
        }
    }

    /// Start a run: lay out platforms, place the player and the first carrot
    pub fn initialize(&mut self) {
        let t = &self.tuning;
        self.platforms.initialize(
            t.platform_count,
            t.spawn_x,
            t.platform_spacing,
            t.rise,
            &mut self.rng,
        );

        self.items.clear();
        self.items.spawn_at(t.first_carrot, t.carrot_size);

        self.player = Player::new(t.player_start, t.player_size);
        self.tracker.reset();
        self.supervisor = RunSupervisor::new(t.fall_threshold);
        self.controller = PlayerController::from_tuning(t);
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Playing;

        log::info!(
            "Run started: {} platforms, player at ({}, {})",
            t.platform_count,
            t.player_start.x,
            t.player_start.y
        );
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// HUD text, e.g. `"Carrots: 3"`
    pub fn hud_label(&self) -> String {
        self.tracker.label()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::item::NOT_STARTED;
    use glam::Vec2;

    #[test]
    fn test_new_is_idle() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn test_initialize() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.initialize();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.platforms.len(), 5);
        assert_eq!(state.player.pos, Vec2::new(240.0, 320.0));
        assert_eq!(state.tracker.count(), NOT_STARTED);
        assert_eq!(state.hud_label(), "Carrots: 0");

        let first: Vec<_> = state.items.active().collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].pos, Vec2::new(240.0, 320.0));
    }

    #[test]
    fn test_reinitialize_resets_run() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.initialize();
        let id = state.items.items()[0].id;
        state.tracker.collect(&mut state.items, id);
        state.items.spawn_at(Vec2::ZERO, state.tuning.carrot_size);
        state.phase = GamePhase::GameOver;

        state.initialize();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.tracker.count(), NOT_STARTED);
        assert_eq!(state.items.len(), 1);
        assert!(!state.supervisor.has_fired());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.emit(GameEvent::Bounced);
        assert_eq!(state.drain_events(), vec![GameEvent::Bounced]);
        assert!(state.drain_events().is_empty());
    }
}

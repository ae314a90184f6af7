//! Headless arcade host
//!
//! A minimal stand-in for the presentation engine so the core can run
//! without a renderer:
//! - Gravity integration of the player body
//! - One-way platform contact (`touching_down`)
//! - Carrot overlap callbacks
//! - A camera that keeps the player vertically centered

pub mod collision;

use crate::consts::SIM_DT;
use crate::sim::{Footprint, GameState, TickInput, UniformSource, handle_overlap, tick};

pub use collision::{CollisionResult, overlapping_items, player_platform_landing};

/// Maximum substeps per frame to prevent spiral of death
pub const MAX_SUBSTEPS: u32 = 8;

/// Camera that follows the player vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scroll_y: f32,
    pub viewport_height: f32,
}

impl Camera {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height,
        }
    }

    pub fn follow(&mut self, target_y: f32) {
        self.scroll_y = target_y - self.viewport_height * 0.5;
    }
}

/// Held directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
}

/// Demo steering for the headless runner.
///
/// At take-off it picks the highest platform within reach and holds that
/// target while rising. Once falling past (or without) a target it switches to
/// the nearest platform below the feet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    target: Option<usize>,
}

/// Share of the full bounce height the autopilot aims for
const AUTOPILOT_REACH: f32 = 0.9;
const AUTOPILOT_DEADZONE: f32 = 10.0;

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot currently steered toward
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn steer<R: UniformSource>(&mut self, state: &GameState<R>) -> Controls {
        let player = &state.player;
        let feet = player.footprint().bottom();
        let platform_half = state.tuning.platform_size.height * 0.5;
        let top = |slot: usize| {
            state
                .platforms
                .get(slot)
                .filter(|p| p.active)
                .map(|p| p.pos.y - platform_half)
        };
        let tops = || {
            state
                .platforms
                .platforms()
                .iter()
                .filter(|p| p.active)
                .map(|p| (p.slot, p.pos.y - platform_half))
        };

        if player.grounded {
            let reach = state.tuning.max_jump_height() * AUTOPILOT_REACH;
            self.target = tops()
                .filter(|&(_, t)| t < feet && t >= feet - reach)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(slot, _)| slot);
        } else if player.vel.y > 0.0 {
            let passed = match self.target {
                Some(slot) => top(slot).is_none_or(|t| t < feet),
                None => true,
            };
            if passed {
                self.target = tops()
                    .filter(|&(_, t)| t >= feet)
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(slot, _)| slot);
            }
        }

        let Some(target) = self.target.and_then(|slot| state.platforms.get(slot)) else {
            return Controls::default();
        };
        let dx = target.pos.x - player.pos.x;
        Controls {
            left: dx < -AUTOPILOT_DEADZONE,
            right: dx > AUTOPILOT_DEADZONE,
        }
    }
}

/// What happened during one physics step
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub touching_down: bool,
    pub collected: Vec<u32>,
}

/// Drives a `GameState` the way the real engine would
#[derive(Debug, Clone)]
pub struct ArcadeHost {
    pub gravity: f32,
    pub camera: Camera,
    pub controls: Controls,
    accumulator: f32,
}

impl ArcadeHost {
    pub fn new<R: UniformSource>(state: &GameState<R>) -> Self {
        let mut camera = Camera::new(state.tuning.viewport_height);
        camera.follow(state.player.pos.y);
        Self {
            gravity: state.tuning.gravity,
            camera,
            controls: Controls::default(),
            accumulator: 0.0,
        }
    }

    /// One fixed step: physics, overlap callbacks, camera, then the core tick
    pub fn step<R: UniformSource>(&mut self, state: &mut GameState<R>, dt: f32) -> StepReport {
        let mut report = StepReport::default();
        if state.is_over() {
            return report;
        }

        // Integrate the body (semi-implicit Euler)
        let prev_bottom = state.player.footprint().bottom();
        let mut vel = state.player.vel;
        vel.y += self.gravity * dt;
        let mut pos = state.player.pos + vel * dt;

        let player_fp = Footprint::new(pos, state.player.size);
        let landing = player_platform_landing(
            prev_bottom,
            &player_fp,
            &state.platforms,
            state.tuning.platform_size,
        );
        if landing.hit {
            pos.y = landing.surface_y - state.player.size.height * 0.5;
            vel.y = 0.0;
            report.touching_down = true;
        }
        state.player.sync_body(pos, vel);

        // Overlap callbacks fire from the physics pass
        for id in overlapping_items(&state.player.footprint(), &state.items) {
            if handle_overlap(state, id).is_some() {
                report.collected.push(id);
            }
        }

        self.camera.follow(state.player.pos.y);

        let input = TickInput {
            scroll_y: self.camera.scroll_y,
            touching_down: report.touching_down,
            left: self.controls.left,
            right: self.controls.right,
        };
        tick(state, &input);
        report
    }

    /// Consume frame time in fixed `SIM_DT` steps; returns steps taken
    pub fn advance<R: UniformSource>(&mut self, state: &mut GameState<R>, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}

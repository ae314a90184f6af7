//! Carrot Hop - A vertical endless platformer
//!
//! Core modules:
//! - `sim`: Gameplay core (platform recycling, bounce control, carrots, run end)
//! - `tuning`: Data-driven game balance
//! - `arcade`: Minimal headless stand-in for the presentation engine

pub mod arcade;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants (reference tuning)
pub mod consts {
    /// Fixed simulation timestep used by the headless runner (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 480.0;
    pub const VIEWPORT_HEIGHT: f32 = 640.0;

    /// Platform pool
    pub const PLATFORM_COUNT: usize = 5;
    pub const PLATFORM_SPACING: f32 = 150.0;
    pub const PLATFORM_SPAWN_X_MIN: f32 = 80.0;
    pub const PLATFORM_SPAWN_X_MAX: f32 = 400.0;
    /// Rise above the camera top when a platform is recycled.
    /// Capped at 90 so every gap stays within a single bounce.
    pub const PLATFORM_RISE_MIN: f32 = 50.0;
    pub const PLATFORM_RISE_MAX: f32 = 90.0;
    /// Distance below camera scroll at which a platform is recycled
    pub const RECYCLE_THRESHOLD: f32 = 700.0;

    /// Player movement
    pub const BOUNCE_IMPULSE: f32 = 300.0;
    pub const MOVE_SPEED: f32 = 200.0;
    /// Engine gravity (pixels/s²), downward
    pub const GRAVITY: f32 = 200.0;
    pub const PLAYER_START_X: f32 = 240.0;
    pub const PLAYER_START_Y: f32 = 320.0;

    /// Run ends once the player is this far below the lowest platform
    pub const FALL_THRESHOLD: f32 = 200.0;

    /// Sprite display sizes (textures at 0.5 scale)
    pub const PLATFORM_WIDTH: f32 = 190.0;
    pub const PLATFORM_HEIGHT: f32 = 47.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 95.0;
    pub const CARROT_WIDTH: f32 = 53.0;
    pub const CARROT_HEIGHT: f32 = 79.0;

    /// Scene the host switches to when the run ends
    pub const GAME_OVER_SCENE: &str = "game-over";
}

/// Wrap an x coordinate across the horizontal screen edges.
///
/// A sprite that leaves fully past one edge re-enters from the other.
/// Values inside `[-half_width, viewport_width + half_width]` are unchanged.
#[inline]
pub fn horizontal_wrap(x: f32, half_width: f32, viewport_width: f32) -> f32 {
    if x < -half_width {
        viewport_width + half_width
    } else if x > viewport_width + half_width {
        -half_width
    } else {
        x
    }
}

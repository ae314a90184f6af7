//! Game balance and layout tuning
//!
//! Loaded from JSON; every missing field falls back to the reference value.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Inclusive `[min, max]` range sampled through a uniform source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Sprite display size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// All knobs that shape a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Platforms ===
    /// Fixed pool size
    pub platform_count: usize,
    /// Vertical distance between platforms at run start
    pub platform_spacing: f32,
    pub spawn_x: Span,
    /// Height above the camera top at which recycled platforms reappear
    pub rise: Span,
    pub recycle_threshold: f32,

    // === Player ===
    pub bounce_impulse: f32,
    pub move_speed: f32,
    /// Engine gravity. The core never integrates it; it bounds `rise`.
    pub gravity: f32,
    pub player_start: Vec2,
    pub fall_threshold: f32,

    // === Sprites ===
    pub platform_size: Size,
    pub player_size: Size,
    pub carrot_size: Size,
    /// Position of the carrot that exists before any recycling
    pub first_carrot: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            platform_count: PLATFORM_COUNT,
            platform_spacing: PLATFORM_SPACING,
            spawn_x: Span::new(PLATFORM_SPAWN_X_MIN, PLATFORM_SPAWN_X_MAX),
            rise: Span::new(PLATFORM_RISE_MIN, PLATFORM_RISE_MAX),
            recycle_threshold: RECYCLE_THRESHOLD,

            bounce_impulse: BOUNCE_IMPULSE,
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            fall_threshold: FALL_THRESHOLD,

            platform_size: Size::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            player_size: Size::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            carrot_size: Size::new(CARROT_WIDTH, CARROT_HEIGHT),
            first_carrot: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Peak height of a single bounce: v² / 2g
    pub fn max_jump_height(&self) -> f32 {
        self.bounce_impulse * self.bounce_impulse / (2.0 * self.gravity)
    }

    /// Check structural sanity and that every recycled gap is reachable
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| Err(TuningError::Invalid(msg));

        if self.platform_count == 0 {
            return invalid("platform_count must be non-zero".into());
        }
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return invalid("viewport dimensions must be positive".into());
        }
        if self.spawn_x.min > self.spawn_x.max {
            return invalid(format!(
                "spawn_x range is inverted ({} > {})",
                self.spawn_x.min, self.spawn_x.max
            ));
        }
        if self.rise.min < 0.0 || self.rise.min > self.rise.max {
            return invalid(format!(
                "rise range must satisfy 0 <= min <= max (got {}..{})",
                self.rise.min, self.rise.max
            ));
        }
        if self.gravity <= 0.0 || self.bounce_impulse <= 0.0 {
            return invalid("gravity and bounce_impulse must be positive".into());
        }
        for (name, size) in [
            ("platform_size", self.platform_size),
            ("player_size", self.player_size),
            ("carrot_size", self.carrot_size),
        ] {
            if size.width <= 0.0 || size.height <= 0.0 {
                return invalid(format!("{name} must be positive"));
            }
        }

        let jump = self.max_jump_height();
        if self.rise.max > jump {
            return invalid(format!(
                "max rise {} exceeds bounce height {}; some platforms would be unreachable",
                self.rise.max, jump
            ));
        }

        Ok(())
    }
}

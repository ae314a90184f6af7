//! Run termination
//!
//! The run is over once the player falls a fixed distance below the lowest
//! platform still in the pool.

use serde::{Deserialize, Serialize};

use super::platform::PlatformField;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSupervisor {
    pub fall_threshold: f32,
    fired: bool,
}

impl RunSupervisor {
    pub fn new(fall_threshold: f32) -> Self {
        Self {
            fall_threshold,
            fired: false,
        }
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true exactly once: on the first check where
    /// `player_y > lowest.y + fall_threshold`.
    pub fn check(&mut self, player_y: f32, platforms: &PlatformField) -> bool {
        if self.fired {
            return false;
        }
        let Some(lowest) = platforms.lowest() else {
            debug_assert!(false, "run supervisor checked an empty platform pool");
            log::warn!("Run check skipped: no platforms");
            return false;
        };
        if player_y > lowest.pos.y + self.fall_threshold {
            log::info!(
                "Player at y={:.1} fell past lowest platform y={:.1}",
                player_y,
                lowest.pos.y
            );
            self.fired = true;
            return true;
        }
        false
    }
}

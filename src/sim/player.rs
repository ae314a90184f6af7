//! The bunny: bounce on contact, steer in the air, wrap at the screen edges
//!
//! Contact comes from the engine's collision pass (`touching.down`); the
//! controller never simulates gravity or landing itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::footprint::Footprint;
use crate::horizontal_wrap;
use crate::tuning::{Size, Tuning};

/// Cosmetic sprite pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pose {
    #[default]
    Idle,
    Jump,
}

/// Player body state as mirrored from the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Size,
    /// Touching down on the last tick
    pub grounded: bool,
    pub pose: Pose,
}

impl Player {
    pub fn new(pos: Vec2, size: Size) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            pose: Pose::Idle,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.size.width * 0.5
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.pos, self.size)
    }

    /// Copy the engine body's position and velocity after its physics step
    pub fn sync_body(&mut self, pos: Vec2, vel: Vec2) {
        self.pos = pos;
        self.vel = vel;
    }
}

/// What changed on a controller update (for audio/sprite hooks)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlOutcome {
    pub bounced: bool,
    pub pose_changed: Option<Pose>,
}

/// Stateless rules applied to the player once per tick
#[derive(Debug, Clone, Copy)]
pub struct PlayerController {
    pub bounce_impulse: f32,
    pub move_speed: f32,
    pub viewport_width: f32,
}

impl PlayerController {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            bounce_impulse: tuning.bounce_impulse,
            move_speed: tuning.move_speed,
            viewport_width: tuning.viewport_width,
        }
    }

    /// Apply contact and steering for one tick, then wrap horizontally.
    ///
    /// Steering only applies in the air. On the tick the pose drops back to
    /// idle the horizontal velocity is left as it was.
    pub fn update(
        &self,
        player: &mut Player,
        touching_down: bool,
        left: bool,
        right: bool,
    ) -> ControlOutcome {
        let mut outcome = ControlOutcome::default();
        player.grounded = touching_down;

        if touching_down {
            player.vel.y = -self.bounce_impulse;
            outcome.bounced = true;
            if player.pose != Pose::Jump {
                player.pose = Pose::Jump;
                outcome.pose_changed = Some(Pose::Jump);
            }
        }

        if player.vel.y > 0.0 && player.pose != Pose::Idle {
            player.pose = Pose::Idle;
            outcome.pose_changed = Some(Pose::Idle);
        } else if left && !touching_down {
            player.vel.x = -self.move_speed;
        } else if right && !touching_down {
            player.vel.x = self.move_speed;
        } else {
            player.vel.x = 0.0;
        }

        self.wrap(player);
        outcome
    }

    pub fn wrap(&self, player: &mut Player) {
        player.pos.x = horizontal_wrap(player.pos.x, player.half_width(), self.viewport_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> PlayerController {
        PlayerController::from_tuning(&Tuning::default())
    }

    fn player() -> Player {
        Player::new(Vec2::new(240.0, 320.0), Size::new(60.0, 95.0))
    }

    #[test]
    fn test_bounce_on_touch_down() {
        let mut p = player();
        let outcome = controller().update(&mut p, true, false, false);
        assert_eq!(p.vel.y, -300.0);
        assert_eq!(p.pose, Pose::Jump);
        assert!(p.grounded);
        assert_eq!(
            outcome,
            ControlOutcome {
                bounced: true,
                pose_changed: Some(Pose::Jump)
            }
        );
    }

    #[test]
    fn test_grounded_ignores_steering() {
        let mut p = player();
        p.vel.x = 200.0;
        controller().update(&mut p, true, true, false);
        assert_eq!(p.vel.x, 0.0);
        controller().update(&mut p, true, false, true);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_air_steering() {
        let c = controller();
        let mut p = player();
        p.vel.y = -100.0;

        c.update(&mut p, false, true, false);
        assert_eq!(p.vel.x, -200.0);
        c.update(&mut p, false, false, true);
        assert_eq!(p.vel.x, 200.0);
        c.update(&mut p, false, false, false);
        assert_eq!(p.vel.x, 0.0);
        // Left wins when both are held
        c.update(&mut p, false, true, true);
        assert_eq!(p.vel.x, -200.0);
    }

    #[test]
    fn test_descending_reverts_pose() {
        let c = controller();
        let mut p = player();
        c.update(&mut p, true, false, false);
        assert_eq!(p.pose, Pose::Jump);

        // Rising: pose stays
        p.vel.y = -10.0;
        assert_eq!(c.update(&mut p, false, false, false).pose_changed, None);
        assert_eq!(p.pose, Pose::Jump);

        // Falling: back to idle
        p.vel.y = 10.0;
        let outcome = c.update(&mut p, false, false, false);
        assert_eq!(outcome.pose_changed, Some(Pose::Idle));
        assert_eq!(p.pose, Pose::Idle);
    }

    #[test]
    fn test_pose_revert_tick_keeps_vx() {
        let c = controller();
        let mut p = player();
        p.pose = Pose::Jump;
        p.vel = Vec2::new(200.0, 10.0);

        c.update(&mut p, false, true, false);
        assert_eq!(p.vel.x, 200.0);

        // Next tick steering applies again
        c.update(&mut p, false, true, false);
        assert_eq!(p.vel.x, -200.0);
    }

    #[test]
    fn test_wrap_applied_every_tick() {
        let c = PlayerController {
            viewport_width: 480.0,
            ..controller()
        };
        let mut p = Player::new(Vec2::new(-50.0, 0.0), Size::new(80.0, 95.0));
        c.update(&mut p, true, false, false);
        assert_eq!(p.pos.x, 520.0);

        p.pos.x = 530.0;
        c.update(&mut p, false, false, false);
        assert_eq!(p.pos.x, -40.0);
    }

    #[test]
    fn test_sync_body() {
        let mut p = player();
        p.sync_body(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(p.pos, Vec2::new(1.0, 2.0));
        assert_eq!(p.vel, Vec2::new(3.0, 4.0));
    }
}

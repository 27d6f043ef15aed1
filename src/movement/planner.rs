use bevy::prelude::*;

use crate::animation::LocomotionClip;

use super::MovementConfig;
use super::components::{CameraBasis, TurnSmoothing};
use super::smoothing::smooth_damp_angle;

#[derive(Debug, Clone, Copy)]
pub struct MovementInput {
    /// `x` strafes right, `y` moves forward.
    pub axes: Vec2,
    pub camera: CameraBasis,
    pub run: bool,
    pub delta: f32,
}

/// What a single frame of movement wants done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementPlan {
    pub displacement: Vec3,
    pub clip: LocomotionClip,
    /// New yaw in degrees, or `None` to leave the heading alone.
    pub heading: Option<f32>,
}

impl MovementPlan {
    pub fn idle() -> Self {
        Self {
            displacement: Vec3::ZERO,
            clip: LocomotionClip::Idle,
            heading: None,
        }
    }
}

/// Turns one frame of input into a displacement, a heading and a clip.
///
/// Walking backwards never turns the character and never runs.
pub fn plan_movement(
    input: &MovementInput,
    current_yaw: f32,
    turn: &mut TurnSmoothing,
    config: &MovementConfig,
) -> MovementPlan {
    if input.axes.length() < config.dead_zone {
        return MovementPlan::idle();
    }

    let (forward, right) = input.camera.horizontal();
    let direction = forward * input.axes.y + right * input.axes.x;

    if input.axes.y < 0.0 {
        return MovementPlan {
            displacement: direction * config.walk_speed * input.delta,
            clip: LocomotionClip::Backwards,
            heading: None,
        };
    }

    let target = direction.x.atan2(direction.z).to_degrees();
    let heading = smooth_damp_angle(
        current_yaw,
        target,
        &mut turn.velocity,
        config.turn_smooth_time,
        input.delta,
    );

    let (speed, clip) = if input.run {
        (config.run_speed, LocomotionClip::Run)
    } else {
        (config.walk_speed, LocomotionClip::Walk)
    };

    MovementPlan {
        displacement: direction.normalize_or_zero() * speed * input.delta,
        clip,
        heading: Some(heading),
    }
}

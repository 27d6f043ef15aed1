use bevy::prelude::*;

use crate::character::ThirdPersonController;
use crate::core::ControllerConfig;
use crate::ground_sensor::Grounded;
use crate::motion::MotionRequests;
use crate::services::MotionService;

use super::GravityConfig;
use super::components::CharacterVelocity;

/// One frame of gravity: returns the new velocity and the displacement it
/// produces.
///
/// Grounded characters are pinned to the grounded bias instead of
/// accumulating. Airborne ones fall with no terminal velocity.
pub fn integrate_gravity(
    grounded: bool,
    velocity: Vec3,
    config: &GravityConfig,
    delta: f32,
) -> (Vec3, Vec3) {
    let mut velocity = velocity;
    if grounded {
        velocity.y = config.grounded_bias;
    } else {
        velocity.y += config.acceleration * delta;
    }
    (velocity, velocity * delta)
}

// The displacement goes out as its own request, separate from the one the
// movement step made this frame.
pub fn apply_gravity(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut characters: Query<
        (&mut CharacterVelocity, &mut MotionRequests, Has<Grounded>),
        With<ThirdPersonController>,
    >,
) {
    for (mut velocity, mut motion, grounded) in &mut characters {
        let (next, displacement) =
            integrate_gravity(grounded, velocity.0, &config.gravity, time.delta_secs());
        velocity.0 = next;
        motion.move_by(displacement);
    }
}

use bevy::prelude::*;

use crate::animation::LocomotionState;
use crate::character::{CameraRig, ThirdPersonController};
use crate::core::ControllerConfig;
use crate::input::ControllerInput;
use crate::motion::MotionRequests;
use crate::services::MotionService;

use super::components::{CameraBasis, TurnSmoothing, rotation_from_yaw, yaw_degrees};
use super::planner::{MovementInput, plan_movement};

#[allow(clippy::type_complexity)]
pub fn move_characters(
    time: Res<Time>,
    input: Res<ControllerInput>,
    config: Res<ControllerConfig>,
    mut characters: Query<
        (
            &mut Transform,
            &mut TurnSmoothing,
            &mut LocomotionState,
            &mut MotionRequests,
            Option<&CameraRig>,
        ),
        With<ThirdPersonController>,
    >,
    cameras: Query<&Transform, (Without<ThirdPersonController>, Without<ChildOf>)>,
) {
    for (mut transform, mut turn, mut state, mut motion, rig) in &mut characters {
        let camera = rig
            .and_then(|rig| cameras.get(rig.camera).ok())
            .map(CameraBasis::from_transform)
            .unwrap_or_default();

        let frame = MovementInput {
            axes: input.axes,
            camera,
            run: input.run,
            delta: time.delta_secs(),
        };

        let plan = plan_movement(
            &frame,
            yaw_degrees(transform.rotation),
            &mut turn,
            &config.movement,
        );

        if let Some(heading) = plan.heading {
            transform.rotation = rotation_from_yaw(heading);
        }

        state.set_if_neq(LocomotionState(plan.clip));
        motion.move_by(plan.displacement);
    }
}

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use crate::character::{FootProbes, ThirdPersonController};
use crate::core::ControllerConfig;
use crate::gravity::CharacterVelocity;
use crate::services::RaycastService;

use super::components::Grounded;

/// True if a short ray straight down from either foot hits ground.
pub fn check_grounded(
    raycaster: &impl RaycastService,
    left_foot: Vec3,
    right_foot: Vec3,
    mask: LayerMask,
    probe_distance: f32,
) -> bool {
    [left_foot, right_foot]
        .into_iter()
        .any(|foot| raycaster.raycast(foot, Dir3::NEG_Y, probe_distance, mask))
}

/// Keeps a grounded character pressed into the floor instead of letting
/// integrated gravity build up.
pub fn stick_to_ground(grounded: bool, velocity: &mut Vec3, bias: f32) {
    if grounded && velocity.y < 0.0 {
        velocity.y = bias;
    }
}

pub fn update_grounded(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    config: Res<ControllerConfig>,
    mut characters: Query<
        (Entity, Option<&FootProbes>, &mut CharacterVelocity, Has<Grounded>),
        With<ThirdPersonController>,
    >,
    transforms: TransformHelper,
) {
    for (entity, feet, mut velocity, was_grounded) in &mut characters {
        // Freshly spawned feet have no propagated GlobalTransform yet.
        let positions = feet.and_then(|feet| {
            let left = transforms.compute_global_transform(feet.left).ok()?;
            let right = transforms.compute_global_transform(feet.right).ok()?;
            Some((left.translation(), right.translation()))
        });

        // Missing probes were reported at setup; such a character just falls.
        let is_grounded = positions.is_some_and(|(left, right)| {
            check_grounded(
                &spatial_query,
                left,
                right,
                config.ground.mask(),
                config.ground.probe_distance,
            )
        });

        let bias = config.gravity.grounded_bias;
        stick_to_ground(is_grounded, &mut velocity.0, bias);

        if is_grounded && !was_grounded {
            commands.entity(entity).insert(Grounded);
        } else if !is_grounded && was_grounded {
            commands.entity(entity).remove::<Grounded>();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Reports a hit for origins below `floor + max_distance`.
    struct FlatFloor {
        floor: f32,
        layers: LayerMask,
        casts: RefCell<Vec<(Vec3, f32)>>,
    }

    impl FlatFloor {
        fn new(floor: f32) -> Self {
            Self {
                floor,
                layers: LayerMask(1),
                casts: RefCell::new(Vec::new()),
            }
        }
    }

    impl RaycastService for FlatFloor {
        fn raycast(
            &self,
            origin: Vec3,
            direction: Dir3,
            max_distance: f32,
            mask: LayerMask,
        ) -> bool {
            self.casts.borrow_mut().push((origin, max_distance));
            direction == Dir3::NEG_Y
                && (mask & self.layers) != LayerMask::NONE
                && origin.y >= self.floor
                && origin.y - self.floor <= max_distance
        }
    }

    #[test]
    fn either_foot_grounds_the_character() {
        let floor = FlatFloor::new(0.0);
        let mask = LayerMask(1);
        let low = Vec3::new(0.0, 0.05, 0.0);
        let high = Vec3::new(0.0, 1.0, 0.0);
        let hovering = Vec3::new(0.0, 0.2, 0.0);

        assert!(check_grounded(&floor, low, high, mask, 0.1));
        assert!(check_grounded(&floor, high, low, mask, 0.1));
        assert!(!check_grounded(&floor, hovering, hovering, mask, 0.1));
    }

    #[test]
    fn probes_use_configured_distance() {
        let floor = FlatFloor::new(0.0);
        check_grounded(&floor, Vec3::Y, Vec3::Y, LayerMask(1), 0.1);
        let casts = floor.casts.borrow();
        assert_eq!(casts.len(), 2);
        assert!(casts.iter().all(|(_, distance)| *distance == 0.1));
    }

    #[test]
    fn other_layers_are_not_ground() {
        let floor = FlatFloor::new(0.0);
        assert!(!check_grounded(&floor, Vec3::ZERO, Vec3::ZERO, LayerMask(1 << 3), 0.1));
    }

    #[test]
    fn stick_only_clamps_falling_velocity() {
        let mut velocity = Vec3::new(0.0, -15.0, 0.0);
        stick_to_ground(true, &mut velocity, -2.0);
        assert_eq!(velocity.y, -2.0);

        let mut rising = Vec3::new(0.0, 3.0, 0.0);
        stick_to_ground(true, &mut rising, -2.0);
        assert_eq!(rising.y, 3.0);

        let mut falling = Vec3::new(0.0, -15.0, 0.0);
        stick_to_ground(false, &mut falling, -2.0);
        assert_eq!(falling.y, -15.0);
    }
}

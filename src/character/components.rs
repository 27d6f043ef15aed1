use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::LocomotionState;
use crate::error::SetupError;
use crate::gravity::CharacterVelocity;
use crate::ground_sensor::COLLISION_LAYER_GROUND;
use crate::motion::MotionRequests;
use crate::movement::TurnSmoothing;

use super::COLLISION_LAYER_CHARACTER;

/// Marks an entity driven by the third-person controller.
#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
#[require(CharacterVelocity, TurnSmoothing, LocomotionState, MotionRequests)]
pub struct ThirdPersonController;

/// Camera entity and the head anchor it copies every frame.
///
/// The camera must be a root entity: its local `Transform` receives the
/// head's world pose and is read back as the movement basis. A parented
/// camera is left alone and movement falls back to a basis looking along +Z.
#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    pub camera: Entity,
    pub head: Entity,
}

/// Origins of the two ground probes.
#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct FootProbes {
    pub left: Entity,
    pub right: Entity,
}

/// Entity holding the `AnimationPlayer` and `LocomotionClips` for this character.
#[derive(Debug, Clone, Copy, Component, Reflect)]
#[reflect(Component)]
pub struct AnimatorLink(pub Entity);

/// Faults found when the controller was initialized.
#[derive(Debug, Clone, Default, Component)]
pub struct SetupReport {
    pub errors: Vec<SetupError>,
}

impl SetupReport {
    pub fn is_degraded(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has(&self, error: SetupError) -> bool {
        self.errors.contains(&error)
    }
}

#[derive(Debug, Clone, Bundle)]
pub struct CharacterBundle {
    pub name: Name,
    pub controller: ThirdPersonController,
    pub transform: Transform,
    pub body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
}

impl CharacterBundle {
    pub fn new(name: &str, position: Vec3, radius: f32, height: f32) -> Self {
        Self {
            name: Name::new(name.to_string()),
            controller: ThirdPersonController,
            transform: Transform::from_translation(position),
            body: RigidBody::Kinematic,
            collider: Collider::capsule(radius, (height - 2.0 * radius).max(0.0)),
            collision_layers: CollisionLayers::new(
                LayerMask(COLLISION_LAYER_CHARACTER),
                LayerMask(COLLISION_LAYER_GROUND),
            ),
        }
    }
}

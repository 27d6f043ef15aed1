use avian3d::prelude::*;
use bevy::prelude::*;

use crate::{character::COLLISION_LAYER_CHARACTER, ground_sensor::COLLISION_LAYER_GROUND};

#[derive(Debug, Clone, Copy, Default, Component, Reflect)]
#[reflect(Component)]
pub struct Block;

/// Static box the player can stand on and bump into.
#[derive(Debug, Clone, Bundle, Default)]
pub struct BlockBundle {
    pub block: Block,
    pub position: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layer: CollisionLayers,
}

impl BlockBundle {
    /// `base` is the centre of the block's bottom face.
    pub fn new(base: Vec3, size: Vec3) -> Self {
        Self {
            block: Block,
            position: Transform::from_translation(base + Vec3::Y * size.y / 2.0),
            rigid_body: RigidBody::Static,
            collider: Collider::cuboid(size.x, size.y, size.z),
            collision_layer: CollisionLayers::new(
                LayerMask(COLLISION_LAYER_GROUND),
                LayerMask(COLLISION_LAYER_CHARACTER),
            ),
        }
    }
}

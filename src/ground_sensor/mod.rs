mod components;
mod systems;

use avian3d::prelude::*;
use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use systems::{check_grounded, stick_to_ground};

use crate::core::ControllerSet;

pub const COLLISION_LAYER_GROUND: u32 = 1 << 0;

#[derive(Debug, Clone, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
pub struct GroundSensorConfig {
    /// Length of each downward foot probe.
    #[derivative(Default(value = "0.1"))]
    pub probe_distance: f32,
    /// Collision layers that count as ground.
    #[derivative(Default(value = "COLLISION_LAYER_GROUND"))]
    pub layers: u32,
}

impl GroundSensorConfig {
    pub fn mask(&self) -> LayerMask {
        LayerMask(self.layers)
    }
}

pub struct GroundSensorPlugin;
impl Plugin for GroundSensorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::update_grounded.in_set(ControllerSet::Sense),
        );
    }
}

mod components;
mod systems;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use systems::integrate_gravity;

use crate::core::ControllerSet;

#[derive(Debug, Clone, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
pub struct GravityConfig {
    /// Vertical acceleration while airborne (units/second^2).
    #[derivative(Default(value = "-9.81"))]
    pub acceleration: f32,
    /// Vertical velocity held while grounded, keeps the probes touching the floor.
    #[derivative(Default(value = "-2.0"))]
    pub grounded_bias: f32,
}

pub struct GravityPlugin;
impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharacterVelocity>();
        app.add_systems(
            Update,
            systems::apply_gravity.in_set(ControllerSet::Gravity),
        );
    }
}

mod components;
mod planner;
mod smoothing;
mod systems;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

pub use components::*;
pub use planner::*;
pub use smoothing::*;

use crate::core::ControllerSet;

#[derive(Debug, Clone, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
pub struct MovementConfig {
    #[derivative(Default(value = "2.0"))]
    pub walk_speed: f32,
    #[derivative(Default(value = "6.0"))]
    pub run_speed: f32,
    /// Seconds the heading takes to catch up with the input direction.
    #[derivative(Default(value = "0.1"))]
    pub turn_smooth_time: f32,
    /// Input magnitudes below this are treated as no input.
    #[derivative(Default(value = "0.1"))]
    pub dead_zone: f32,
}

pub struct MovementPlugin;
impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TurnSmoothing>();
        app.add_systems(
            Update,
            systems::move_characters.in_set(ControllerSet::Move),
        );
    }
}

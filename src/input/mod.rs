mod systems;

use bevy::prelude::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::core::ControllerSet;

/// Input sampled once per frame. Hosts without a keyboard can write this
/// directly instead of using the key bindings.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct ControllerInput {
    /// `x` strafes right, `y` moves forward; each in `-1.0..=1.0`.
    pub axes: Vec2,
    pub run: bool,
}

#[derive(Debug, Clone, Reflect, Derivative, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default)]
pub struct InputBindings {
    #[derivative(Default(value = "KeyCode::KeyW"))]
    pub forward: KeyCode,
    #[derivative(Default(value = "KeyCode::KeyS"))]
    pub back: KeyCode,
    #[derivative(Default(value = "KeyCode::KeyA"))]
    pub left: KeyCode,
    #[derivative(Default(value = "KeyCode::KeyD"))]
    pub right: KeyCode,
    #[derivative(Default(value = "KeyCode::ShiftLeft"))]
    pub run: KeyCode,
}

pub struct InputBindingsPlugin;
impl Plugin for InputBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerInput>();
        app.init_resource::<ControllerInput>();
        app.add_systems(
            Update,
            systems::read_keyboard_input
                .run_if(resource_exists::<ButtonInput<KeyCode>>)
                .in_set(ControllerSet::Input),
        );
    }
}

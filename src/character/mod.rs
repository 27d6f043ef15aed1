mod components;
mod systems;

use bevy::prelude::*;

pub use components::*;
pub use systems::{SpawnedCharacter, find_setup_errors, spawn_character};

use crate::core::ControllerSet;

pub const COLLISION_LAYER_CHARACTER: u32 = 1 << 1;

pub struct CharacterPlugin;
impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::initialize_controllers,
                crate::motion::clear_motion_requests,
            )
                .in_set(ControllerSet::Initialize),
        );
    }
}

mod components;
mod systems;

use bevy::prelude::*;

pub use components::*;
pub use systems::play_clip;

use crate::core::ControllerSet;

pub struct AnimationSelectorPlugin;
impl Plugin for AnimationSelectorPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionState>();
        app.add_systems(
            Update,
            systems::play_locomotion_clips.in_set(ControllerSet::Animate),
        );
    }
}

mod components;
mod systems;

use bevy::prelude::*;

pub use components::*;
pub use systems::sync_camera;

use crate::core::ControllerSet;

pub struct CameraRigPlugin;
impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::follow_head.in_set(ControllerSet::Camera),
        );
    }
}

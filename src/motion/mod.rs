mod components;
mod systems;

use bevy::prelude::*;

pub use components::*;
pub use systems::{SweepHit, clear_motion_requests, slide};

use crate::core::ControllerSet;

pub const MAX_SLIDES: usize = 4;
pub const SKIN_WIDTH: f32 = 0.01;

/// Applies the displacements queued in [`MotionRequests`], sliding along
/// whatever the character's collider runs into.
pub struct MotionPlugin;
impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::apply_motion_requests.in_set(ControllerSet::Motion),
        );
    }
}

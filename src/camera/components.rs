use bevy::prelude::*;

/// Point on the character rig the camera is glued to.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct HeadAnchor;

/// The camera driven by a character's [`crate::character::CameraRig`].
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CameraAnchor;

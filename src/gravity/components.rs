use bevy::prelude::*;

/// Integrated velocity of a character. Only `y` is ever non-zero; horizontal
/// motion is planned fresh from input every frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterVelocity(pub Vec3);

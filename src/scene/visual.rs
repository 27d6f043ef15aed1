use bevy::prelude::*;

#[derive(Resource)]
pub struct SceneGraphicsAssets {
    pub ground: Handle<StandardMaterial>,
    pub block: Handle<StandardMaterial>,
    pub player: Handle<StandardMaterial>,
}

impl FromWorld for SceneGraphicsAssets {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let ground = materials.add(Color::srgb(0.3, 0.5, 0.3));
        let block = materials.add(Color::srgb(0.4, 0.4, 0.45));
        let player = materials.add(Color::srgb(1.0, 0.0, 0.0));

        Self {
            ground,
            block,
            player,
        }
    }
}

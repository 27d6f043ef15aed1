mod components;
mod systems;
mod visual;

use bevy::prelude::*;

pub use components::*;
pub use visual::*;

use crate::core::ControllerConfig;

pub const GROUND_SIZE: f32 = 100.0;
pub const PLAYER_RADIUS: f32 = 0.3;
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Demo level: a ground plane, a few blocks and one player.
pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 1_500.0,
            ..Default::default()
        });

        app.add_systems(PreStartup, init_scene_assets);
        app.add_systems(
            Startup,
            (
                systems::setup_scene,
                systems::spawn_blocks,
                systems::spawn_player,
            ),
        );
    }
}

fn init_scene_assets(mut commands: Commands, config: Res<ControllerConfig>) {
    if !config.headless {
        commands.init_resource::<SceneGraphicsAssets>();
    }
}

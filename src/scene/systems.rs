use avian3d::prelude::*;
use bevy::prelude::*;

use crate::{
    character::{COLLISION_LAYER_CHARACTER, spawn_character},
    core::ControllerConfig,
    ground_sensor::COLLISION_LAYER_GROUND,
    scene::{BlockBundle, GROUND_SIZE, PLAYER_HEIGHT, PLAYER_RADIUS, SceneGraphicsAssets},
};

const BLOCKS: [(Vec3, Vec3); 4] = [
    (Vec3::new(4.0, 0.0, 6.0), Vec3::new(2.0, 0.3, 2.0)),
    (Vec3::new(-5.0, 0.0, 3.0), Vec3::new(1.0, 2.0, 6.0)),
    (Vec3::new(0.0, 0.0, -8.0), Vec3::new(8.0, 1.0, 1.0)),
    (Vec3::new(7.0, 0.0, -3.0), Vec3::new(3.0, 0.15, 3.0)),
];

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    graphics: Option<Res<SceneGraphicsAssets>>,
) {
    let mut entity = commands.spawn((
        Name::new("Ground Plane"),
        Transform::from_xyz(0.0, -0.5, 0.0)
            .with_scale(Vec3::new(GROUND_SIZE, 1.0, GROUND_SIZE)),
        RigidBody::Static,
        Collider::cuboid(1.0, 1.0, 1.0),
        CollisionLayers::new(
            LayerMask(COLLISION_LAYER_GROUND),
            LayerMask(COLLISION_LAYER_CHARACTER),
        ),
    ));

    if let (Some(meshes), Some(graphics)) = (&mut meshes, &graphics) {
        let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
        entity.insert((Mesh3d(mesh), MeshMaterial3d(graphics.ground.clone())));
        commands.spawn((
            DirectionalLight {
                shadows_enabled: true,
                ..default()
            },
            Transform::from_xyz(4.0, 10.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }
}

pub fn spawn_blocks(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    graphics: Option<Res<SceneGraphicsAssets>>,
) {
    for (index, (base, size)) in BLOCKS.into_iter().enumerate() {
        let mut entity = commands.spawn((
            Name::new(format!("Block {index}")),
            BlockBundle::new(base, size),
        ));

        if let (Some(meshes), Some(graphics)) = (&mut meshes, &graphics) {
            let mesh = meshes.add(Cuboid::new(size.x, size.y, size.z));
            entity.insert((Mesh3d(mesh), MeshMaterial3d(graphics.block.clone())));
        }
    }
}

pub fn spawn_player(
    mut commands: Commands,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    graphics: Option<Res<SceneGraphicsAssets>>,
    config: Res<ControllerConfig>,
) {
    let spawned = spawn_character(
        &mut commands,
        "Player",
        Vec3::new(0.0, PLAYER_HEIGHT / 2.0 + 0.5, 0.0),
        PLAYER_RADIUS,
        PLAYER_HEIGHT,
    );

    if config.headless {
        return;
    }

    commands.entity(spawned.camera).insert(Camera3d::default());

    if let (Some(meshes), Some(graphics)) = (&mut meshes, &graphics) {
        let mesh = meshes.add(Capsule3d::new(
            PLAYER_RADIUS,
            PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS,
        ));
        commands.entity(spawned.character).insert((
            Mesh3d(mesh),
            MeshMaterial3d(graphics.player.clone()),
        ));
    }
}

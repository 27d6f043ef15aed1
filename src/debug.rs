use avian3d::debug_render::PhysicsDebugPlugin;
use avian3d::prelude::*;
use bevy::{
    diagnostic::FrameTimeDiagnosticsPlugin, input::common_conditions::input_just_pressed,
    prelude::*, transform::TransformSystems,
};
use bevy_inspector_egui::{bevy_egui::EguiPlugin, quick::WorldInspectorPlugin};

use crate::character::FootProbes;
use crate::ground_sensor::Grounded;

const PROBE_BOX_SIZE: f32 = 0.1;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        // Add diagnostics.
        app.add_plugins((
            PhysicsDiagnosticsPlugin,
            PhysicsDiagnosticsUiPlugin,
            PhysicsDebugPlugin,
            EguiPlugin::default(),
            WorldInspectorPlugin::new(),
            FrameTimeDiagnosticsPlugin::default(),
        ));

        app.insert_resource(PhysicsDiagnosticsUiSettings {
            enabled: false,
            ..default()
        });

        app.add_systems(Startup, setup_key_instructions);

        app.add_systems(
            Update,
            (
                toggle_diagnostics_ui.run_if(input_just_pressed(KeyCode::KeyU)),
                toggle_paused.run_if(input_just_pressed(KeyCode::KeyP)),
                step.run_if(physics_paused.and(input_just_pressed(KeyCode::Enter))),
            ),
        );

        app.add_systems(
            PostUpdate,
            draw_foot_probes.after(TransformSystems::Propagate),
        );
    }
}

fn toggle_diagnostics_ui(mut settings: ResMut<PhysicsDiagnosticsUiSettings>) {
    settings.enabled = !settings.enabled;
}

fn physics_paused(time: Res<Time<Physics>>) -> bool {
    time.is_paused()
}

fn toggle_paused(mut time: ResMut<Time<Physics>>) {
    if time.is_paused() {
        time.unpause();
    } else {
        time.pause();
    }
}

/// Advances the physics simulation by one `Time<Fixed>` time step.
fn step(mut physics_time: ResMut<Time<Physics>>, fixed_time: Res<Time<Fixed>>) {
    physics_time.advance_by(fixed_time.delta());
}

fn setup_key_instructions(mut commands: Commands) {
    commands.spawn((
        Text::new("WASD: Move | Shift: Run | U: Diagnostics UI | P: Pause/Unpause | Enter: Step"),
        TextFont {
            font_size: 10.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            right: Val::Px(5.0),
            ..default()
        },
    ));
}

/// Wireframe boxes on each foot probe; green while grounded.
pub fn draw_foot_probes(
    mut gizmos: Gizmos,
    characters: Query<(&FootProbes, Has<Grounded>)>,
    probes: Query<&GlobalTransform>,
) {
    for (feet, grounded) in &characters {
        let color = if grounded {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::srgb(1.0, 0.0, 0.0)
        };

        for probe in [feet.left, feet.right] {
            let Ok(probe) = probes.get(probe) else {
                continue;
            };
            gizmos.cuboid(
                Transform::from_translation(probe.translation())
                    .with_scale(Vec3::splat(PROBE_BOX_SIZE)),
                color,
            );
        }
    }
}

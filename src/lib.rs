pub mod animation;
pub mod camera;
pub mod character;
pub mod core;
pub mod debug;
pub mod error;
pub mod gravity;
pub mod ground_sensor;
pub mod input;
pub mod motion;
pub mod movement;
pub mod scene;
pub mod services;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::ControllerConfig;
use crate::error::ConfigError;

pub mod prelude {
    pub use crate::animation::{
        AnimationSelectorPlugin, ClipAnimator, LocomotionClip, LocomotionClips, LocomotionState,
    };
    pub use crate::camera::{CameraAnchor, CameraRigPlugin, HeadAnchor};
    pub use crate::character::{
        AnimatorLink, CameraRig, CharacterBundle, FootProbes, SetupReport, ThirdPersonController,
        spawn_character,
    };
    pub use crate::core::{ControllerConfig, ControllerCorePlugin, ControllerSet, ThirdPersonPlugin};
    pub use crate::error::{ConfigError, SetupError, Severity};
    pub use crate::gravity::CharacterVelocity;
    pub use crate::ground_sensor::Grounded;
    pub use crate::input::ControllerInput;
    pub use crate::motion::MotionRequests;
    pub use crate::movement::TurnSmoothing;
    pub use crate::services::{AnimationService, MotionService, RaycastService};
}

pub fn parse_config(config_path: &str) -> Result<ControllerConfig, ConfigError> {
    let config_str = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_string(),
        source,
    })?;

    serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Parse {
        path: config_path.to_string(),
        source,
    })
}

/// Physics and transforms without a window or renderer.
pub fn add_headless_plugins(app: &mut App) {
    app.add_plugins((MinimalPlugins, TransformPlugin, PhysicsPlugins::default()));
    // Avian's collider hierarchy and mesh colliders expect these to exist.
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.init_resource::<Assets<Mesh>>();
}

/// Demo app: the controller, physics, and the demo scene. A headless config
/// runs without a window and skips the debug overlay.
pub fn generate_app(config: ControllerConfig) -> App {
    let mut app = App::new();
    if config.headless {
        add_headless_plugins(&mut app);
    } else {
        app.add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Third Person Controller".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            PhysicsPlugins::default(),
        ));

        if config.debug {
            app.add_plugins(debug::DebugPlugin);
        }
    }

    app.add_plugins((
        core::ThirdPersonPlugin {
            config: config.clone(),
        },
        scene::ScenePlugin,
    ));

    app
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "movement:\n  run_speed: 8.0\ngravity:\n  acceleration: -20.0\ndebug: true"
        )
        .unwrap();

        let config = parse_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.movement.run_speed, 8.0);
        assert_eq!(config.movement.walk_speed, 2.0);
        assert_eq!(config.gravity.acceleration, -20.0);
        assert_eq!(config.gravity.grounded_bias, -2.0);
        assert!(config.debug);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = parse_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn headless_app_spawns_the_player_without_a_window() {
        let mut app = generate_app(ControllerConfig {
            headless: true,
            debug: true,
            ..Default::default()
        });
        app.finish();
        app.cleanup();
        app.update();

        let world = app.world_mut();
        assert_eq!(world.query::<&Window>().iter(world).count(), 0);

        let players: Vec<_> = world
            .query_filtered::<&Name, With<character::ThirdPersonController>>()
            .iter(world)
            .collect();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].as_str(), "Player");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "movement: [1, 2").unwrap();

        let err = parse_config(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

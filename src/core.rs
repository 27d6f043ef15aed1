use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation;
use crate::camera;
use crate::character;
use crate::gravity;
use crate::ground_sensor;
use crate::input;
use crate::motion;
use crate::movement;

#[derive(Debug, Clone, Default, Resource, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[reflect(Resource)]
pub struct ControllerConfig {
    pub movement: movement::MovementConfig,
    pub gravity: gravity::GravityConfig,
    pub ground: ground_sensor::GroundSensorConfig,
    pub input: input::InputBindings,
    pub debug: bool,
    /// Run `generate_app` without a window and spawn the demo player without
    /// a camera or meshes.
    pub headless: bool,
}

impl fmt::Display for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Per-frame order of the controller steps.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Initialize,
    Input,
    Sense,
    Move,
    Gravity,
    Motion,
    Camera,
    Animate,
}

/// Everything except the physics-backed steps: ground probing and
/// collision-aware motion. Useful for hosts that supply those themselves.
pub struct ControllerCorePlugin {
    pub config: ControllerConfig,
}

impl Plugin for ControllerCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.register_type::<ControllerConfig>();
        app.add_systems(Startup, log_config);

        app.configure_sets(
            Update,
            (
                ControllerSet::Initialize,
                ControllerSet::Input,
                ControllerSet::Sense,
                ControllerSet::Move,
                ControllerSet::Gravity,
                ControllerSet::Motion,
                ControllerSet::Camera,
                ControllerSet::Animate,
            )
                .chain(),
        );

        app.add_plugins((
            character::CharacterPlugin,
            input::InputBindingsPlugin,
            movement::MovementPlugin,
            gravity::GravityPlugin,
            camera::CameraRigPlugin,
            animation::AnimationSelectorPlugin,
        ));
    }
}

fn log_config(config: Res<ControllerConfig>) {
    info!("Controller config:\n{}", *config);
}

pub struct ThirdPersonPlugin {
    pub config: ControllerConfig,
}

impl Plugin for ThirdPersonPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ControllerCorePlugin {
                config: self.config.clone(),
            },
            ground_sensor::GroundSensorPlugin,
            motion::MotionPlugin,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_tuned_constants() {
        let config = ControllerConfig::default();
        assert_eq!(config.movement.turn_smooth_time, 0.1);
        assert_eq!(config.movement.dead_zone, 0.1);
        assert_eq!(config.gravity.grounded_bias, -2.0);
        assert_eq!(config.gravity.acceleration, -9.81);
        assert_eq!(config.ground.probe_distance, 0.1);
        assert!(!config.debug);
    }

    #[test]
    fn display_is_pretty_json() {
        let rendered = ControllerConfig::default().to_string();
        assert!(rendered.contains("\"walk_speed\""));
        assert!(rendered.contains('\n'));
    }
}

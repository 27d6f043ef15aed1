use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraAnchor, HeadAnchor};
use crate::error::{FootSide, Severity, SetupError};

use super::components::{
    AnimatorLink, CameraRig, CharacterBundle, FootProbes, SetupReport, ThirdPersonController,
};

const FOOT_SPACING: f32 = 0.15;
const HEAD_HEIGHT: f32 = 1.6;
const CAMERA_LIFT: f32 = 0.5;
const CAMERA_DISTANCE: f32 = 3.0;

/// Checks every reference a controller needs. `exists` answers whether an
/// entity is alive with a transform; `is_animator` whether it carries an
/// animation player.
pub fn find_setup_errors(
    has_body: bool,
    animator: Option<&AnimatorLink>,
    rig: Option<&CameraRig>,
    feet: Option<&FootProbes>,
    exists: impl Fn(Entity) -> bool,
    is_animator: impl Fn(Entity) -> bool,
) -> Vec<SetupError> {
    let mut errors = Vec::new();

    if !has_body {
        errors.push(SetupError::MissingBody);
    }

    if !animator.is_some_and(|AnimatorLink(entity)| is_animator(*entity)) {
        errors.push(SetupError::MissingAnimator);
    }

    match rig {
        Some(rig) => {
            if !exists(rig.camera) {
                errors.push(SetupError::MissingCameraAnchor);
            }
            if !exists(rig.head) {
                errors.push(SetupError::MissingHeadAnchor);
            }
        }
        None => {
            errors.push(SetupError::MissingCameraAnchor);
            errors.push(SetupError::MissingHeadAnchor);
        }
    }

    for (side, probe) in [
        (FootSide::Left, feet.map(|f| f.left)),
        (FootSide::Right, feet.map(|f| f.right)),
    ] {
        if !probe.is_some_and(&exists) {
            errors.push(SetupError::MissingFootProbe { side });
        }
    }

    errors
}

#[allow(clippy::type_complexity)]
pub fn initialize_controllers(
    mut commands: Commands,
    added: Query<
        (
            Entity,
            Option<&Name>,
            Has<Collider>,
            Option<&AnimatorLink>,
            Option<&CameraRig>,
            Option<&FootProbes>,
        ),
        Added<ThirdPersonController>,
    >,
    anchors: Query<(), With<Transform>>,
    animators: Query<(), With<AnimationPlayer>>,
) {
    for (entity, name, has_body, animator, rig, feet) in &added {
        let errors = find_setup_errors(
            has_body,
            animator,
            rig,
            feet,
            |e| anchors.contains(e),
            |e| animators.contains(e),
        );

        let label = name.map_or_else(|| format!("{entity:?}"), |name| name.to_string());
        for error in &errors {
            match error.severity() {
                Severity::Warning => warn!("Character {}: {}", label, error),
                Severity::Error => error!("Character {}: {}", label, error),
            }
        }
        if errors.is_empty() {
            info!("Character {} initialized", label);
        }

        commands.entity(entity).insert(SetupReport { errors });
    }
}

/// Entities created by [`spawn_character`].
#[derive(Debug, Clone, Copy)]
pub struct SpawnedCharacter {
    pub character: Entity,
    pub camera: Entity,
    pub head: Entity,
    pub feet: FootProbes,
}

/// Spawns a capsule character with its head and foot anchors, plus a camera
/// entity that follows the head.
pub fn spawn_character(
    commands: &mut Commands,
    name: &str,
    position: Vec3,
    radius: f32,
    height: f32,
) -> SpawnedCharacter {
    let half_height = height / 2.0;

    let camera = commands
        .spawn((Name::new("Character Camera"), CameraAnchor, Transform::default()))
        .id();

    let character = commands
        .spawn(CharacterBundle::new(name, position, radius, height))
        .id();

    // Behind and above the head, looking past it along the character's facing.
    let eye = HEAD_HEIGHT.min(height) - half_height;
    let head = commands
        .spawn((
            Name::new("Head Anchor"),
            HeadAnchor,
            Transform::from_xyz(0.0, eye + CAMERA_LIFT, -CAMERA_DISTANCE)
                .looking_at(Vec3::new(0.0, eye, CAMERA_DISTANCE), Vec3::Y),
            ChildOf(character),
        ))
        .id();

    // Character faces +Z, so its left is +X.
    let mut foot = |name: &str, x: f32| {
        commands
            .spawn((
                Name::new(name.to_string()),
                Transform::from_xyz(x, -half_height, 0.0),
                ChildOf(character),
            ))
            .id()
    };
    let feet = FootProbes {
        left: foot("Left Foot", FOOT_SPACING),
        right: foot("Right Foot", -FOOT_SPACING),
    };

    commands
        .entity(character)
        .insert((CameraRig { camera, head }, feet));

    SpawnedCharacter {
        character,
        camera,
        head,
        feet,
    }
}
